//! Declaration fingerprinting
//!
//! Feeds every input of a resolution into a `Fingerprint`: the syntax
//! settings, the raw directives of each scope in resolution order with the
//! class that declared each one, and the declared types of the target's
//! properties. Equal fingerprints mean `resolve` sees the same input.

use crate::domain::entities::ClassTarget;
use crate::domain::ports::DirectiveSource;
use crate::domain::value_objects::{Fingerprint, FingerprintBuilder, ScopeKind, Syntax};
use crate::error::SetupFailure;

pub fn declaration_fingerprint(
    source: &dyn DirectiveSource,
    syntax: &Syntax,
    target: &ClassTarget,
) -> Result<Fingerprint, SetupFailure> {
    let mut builder = Fingerprint::builder()
        .field(syntax.parameter_sigil())
        .field(syntax.attribute_sigil())
        .field(syntax.namespace_separator())
        .field(target.name());

    for property in target.properties() {
        builder = scope_fields(builder, source, target, ScopeKind::Property, property)?;
        builder = builder.field(
            source
                .declared_type(target, property)
                .as_deref()
                .unwrap_or_default(),
        );
    }
    builder = scope_fields(builder, source, target, ScopeKind::Class, target.name())?;
    for method in target.methods() {
        builder = scope_fields(builder, source, target, ScopeKind::Method, method)?;
    }

    Ok(builder.finish())
}

fn scope_fields(
    mut builder: FingerprintBuilder,
    source: &dyn DirectiveSource,
    target: &ClassTarget,
    scope: ScopeKind,
    member: &str,
) -> Result<FingerprintBuilder, SetupFailure> {
    let lookup = if scope.is_class() { None } else { Some(member) };
    let directives = source
        .raw_directives(target, scope, lookup)
        .map_err(|e| SetupFailure::from_source(target.name(), scope, member, e))?;

    builder = builder
        .field(scope.as_str())
        .field(member)
        .field(&directives.len().to_string());
    for directive in &directives {
        builder = builder
            .field(&directive.name)
            .field(&directive.arguments)
            .field(directive.declared_in.as_deref().unwrap_or_default());
    }
    Ok(builder)
}
