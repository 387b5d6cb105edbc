//! Resolver - turns a class's directives into a `ResolutionResult`
//!
//! Scopes are walked in a fixed order:
//!
//! 1. Properties, in caller order. Their `__di` entries are merged into one
//!    running map; a later property wins on key collision.
//! 2. The class scope, seeded with the property map. Explicit class entries
//!    win on key collision. A protected class ends resolution with an
//!    excluded, empty result.
//! 3. Methods, in caller order. Protected methods are listed; the others
//!    are stored when they carry attributes.
//!
//! The first failure aborts the call with a `SetupFailure`.

use std::sync::Arc;

use crate::domain::entities::{ClassTarget, ResolutionResult, ScopeAttributes, CLASS_MEMBER};
use crate::domain::grammar::ScopeContext;
use crate::domain::ports::DirectiveSource;
use crate::domain::registry::DirectiveRegistry;
use crate::domain::services::fingerprint::declaration_fingerprint;
use crate::domain::services::scope_walker::{ScopeOutcome, ScopeWalker};
use crate::domain::value_objects::{Fingerprint, ScopeKind, Syntax};
use crate::error::SetupFailure;

/// Directive resolution engine
///
/// Cheap to clone and safe to share across threads: the registry and the
/// source are behind `Arc` and resolution keeps no state between calls.
#[derive(Clone)]
pub struct Resolver {
    registry: Arc<DirectiveRegistry>,
    source: Arc<dyn DirectiveSource>,
    syntax: Syntax,
    enabled: bool,
}

impl Resolver {
    pub fn new(registry: Arc<DirectiveRegistry>, source: Arc<dyn DirectiveSource>) -> Self {
        Self {
            registry,
            source,
            syntax: Syntax::default(),
            enabled: true,
        }
    }

    pub fn with_syntax(mut self, syntax: Syntax) -> Self {
        self.syntax = syntax;
        self
    }

    /// A disabled resolver returns an empty result without reading the source
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn registry(&self) -> &DirectiveRegistry {
        &self.registry
    }

    pub fn syntax(&self) -> &Syntax {
        &self.syntax
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn resolve(&self, target: &ClassTarget) -> Result<ResolutionResult, SetupFailure> {
        if !self.enabled {
            tracing::debug!(class = target.name(), "directive resolution disabled");
            return Ok(ResolutionResult::default());
        }

        let span = tracing::debug_span!("resolve", class = target.name());
        let _guard = span.enter();
        tracing::debug!(
            properties = target.properties().len(),
            methods = target.methods().len(),
            "resolving directives"
        );

        let walker = ScopeWalker::new(&self.registry);

        let mut injected = ScopeAttributes::new();
        for property in target.properties() {
            let outcome = self.walk_scope(
                &walker,
                target,
                ScopeKind::Property,
                property,
                ScopeAttributes::new(),
            )?;
            injected.merge_all(outcome.attributes);
        }

        let class = self.walk_scope(&walker, target, ScopeKind::Class, target.name(), injected)?;
        if class.protected {
            tracing::debug!("class excluded, skipping methods");
            return Ok(ResolutionResult::excluded());
        }

        let mut result = ResolutionResult::default();
        if !class.attributes.is_empty() {
            result
                .attributes
                .insert(CLASS_MEMBER.to_string(), class.attributes);
        }

        for method in target.methods() {
            let outcome = self.walk_scope(
                &walker,
                target,
                ScopeKind::Method,
                method,
                ScopeAttributes::new(),
            )?;
            if outcome.protected {
                result.protected.insert(method.clone());
            } else if !outcome.attributes.is_empty() {
                result.attributes.insert(method.clone(), outcome.attributes);
            }
        }

        tracing::debug!(
            members = result.attributes.len(),
            protected = result.protected.len(),
            "resolved directives"
        );
        Ok(result)
    }

    /// Resolve without building a `ClassTarget` first
    pub fn resolve_members(
        &self,
        class: &str,
        methods: &[&str],
        properties: &[&str],
    ) -> Result<ResolutionResult, SetupFailure> {
        let target = ClassTarget::new(class)
            .with_methods(methods.iter().copied())
            .with_properties(properties.iter().copied());
        self.resolve(&target)
    }

    /// Fingerprint of everything `resolve` reads for `target`
    pub fn fingerprint(&self, target: &ClassTarget) -> Result<Fingerprint, SetupFailure> {
        declaration_fingerprint(self.source.as_ref(), &self.syntax, target)
    }

    fn walk_scope(
        &self,
        walker: &ScopeWalker<'_>,
        target: &ClassTarget,
        scope: ScopeKind,
        member: &str,
        carried: ScopeAttributes,
    ) -> Result<ScopeOutcome, SetupFailure> {
        let lookup = if scope.is_class() { None } else { Some(member) };
        let directives = self
            .source
            .raw_directives(target, scope, lookup)
            .map_err(|e| SetupFailure::from_source(target.name(), scope, member, e))?;

        let ctx = ScopeContext {
            kind: scope,
            member,
            target,
            syntax: &self.syntax,
            source: self.source.as_ref(),
            declared_in: None,
        };
        walker
            .walk(&ctx, &directives, carried)
            .map_err(|e| SetupFailure::from_directive(target.name(), scope, member, e))
    }
}

impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("registry", &self.registry)
            .field("syntax", &self.syntax)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}
