//! Scope walker
//!
//! Folds the raw directives of one scope into a `ScopeAttributes` map:
//! - Unknown directive names are skipped
//! - A kind must allow the scope and, unless repeatable, appear once
//! - Values merge under the kind's output key in declaration order
//! - `exclude` only moves the protection flag (last occurrence wins)
//! - Type names are read in the context of the class that declared them

use std::collections::HashSet;

use crate::domain::entities::{RawDirective, ScopeAttributes};
use crate::domain::grammar::{ParsedValue, ScopeContext};
use crate::domain::registry::DirectiveRegistry;
use crate::error::{DirectiveError, ValidationError};

/// Folded directives of one scope
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeOutcome {
    pub attributes: ScopeAttributes,
    pub protected: bool,
}

pub struct ScopeWalker<'r> {
    registry: &'r DirectiveRegistry,
}

impl<'r> ScopeWalker<'r> {
    pub fn new(registry: &'r DirectiveRegistry) -> Self {
        Self { registry }
    }

    /// Fold `directives` on top of `carried`
    pub fn walk(
        &self,
        ctx: &ScopeContext<'_>,
        directives: &[RawDirective],
        carried: ScopeAttributes,
    ) -> Result<ScopeOutcome, DirectiveError> {
        let mut outcome = ScopeOutcome {
            attributes: carried,
            protected: false,
        };
        let mut seen: HashSet<&str> = HashSet::new();

        for raw in directives {
            let Some(entry) = self.registry.get(&raw.name) else {
                tracing::debug!(
                    directive = %raw.name,
                    scope = %ctx.kind,
                    member = ctx.member,
                    "ignoring unregistered directive"
                );
                continue;
            };
            let descriptor = entry.descriptor();

            if !descriptor.allows(ctx.kind) {
                return Err(DirectiveError::validation(
                    &raw.name,
                    ValidationError::new(format!(
                        "the {} directive is not allowed on a {} scope",
                        raw.name, ctx.kind
                    )),
                ));
            }
            if !seen.insert(descriptor.name()) && !descriptor.is_multiple() {
                return Err(DirectiveError::validation(
                    &raw.name,
                    ValidationError::new(format!(
                        "multiple {} directives on one {}",
                        raw.name, ctx.kind
                    )),
                ));
            }

            tracing::trace!(
                directive = %raw.name,
                arguments = %raw.arguments,
                scope = %ctx.kind,
                member = ctx.member,
                "folding directive"
            );

            let ctx = ctx.with_declared_in(raw.declared_in.as_deref());
            let grammar = entry.grammar();
            let fragment = grammar
                .parse(&raw.arguments, &ctx)
                .map_err(|e| DirectiveError::grammar(&raw.name, e))?;
            match grammar
                .validate(fragment, &ctx)
                .map_err(|e| DirectiveError::validation(&raw.name, e))?
            {
                ParsedValue::Exclude(flag) => outcome.protected = flag,
                ParsedValue::Attribute(value) => {
                    outcome.attributes.merge(descriptor.output_key(), value)
                }
            }
        }

        Ok(outcome)
    }
}
