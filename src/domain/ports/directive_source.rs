//! DirectiveSource port - abstraction over directive extraction
//!
//! The resolver never reads declarations itself. A source yields the raw
//! `(name, arguments)` pairs of a scope in declaration order and answers
//! type questions about properties.

use thiserror::Error;

use crate::domain::entities::{ClassTarget, RawDirective};
use crate::domain::value_objects::ScopeKind;

/// Directive source errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The source has no declarations for the class
    #[error("unknown class '{class}'")]
    UnknownClass { class: String },

    /// The class's parent chain loops back on itself
    #[error("cyclic inheritance through '{class}'")]
    CyclicInheritance { class: String },

    /// The source could not be read
    #[error("directive source unavailable: {message}")]
    Unavailable { message: String },
}

/// Abstract provider of raw directives
///
/// Implementations must be shareable across threads: one resolver may be
/// used concurrently.
pub trait DirectiveSource: Send + Sync {
    /// Raw directives of one scope, in declaration order.
    ///
    /// `member` is `None` for the class scope and the member name otherwise.
    fn raw_directives(
        &self,
        target: &ClassTarget,
        scope: ScopeKind,
        member: Option<&str>,
    ) -> Result<Vec<RawDirective>, SourceError>;

    /// Declared type of a property, if the declaration carries one
    fn declared_type(&self, target: &ClassTarget, property: &str) -> Option<String>;

    /// Expand a type name written in a directive to its full name.
    ///
    /// `declared_in` is the class whose declaration carries the directive
    /// (`RawDirective::declared_in`); relative names are read in its
    /// context. The default leaves names untouched.
    fn resolve_type(&self, _target: &ClassTarget, _declared_in: Option<&str>, name: &str) -> String {
        name.to_string()
    }
}
