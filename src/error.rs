//! Error types for Docket
//!
//! Uses `thiserror` for library errors. Directive-level failures
//! (`GrammarError`, `ValidationError`) never leave the engine on their own:
//! the resolver folds them into a `SetupFailure` for the class being resolved.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::SourceError;
use crate::domain::value_objects::ScopeKind;

/// Result type alias for Docket operations
pub type DocketResult<T> = Result<T, DocketError>;

/// Main error type for the ambient surfaces (configuration, manifests)
#[derive(Error, Debug)]
pub enum DocketError {
    /// Directive resolution failed for a class
    #[error(transparent)]
    Setup(#[from] SetupFailure),

    /// Declaration manifest could not be parsed
    #[error("invalid declaration manifest {file}: {message}")]
    InvalidManifest { file: PathBuf, message: String },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// A `[syntax]` setting cannot be used to build the directive grammars
    #[error("invalid syntax setting '{key}': {message}")]
    InvalidSyntax { key: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Argument text does not have the token shape a directive expects.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct GrammarError {
    pub message: String,
}

impl GrammarError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Argument text parsed, but its value is not acceptable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A grammar or validation failure tied to the directive that raised it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectiveError {
    #[error("@{directive}: {source}")]
    Grammar {
        directive: String,
        #[source]
        source: GrammarError,
    },

    #[error("@{directive}: {source}")]
    Validation {
        directive: String,
        #[source]
        source: ValidationError,
    },
}

impl DirectiveError {
    pub fn grammar(directive: &str, source: GrammarError) -> Self {
        Self::Grammar {
            directive: directive.to_string(),
            source,
        }
    }

    pub fn validation(directive: &str, source: ValidationError) -> Self {
        Self::Validation {
            directive: directive.to_string(),
            source,
        }
    }

    pub fn directive(&self) -> &str {
        match self {
            Self::Grammar { directive, .. } | Self::Validation { directive, .. } => directive,
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Grammar { .. } => FailureKind::Grammar,
            Self::Validation { .. } => FailureKind::Validation,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Grammar { source, .. } => &source.message,
            Self::Validation { source, .. } => &source.message,
        }
    }
}

/// What kind of failure aborted a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Grammar,
    Validation,
    Source,
}

/// The only error `Resolver::resolve` returns.
///
/// The message names the class, the scope and member, and the directive rule
/// that was violated, so hosts can surface it verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot set up {class} ({location}): {reason}")]
pub struct SetupFailure {
    pub class: String,
    pub scope: ScopeKind,
    pub member: String,
    pub directive: Option<String>,
    pub kind: FailureKind,
    pub reason: String,
    location: String,
}

impl SetupFailure {
    pub fn from_directive(class: &str, scope: ScopeKind, member: &str, error: DirectiveError) -> Self {
        Self {
            class: class.to_string(),
            scope,
            member: member.to_string(),
            directive: Some(error.directive().to_string()),
            kind: error.kind(),
            reason: error.to_string(),
            location: location(scope, member),
        }
    }

    pub fn from_source(class: &str, scope: ScopeKind, member: &str, error: SourceError) -> Self {
        Self {
            class: class.to_string(),
            scope,
            member: member.to_string(),
            directive: None,
            kind: FailureKind::Source,
            reason: error.to_string(),
            location: location(scope, member),
        }
    }
}

fn location(scope: ScopeKind, member: &str) -> String {
    match scope {
        ScopeKind::Class => "class".to_string(),
        _ => format!("{} '{}'", scope, member),
    }
}
