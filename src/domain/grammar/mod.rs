//! Directive grammars
//!
//! One parser and validator per directive kind. A grammar turns the raw
//! argument text of a directive into a typed value in two steps:
//!
//! 1. `parse` checks the token shape and yields a `ParsedFragment`
//!    (failure: `GrammarError`)
//! 2. `validate` checks names, references and types against the scope
//!    and yields a `ParsedValue` (failure: `ValidationError`)
//!
//! Grammars are pure. Everything they need to know about the class comes
//! through `ScopeContext`.

mod callback;
mod client_callback;
mod container;
mod databag;
mod exclude;
mod upload;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::entities::{AttributeValue, ClassTarget};
use crate::domain::ports::DirectiveSource;
use crate::domain::value_objects::{ScopeKind, Syntax};
use crate::error::{GrammarError, ValidationError};

pub use callback::CallbackGrammar;
pub use client_callback::ClientCallbackGrammar;
pub use container::ContainerGrammar;
pub use databag::DataBagGrammar;
pub use exclude::ExcludeGrammar;
pub use upload::UploadGrammar;

/// Bag and upload field names
static FIELD_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_.-]*$").expect("field name pattern is valid"));

/// Everything a grammar may consult about the scope being walked
#[derive(Clone, Copy)]
pub struct ScopeContext<'a> {
    pub kind: ScopeKind,
    /// Member name; the class name on class scopes
    pub member: &'a str,
    pub target: &'a ClassTarget,
    pub syntax: &'a Syntax,
    pub source: &'a dyn DirectiveSource,
    /// Class that declared the directive being read, when not the target
    pub declared_in: Option<&'a str>,
}

impl<'a> ScopeContext<'a> {
    /// Declared type of a property under resolution.
    ///
    /// Properties the caller did not list in the target have no type here.
    pub fn declared_type(&self, property: &str) -> Option<String> {
        if !self.target.properties().iter().any(|p| p == property) {
            return None;
        }
        self.source.declared_type(self.target, property)
    }

    pub fn resolve_type(&self, name: &str) -> String {
        self.source.resolve_type(self.target, self.declared_in, name)
    }

    /// Same scope, reading a directive declared on `class`
    pub fn with_declared_in(self, class: Option<&'a str>) -> Self {
        Self {
            declared_in: class,
            ..self
        }
    }
}

impl std::fmt::Debug for ScopeContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScopeContext")
            .field("kind", &self.kind)
            .field("member", &self.member)
            .field("target", &self.target.name())
            .field("declared_in", &self.declared_in)
            .finish_non_exhaustive()
    }
}

/// Token shape recognized by `parse`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedFragment {
    Flag(bool),
    Name(String),
    Quoted {
        literal: String,
        inner: String,
    },
    Call {
        name: String,
        params: Vec<String>,
    },
    Injection {
        attr: Option<String>,
        class: Option<String>,
    },
}

/// Validated directive value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedValue {
    /// Protection flag; never stored in the attribute map
    Exclude(bool),
    Attribute(AttributeValue),
}

/// Parser and validator of one directive kind
pub trait DirectiveGrammar: Send + Sync {
    fn parse(&self, arguments: &str, ctx: &ScopeContext<'_>) -> Result<ParsedFragment, GrammarError>;

    fn validate(
        &self,
        fragment: ParsedFragment,
        ctx: &ScopeContext<'_>,
    ) -> Result<ParsedValue, ValidationError>;
}

/// Split argument text on ASCII whitespace
pub(crate) fn tokens(arguments: &str) -> Vec<&str> {
    arguments.split_ascii_whitespace().collect()
}

pub(crate) fn is_field_name(name: &str) -> bool {
    FIELD_NAME.is_match(name)
}

pub(crate) fn unexpected(fragment: &ParsedFragment) -> ValidationError {
    ValidationError::new(format!("unexpected argument shape {:?}", fragment))
}
