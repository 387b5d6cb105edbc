//! Directive entities
//!
//! - `RawDirective` - one `(name, argument text)` pair as yielded by a source,
//!   plus the class that declared it when a source follows inheritance
//! - `DirectiveDescriptor` - static metadata of a directive kind

use crate::domain::value_objects::ScopeKind;

/// A directive occurrence before grammar parsing
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawDirective {
    pub name: String,
    pub arguments: String,
    pub scope: ScopeKind,
    /// Class whose declaration carries the directive; `None` means the target
    pub declared_in: Option<String>,
}

impl RawDirective {
    pub fn new(name: impl Into<String>, arguments: impl Into<String>, scope: ScopeKind) -> Self {
        Self {
            name: name.into(),
            arguments: arguments.into(),
            scope,
            declared_in: None,
        }
    }

    pub fn with_declared_in(mut self, class: impl Into<String>) -> Self {
        self.declared_in = Some(class.into());
        self
    }
}

/// Static metadata of a directive kind.
///
/// `output_key` is the attribute-map key the kind's values are folded
/// under. `multiple` allows more than one occurrence on a single scope;
/// `inherited` tells sources to carry ancestor occurrences down to
/// subclasses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveDescriptor {
    name: String,
    output_key: String,
    scopes: Vec<ScopeKind>,
    multiple: bool,
    inherited: bool,
}

impl DirectiveDescriptor {
    /// New descriptor allowed on class and method scopes, repeatable, not inherited
    pub fn new(name: impl Into<String>, output_key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            output_key: output_key.into(),
            scopes: vec![ScopeKind::Class, ScopeKind::Method],
            multiple: true,
            inherited: false,
        }
    }

    pub fn with_scopes(mut self, scopes: &[ScopeKind]) -> Self {
        self.scopes = scopes.to_vec();
        self
    }

    pub fn with_multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    pub fn with_inherited(mut self, inherited: bool) -> Self {
        self.inherited = inherited;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn output_key(&self) -> &str {
        &self.output_key
    }

    pub fn scopes(&self) -> &[ScopeKind] {
        &self.scopes
    }

    pub fn allows(&self, scope: ScopeKind) -> bool {
        self.scopes.contains(&scope)
    }

    pub fn is_multiple(&self) -> bool {
        self.multiple
    }

    pub fn is_inherited(&self) -> bool {
        self.inherited
    }
}
