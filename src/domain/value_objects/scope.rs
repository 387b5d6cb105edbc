//! Scope kind value object - the member a directive is attached to
//!
//! - `Property`: a declared property of the class
//! - `Class`: the class itself
//! - `Method`: a declared method of the class

use serde::{Deserialize, Serialize};

/// Kind of class member a directive was found on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScopeKind {
    Property,
    Class,
    Method,
}

impl ScopeKind {
    /// All scope kinds, in resolution order
    pub const ALL: [ScopeKind; 3] = [ScopeKind::Property, ScopeKind::Class, ScopeKind::Method];

    pub fn is_property(&self) -> bool {
        matches!(self, ScopeKind::Property)
    }

    pub fn is_class(&self) -> bool {
        matches!(self, ScopeKind::Class)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScopeKind::Property => "property",
            ScopeKind::Class => "class",
            ScopeKind::Method => "method",
        }
    }
}

impl std::fmt::Display for ScopeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
