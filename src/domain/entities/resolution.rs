//! Resolution result entity

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use super::attributes::ScopeAttributes;

/// Member name under which class-level attributes are stored
pub const CLASS_MEMBER: &str = "*";

/// Outcome of resolving one class.
///
/// When `excluded` is set, `attributes` and `protected` are always empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolutionResult {
    pub excluded: bool,
    pub attributes: IndexMap<String, ScopeAttributes>,
    pub protected: IndexSet<String>,
}

impl ResolutionResult {
    /// Result for a class whose class scope is excluded
    pub fn excluded() -> Self {
        Self {
            excluded: true,
            ..Self::default()
        }
    }

    /// Class-level attributes, if any were declared
    pub fn class_attributes(&self) -> Option<&ScopeAttributes> {
        self.attributes.get(CLASS_MEMBER)
    }

    pub fn member(&self, name: &str) -> Option<&ScopeAttributes> {
        self.attributes.get(name)
    }

    pub fn is_protected(&self, method: &str) -> bool {
        self.protected.contains(method)
    }

    /// Serialize as the `[excluded, attributes, protected]` shape hosts consume
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&(&self.excluded, &self.attributes, &self.protected))
    }
}
