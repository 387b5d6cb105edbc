//! Directive argument syntax
//!
//! Sigils that mark parameter and attribute references, and the namespace
//! separator used in qualified type names. The defaults match the host's
//! declaration language: `$name` references and `\`-separated types.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{DocketError, DocketResult};

const DEFAULT_SIGIL: &str = "$";
const DEFAULT_SEPARATOR: &str = "\\";

static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").expect("identifier pattern is valid"));

static DEFAULT_QUALIFIED_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&qualified_name_pattern(DEFAULT_SEPARATOR)).expect("default type pattern is valid")
});

fn qualified_name_pattern(separator: &str) -> String {
    let sep = regex::escape(separator);
    format!(r"^(?:{sep})?[A-Za-z][A-Za-z0-9_]*(?:{sep}[A-Za-z][A-Za-z0-9_]*)*$")
}

/// Reference and type-name conventions for directive arguments
#[derive(Debug, Clone)]
pub struct Syntax {
    parameter_sigil: String,
    attribute_sigil: String,
    namespace_separator: String,
    qualified_name: Regex,
}

impl Default for Syntax {
    fn default() -> Self {
        Self {
            parameter_sigil: DEFAULT_SIGIL.to_string(),
            attribute_sigil: DEFAULT_SIGIL.to_string(),
            namespace_separator: DEFAULT_SEPARATOR.to_string(),
            qualified_name: DEFAULT_QUALIFIED_NAME.clone(),
        }
    }
}

impl Syntax {
    pub fn new(
        parameter_sigil: &str,
        attribute_sigil: &str,
        namespace_separator: &str,
    ) -> DocketResult<Self> {
        for (key, value) in [
            ("parameter_sigil", parameter_sigil),
            ("attribute_sigil", attribute_sigil),
            ("namespace_separator", namespace_separator),
        ] {
            if value.is_empty() || value.chars().any(|c| c.is_alphanumeric() || c.is_whitespace()) {
                return Err(DocketError::InvalidSyntax {
                    key: key.to_string(),
                    message: format!("'{}' must be non-empty punctuation", value),
                });
            }
        }

        let qualified_name =
            Regex::new(&qualified_name_pattern(namespace_separator)).map_err(|e| {
                DocketError::InvalidSyntax {
                    key: "namespace_separator".to_string(),
                    message: e.to_string(),
                }
            })?;

        Ok(Self {
            parameter_sigil: parameter_sigil.to_string(),
            attribute_sigil: attribute_sigil.to_string(),
            namespace_separator: namespace_separator.to_string(),
            qualified_name,
        })
    }

    pub fn parameter_sigil(&self) -> &str {
        &self.parameter_sigil
    }

    pub fn attribute_sigil(&self) -> &str {
        &self.attribute_sigil
    }

    pub fn namespace_separator(&self) -> &str {
        &self.namespace_separator
    }

    /// `$user` → `Some("user")`; anything without the sigil → `None`
    pub fn strip_parameter<'a>(&self, token: &'a str) -> Option<&'a str> {
        token.strip_prefix(self.parameter_sigil.as_str())
    }

    pub fn strip_attribute<'a>(&self, token: &'a str) -> Option<&'a str> {
        token.strip_prefix(self.attribute_sigil.as_str())
    }

    pub fn is_attribute_reference(&self, token: &str) -> bool {
        token.starts_with(self.attribute_sigil.as_str())
    }

    /// Plain identifier: a letter followed by letters, digits or underscores
    pub fn is_identifier(&self, name: &str) -> bool {
        IDENTIFIER.is_match(name)
    }

    /// Identifier segments joined by the namespace separator, optionally rooted
    pub fn is_qualified_name(&self, name: &str) -> bool {
        self.qualified_name.is_match(name)
    }

    /// Drop leading namespace separators: `\Foo\Bar` → `Foo\Bar`
    pub fn trim_root<'a>(&self, name: &'a str) -> &'a str {
        name.trim_start_matches(self.namespace_separator.as_str())
    }
}
