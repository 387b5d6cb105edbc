//! Attribute values and per-scope attribute maps
//!
//! Every directive kind folds its values into one of four shapes. The shape
//! decides how a later occurrence combines with an earlier one:
//!
//! | Shape        | Used by                | Later occurrence            |
//! |--------------|------------------------|-----------------------------|
//! | `Text`       | `upload`               | replaces                    |
//! | `List`       | `databag`, `callback`  | appends (duplicates kept)   |
//! | `Calls`      | `before`, `after`      | same call replaces params   |
//! | `Injections` | `di`                   | same attribute replaces type|

use indexmap::IndexMap;
use serde::Serialize;

/// A resolved attribute value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Text(String),
    List(Vec<String>),
    Calls(IndexMap<String, Vec<String>>),
    Injections(IndexMap<String, String>),
}

impl AttributeValue {
    pub fn call(name: impl Into<String>, params: Vec<String>) -> Self {
        let mut calls = IndexMap::new();
        calls.insert(name.into(), params);
        Self::Calls(calls)
    }

    pub fn injection(attr: impl Into<String>, class: impl Into<String>) -> Self {
        let mut injections = IndexMap::new();
        injections.insert(attr.into(), class.into());
        Self::Injections(injections)
    }

    /// Fold `next` into `self`.
    ///
    /// Keyed shapes keep the position of the first occurrence of a key and
    /// take the value of the last. Mismatched shapes replace.
    pub fn merge(self, next: AttributeValue) -> AttributeValue {
        match (self, next) {
            (Self::List(mut items), Self::List(more)) => {
                items.extend(more);
                Self::List(items)
            }
            (Self::Calls(mut calls), Self::Calls(more)) => {
                calls.extend(more);
                Self::Calls(calls)
            }
            (Self::Injections(mut injections), Self::Injections(more)) => {
                injections.extend(more);
                Self::Injections(injections)
            }
            (_, next) => next,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_calls(&self) -> Option<&IndexMap<String, Vec<String>>> {
        match self {
            Self::Calls(calls) => Some(calls),
            _ => None,
        }
    }

    pub fn as_injections(&self) -> Option<&IndexMap<String, String>> {
        match self {
            Self::Injections(injections) => Some(injections),
            _ => None,
        }
    }
}

/// Attribute map of one scope, keyed by directive output key in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScopeAttributes(IndexMap<String, AttributeValue>);

impl ScopeAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a value under `key` using the value's merge rule
    pub fn merge(&mut self, key: &str, value: AttributeValue) {
        match self.0.get_mut(key) {
            Some(existing) => {
                let previous = std::mem::replace(existing, AttributeValue::List(Vec::new()));
                *existing = previous.merge(value);
            }
            None => {
                self.0.insert(key.to_string(), value);
            }
        }
    }

    /// Fold every entry of `other` into this map, in `other`'s order
    pub fn merge_all(&mut self, other: ScopeAttributes) {
        for (key, value) in other.0 {
            self.merge(&key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(AttributeValue::as_text)
    }

    pub fn list(&self, key: &str) -> Option<&[String]> {
        self.get(key).and_then(AttributeValue::as_list)
    }

    pub fn calls(&self, key: &str) -> Option<&IndexMap<String, Vec<String>>> {
        self.get(key).and_then(AttributeValue::as_calls)
    }

    pub fn injections(&self, key: &str) -> Option<&IndexMap<String, String>> {
        self.get(key).and_then(AttributeValue::as_injections)
    }
}

impl FromIterator<(String, AttributeValue)> for ScopeAttributes {
    fn from_iter<T: IntoIterator<Item = (String, AttributeValue)>>(iter: T) -> Self {
        let mut attributes = ScopeAttributes::new();
        for (key, value) in iter {
            attributes.merge(&key, value);
        }
        attributes
    }
}
