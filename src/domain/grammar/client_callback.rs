//! `callback` - client-side object notified of the call's lifecycle

use once_cell::sync::Lazy;
use regex::Regex;

use super::{tokens, unexpected, DirectiveGrammar, ParsedFragment, ParsedValue, ScopeContext};
use crate::domain::entities::AttributeValue;
use crate::error::{GrammarError, ValidationError};

/// Dotted script identifier: `app.callbacks.onSave`
static SCRIPT_PATH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*(?:\.[A-Za-z_$][A-Za-z0-9_$]*)*$")
        .expect("script path pattern is valid")
});

#[derive(Debug, Clone, Copy, Default)]
pub struct ClientCallbackGrammar;

impl DirectiveGrammar for ClientCallbackGrammar {
    fn parse(&self, arguments: &str, _ctx: &ScopeContext<'_>) -> Result<ParsedFragment, GrammarError> {
        match tokens(arguments).as_slice() {
            [name] => Ok(ParsedFragment::Name(name.to_string())),
            other => Err(GrammarError::new(format!(
                "expected exactly one callback object, found {} tokens",
                other.len()
            ))),
        }
    }

    fn validate(
        &self,
        fragment: ParsedFragment,
        _ctx: &ScopeContext<'_>,
    ) -> Result<ParsedValue, ValidationError> {
        match fragment {
            ParsedFragment::Name(name) if SCRIPT_PATH.is_match(&name) => {
                Ok(ParsedValue::Attribute(AttributeValue::List(vec![name])))
            }
            ParsedFragment::Name(name) => Err(ValidationError::new(format!(
                "invalid callback object name '{}'",
                name
            ))),
            other => Err(unexpected(&other)),
        }
    }
}
