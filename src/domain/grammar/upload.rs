//! `upload` - bind a method to a file upload field
//!
//! The stored value keeps its quotes (`'user-files'`): hosts paste it into
//! generated client code as a string literal.

use super::{is_field_name, tokens, unexpected, DirectiveGrammar, ParsedFragment, ParsedValue, ScopeContext};
use crate::domain::entities::AttributeValue;
use crate::error::{GrammarError, ValidationError};

#[derive(Debug, Clone, Copy, Default)]
pub struct UploadGrammar;

fn unquote(token: &str) -> Option<&str> {
    let quote = token.chars().next().filter(|c| *c == '\'' || *c == '"')?;
    if token.len() < 2 || !token.ends_with(quote) {
        return None;
    }
    Some(&token[1..token.len() - 1])
}

impl DirectiveGrammar for UploadGrammar {
    fn parse(&self, arguments: &str, _ctx: &ScopeContext<'_>) -> Result<ParsedFragment, GrammarError> {
        let parts = tokens(arguments);
        let [token] = parts.as_slice() else {
            return Err(GrammarError::new(format!(
                "expected one quoted field name, found {} tokens",
                parts.len()
            )));
        };
        let inner = unquote(token).ok_or_else(|| {
            GrammarError::new(format!("field name {} is not quoted", token))
        })?;
        Ok(ParsedFragment::Quoted {
            literal: token.to_string(),
            inner: inner.to_string(),
        })
    }

    fn validate(
        &self,
        fragment: ParsedFragment,
        _ctx: &ScopeContext<'_>,
    ) -> Result<ParsedValue, ValidationError> {
        match fragment {
            ParsedFragment::Quoted { literal, inner } => {
                if !is_field_name(&inner) {
                    return Err(ValidationError::new(format!(
                        "invalid upload field name '{}'",
                        inner
                    )));
                }
                Ok(ParsedValue::Attribute(AttributeValue::Text(literal)))
            }
            other => Err(unexpected(&other)),
        }
    }
}
