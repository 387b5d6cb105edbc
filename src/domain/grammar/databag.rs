//! `databag` - name a client-side data bag sent with every call

use super::{is_field_name, tokens, unexpected, DirectiveGrammar, ParsedFragment, ParsedValue, ScopeContext};
use crate::domain::entities::AttributeValue;
use crate::error::{GrammarError, ValidationError};

#[derive(Debug, Clone, Copy, Default)]
pub struct DataBagGrammar;

impl DirectiveGrammar for DataBagGrammar {
    fn parse(&self, arguments: &str, _ctx: &ScopeContext<'_>) -> Result<ParsedFragment, GrammarError> {
        match tokens(arguments).as_slice() {
            [name] => Ok(ParsedFragment::Name(name.to_string())),
            other => Err(GrammarError::new(format!(
                "expected exactly one bag name, found {} tokens",
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
            ParsedFragment::Name(name) if is_field_name(&name) => {
                Ok(ParsedValue::Attribute(AttributeValue::List(vec![name])))
            }
            ParsedFragment::Name(name) => {
                Err(ValidationError::new(format!("invalid bag name '{}'", name)))
            }
            other => Err(unexpected(&other)),
        }
    }
}
