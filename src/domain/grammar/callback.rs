//! `before` / `after` - server-side calls around the dispatched method
//!
//! `callName [$param ...]`. Parameters are references to request
//! parameters and are stored without their sigil.

use super::{tokens, unexpected, DirectiveGrammar, ParsedFragment, ParsedValue, ScopeContext};
use crate::domain::entities::AttributeValue;
use crate::error::{GrammarError, ValidationError};

#[derive(Debug, Clone, Copy, Default)]
pub struct CallbackGrammar;

impl DirectiveGrammar for CallbackGrammar {
    fn parse(&self, arguments: &str, _ctx: &ScopeContext<'_>) -> Result<ParsedFragment, GrammarError> {
        let mut parts = tokens(arguments).into_iter();
        let name = parts
            .next()
            .ok_or_else(|| GrammarError::new("no call given in callback directive"))?;
        Ok(ParsedFragment::Call {
            name: name.to_string(),
            params: parts.map(str::to_string).collect(),
        })
    }

    fn validate(
        &self,
        fragment: ParsedFragment,
        ctx: &ScopeContext<'_>,
    ) -> Result<ParsedValue, ValidationError> {
        let (name, params) = match fragment {
            ParsedFragment::Call { name, params } => (name, params),
            other => return Err(unexpected(&other)),
        };
        if !ctx.syntax.is_identifier(&name) {
            return Err(ValidationError::new(format!("invalid call name '{}'", name)));
        }

        let params = params
            .iter()
            .map(|param| {
                ctx.syntax
                    .strip_parameter(param)
                    .filter(|name| ctx.syntax.is_identifier(name))
                    .map(str::to_string)
                    .ok_or_else(|| {
                        ValidationError::new(format!(
                            "unknown parameter reference '{}' in callback directive",
                            param
                        ))
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ParsedValue::Attribute(AttributeValue::call(name, params)))
    }
}
