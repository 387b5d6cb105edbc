//! `exclude` - hide a class or method from the dispatcher

use super::{unexpected, DirectiveGrammar, ParsedFragment, ParsedValue, ScopeContext};
use crate::error::{GrammarError, ValidationError};

/// Empty text or `true` protects the scope; `false` lifts an earlier exclusion
#[derive(Debug, Clone, Copy, Default)]
pub struct ExcludeGrammar;

impl DirectiveGrammar for ExcludeGrammar {
    fn parse(&self, arguments: &str, _ctx: &ScopeContext<'_>) -> Result<ParsedFragment, GrammarError> {
        match arguments.trim() {
            "" | "true" => Ok(ParsedFragment::Flag(true)),
            "false" => Ok(ParsedFragment::Flag(false)),
            other => Err(GrammarError::new(format!(
                "expected true, false or no value, found '{}'",
                other
            ))),
        }
    }

    fn validate(
        &self,
        fragment: ParsedFragment,
        _ctx: &ScopeContext<'_>,
    ) -> Result<ParsedValue, ValidationError> {
        match fragment {
            ParsedFragment::Flag(flag) => Ok(ParsedValue::Exclude(flag)),
            other => Err(unexpected(&other)),
        }
    }
}
