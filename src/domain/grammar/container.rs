//! `di` - inject a container service into an attribute
//!
//! Accepted forms:
//!
//! | Scope          | Text            | Key        | Type                        |
//! |----------------|-----------------|------------|-----------------------------|
//! | property       | (empty)         | property   | declared type of property   |
//! | property       | `Type`          | property   | `Type`                      |
//! | class / method | `$attr`         | `attr`     | declared type of `attr`     |
//! | class / method | `$attr Type`    | `attr`     | `Type`                      |
//!
//! Types go through the source's type resolver and are stored without a
//! leading namespace separator.

use super::{tokens, unexpected, DirectiveGrammar, ParsedFragment, ParsedValue, ScopeContext};
use crate::domain::entities::AttributeValue;
use crate::error::{GrammarError, ValidationError};

#[derive(Debug, Clone, Copy, Default)]
pub struct ContainerGrammar;

impl DirectiveGrammar for ContainerGrammar {
    fn parse(&self, arguments: &str, ctx: &ScopeContext<'_>) -> Result<ParsedFragment, GrammarError> {
        let parts = tokens(arguments);
        let owned = |s: &&str| s.to_string();
        match (ctx.kind.is_property(), parts.as_slice()) {
            (_, [_, _, _, ..]) => Err(GrammarError::new(format!(
                "expected at most an attribute and a type, found {} tokens",
                parts.len()
            ))),
            (true, []) => Ok(ParsedFragment::Injection {
                attr: None,
                class: None,
            }),
            (true, [class]) => Ok(ParsedFragment::Injection {
                attr: None,
                class: Some(owned(class)),
            }),
            (false, []) => Err(GrammarError::new("expected an attribute reference")),
            (false, [attr]) => Ok(ParsedFragment::Injection {
                attr: Some(owned(attr)),
                class: None,
            }),
            (_, [attr, class]) => Ok(ParsedFragment::Injection {
                attr: Some(owned(attr)),
                class: Some(owned(class)),
            }),
        }
    }

    fn validate(
        &self,
        fragment: ParsedFragment,
        ctx: &ScopeContext<'_>,
    ) -> Result<ParsedValue, ValidationError> {
        let (attr, class) = match fragment {
            ParsedFragment::Injection { attr, class } => (attr, class),
            other => return Err(unexpected(&other)),
        };

        let key = if ctx.kind.is_property() {
            if attr.is_some() {
                return Err(ValidationError::new(
                    "only one property allowed on a property-scope di directive",
                ));
            }
            ctx.member.to_string()
        } else {
            let attr = attr.unwrap_or_default();
            ctx.syntax
                .strip_attribute(&attr)
                .map(str::to_string)
                .ok_or_else(|| {
                    ValidationError::new(format!(
                        "expected an attribute reference, found '{}'",
                        attr
                    ))
                })?
        };
        if !ctx.syntax.is_identifier(&key) {
            return Err(ValidationError::new(format!(
                "invalid attribute name '{}'",
                key
            )));
        }

        let declared = match class {
            Some(class) if ctx.syntax.is_attribute_reference(&class) => {
                return Err(ValidationError::new(format!(
                    "expected a class/type, found attribute reference '{}'",
                    class
                )));
            }
            Some(class) => class,
            None => ctx
                .declared_type(&key)
                .ok_or_else(|| ValidationError::new("di directive missing class/type"))?,
        };

        let resolved = ctx.resolve_type(&declared);
        if !ctx.syntax.is_qualified_name(&resolved) {
            return Err(ValidationError::new(format!(
                "invalid class/type name '{}'",
                resolved
            )));
        }

        Ok(ParsedValue::Attribute(AttributeValue::injection(
            key,
            ctx.syntax.trim_root(&resolved),
        )))
    }
}
