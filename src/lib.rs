//! Docket - directive resolution engine
//!
//! Docket reads declarative directives attached to a class, its methods and
//! its properties (`@databag`, `@upload`, `@before`, `@after`, `@di`,
//! `@callback`, `@exclude`) and resolves them into the attribute map a
//! request dispatcher consumes: per-member attributes, the list of
//! protected methods, and whether the whole class is excluded.
//!
//! ```no_run
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! use docket::Config;
//!
//! # fn main() -> docket::DocketResult<()> {
//! let config = Config::load_or_default(None);
//! let source = config.source(Path::new("docket.toml"))?;
//! let target = source.target("App\\Ajax\\Annotated").expect("declared class");
//! let resolver = config.resolver(Arc::new(source))?;
//! let result = resolver.resolve(&target)?;
//! println!("{}", result.to_json_pretty().unwrap_or_default());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use config::{Config, ConfigWarning};
pub use domain::entities::{
    AttributeValue, ClassTarget, DirectiveDescriptor, RawDirective, ResolutionResult,
    ScopeAttributes, CLASS_MEMBER,
};
pub use domain::grammar::{DirectiveGrammar, ParsedFragment, ParsedValue, ScopeContext};
pub use domain::ports::{DirectiveSource, SourceError};
pub use domain::registry::{BuiltinKind, DirectiveRegistry, DirectiveRegistryBuilder};
pub use domain::services::Resolver;
pub use domain::value_objects::{Fingerprint, ScopeKind, Syntax};
pub use error::{
    DirectiveError, DocketError, DocketResult, FailureKind, GrammarError, SetupFailure,
    ValidationError,
};
pub use infrastructure::{ClassDeclaration, DeclarationSource};
