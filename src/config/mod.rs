//! Configuration module for Docket
//!
//! Configuration hierarchy:
//! 1. Environment variables (DOCKET_*, highest priority)
//! 2. Project config (.docket/config.toml)
//! 3. User config (<config dir>/docket/config.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::ConfigWarning;
pub use types::{Config, DirectivesConfig, ResolverSection, SyntaxConfig};
