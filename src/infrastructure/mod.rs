//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `declarations/` - Declaration-backed `DirectiveSource` and its TOML manifest

pub mod declarations;

// Re-export for convenience
pub use declarations::{ClassDeclaration, DeclarationSource, DirectiveEntry};
