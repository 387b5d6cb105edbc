//! Declaration-backed directive source
//!
//! - `ClassDeclaration` - explicit description of a class's directives
//! - `DeclarationSource` - `DirectiveSource` over declarations, built in code
//!   or loaded from a TOML manifest

mod declaration;
mod manifest;
mod source;

pub use declaration::{ClassDeclaration, DirectiveEntry, PropertyDeclaration};
pub use source::DeclarationSource;
