//! Domain Services
//!
//! Pure resolution logic over domain entities. Services never touch the file
//! system; all declaration access goes through the `DirectiveSource` port.

mod fingerprint;
mod resolver;
mod scope_walker;

pub use fingerprint::declaration_fingerprint;
pub use resolver::Resolver;
pub use scope_walker::{ScopeOutcome, ScopeWalker};
