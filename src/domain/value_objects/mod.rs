//! Domain Value Objects
//!
//! Immutable value types shared by the grammars, the walker and the ports.

mod fingerprint;
mod scope;
mod syntax;

pub use fingerprint::{Fingerprint, FingerprintBuilder};
pub use scope::ScopeKind;
pub use syntax::Syntax;
