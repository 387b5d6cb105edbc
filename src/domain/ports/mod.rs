//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod directive_source;

pub use directive_source::{DirectiveSource, SourceError};
