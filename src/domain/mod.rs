//! Domain Layer
//!
//! The resolution engine itself: pure logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (ClassTarget, ScopeAttributes, ResolutionResult)
//! - `value_objects/` - Immutable value types (ScopeKind, Syntax, Fingerprint)
//! - `grammar/` - One parser and validator per directive kind
//! - `registry` - Directive name to descriptor and grammar
//! - `services/` - Scope walker and resolver
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - Declarations are only reached through the `DirectiveSource` port
//! 2. **Stateless** - A resolver keeps nothing between calls and can be shared across threads
//! 3. **Ports & Adapters** - Sources live in the infrastructure layer

pub mod entities;
pub mod grammar;
pub mod ports;
pub mod registry;
pub mod services;
pub mod value_objects;
