//! Domain Entities
//!
//! - `ClassTarget` - The class under resolution and its members
//! - `RawDirective` / `DirectiveDescriptor` - Directive occurrences and kind metadata
//! - `AttributeValue` / `ScopeAttributes` - Folded directive values per scope
//! - `ResolutionResult` - The three-part outcome of resolving a class

mod attributes;
mod class_target;
mod directive;
mod resolution;

pub use attributes::{AttributeValue, ScopeAttributes};
pub use class_target::ClassTarget;
pub use directive::{DirectiveDescriptor, RawDirective};
pub use resolution::{ResolutionResult, CLASS_MEMBER};
