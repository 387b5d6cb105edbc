//! Common test utilities for Docket contract and scenario tests.
//!
//! This module provides:
//! - Fixtures: a reference declaration manifest modelled on a small app
//! - Helpers to build sources and resolvers from it

#![allow(dead_code)]


pub use fixtures::*;

use std::path::Path;
use std::sync::Arc;

use docket::{ClassTarget, DeclarationSource, DirectiveRegistry, Resolver};

/// Declaration source loaded from `APP_MANIFEST`
pub fn app_source() -> DeclarationSource {
    DeclarationSource::from_toml_str(APP_MANIFEST, Path::new("app.toml"))
        .expect("fixture manifest parses")
}

/// Resolver over `APP_MANIFEST` with the built-in registry
pub fn app_resolver() -> Resolver {
    Resolver::new(Arc::new(DirectiveRegistry::builtin()), Arc::new(app_source()))
}

/// Target with explicit members, as a host dispatcher would build it
pub fn target(class: &str, methods: &[&str], properties: &[&str]) -> ClassTarget {
    ClassTarget::new(class)
        .with_methods(methods.iter().copied())
        .with_properties(properties.iter().copied())
}
