//! Configuration type definitions

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::ports::DirectiveSource;
use crate::domain::registry::{BuiltinKind, DirectiveRegistry};
use crate::domain::services::Resolver;
use crate::domain::value_objects::Syntax;
use crate::error::DocketResult;
use crate::infrastructure::DeclarationSource;

use super::loader::{self, ConfigWarning};

/// `[resolver]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverSection {
    /// `false` turns every resolution into an empty result
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for ResolverSection {
    fn default() -> Self {
        Self { enabled: true }
    }
}

fn default_true() -> bool {
    true
}

/// `[syntax]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxConfig {
    #[serde(default = "default_sigil")]
    pub parameter_sigil: String,

    #[serde(default = "default_sigil")]
    pub attribute_sigil: String,

    #[serde(default = "default_separator")]
    pub namespace_separator: String,
}

impl Default for SyntaxConfig {
    fn default() -> Self {
        Self {
            parameter_sigil: default_sigil(),
            attribute_sigil: default_sigil(),
            namespace_separator: default_separator(),
        }
    }
}

fn default_sigil() -> String {
    "$".to_string()
}

fn default_separator() -> String {
    "\\".to_string()
}

/// `[directives]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectivesConfig {
    /// Built-in kinds left out of the registry; their occurrences are ignored
    #[serde(default)]
    pub disabled: Vec<String>,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub resolver: ResolverSection,

    #[serde(default)]
    pub syntax: SyntaxConfig,

    #[serde(default)]
    pub directives: DirectivesConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> DocketResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> DocketResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (DOCKET_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Argument syntax described by `[syntax]`
    pub fn syntax(&self) -> DocketResult<Syntax> {
        Syntax::new(
            &self.syntax.parameter_sigil,
            &self.syntax.attribute_sigil,
            &self.syntax.namespace_separator,
        )
    }

    /// Built-in registry minus `[directives] disabled`
    pub fn registry(&self) -> DirectiveRegistry {
        let mut builder = DirectiveRegistry::builder().with_builtins();
        for name in &self.directives.disabled {
            if BuiltinKind::from_name(name).is_none() {
                tracing::warn!(directive = %name, "cannot disable unknown directive");
                continue;
            }
            builder = builder.without(name);
        }
        builder.build()
    }

    /// Load a declaration manifest that follows this configuration: its
    /// namespace separator and the inheritance rules of `registry()`
    pub fn source(&self, path: &Path) -> DocketResult<DeclarationSource> {
        let source = DeclarationSource::load(path)?;
        self.configure_source(source)
    }

    /// Same as `source`, from manifest text; `file` names it in errors
    pub fn source_from_str(&self, content: &str, file: &Path) -> DocketResult<DeclarationSource> {
        let source = DeclarationSource::from_toml_str(content, file)?;
        self.configure_source(source)
    }

    fn configure_source(&self, source: DeclarationSource) -> DocketResult<DeclarationSource> {
        let syntax = self.syntax()?;
        Ok(source
            .with_namespace_separator(syntax.namespace_separator())
            .with_inheritance(self.registry().inheritance_rules()))
    }

    /// Resolver wired with this configuration
    pub fn resolver(&self, source: Arc<dyn DirectiveSource>) -> DocketResult<Resolver> {
        Ok(Resolver::new(Arc::new(self.registry()), source)
            .with_syntax(self.syntax()?)
            .with_enabled(self.resolver.enabled))
    }
}
