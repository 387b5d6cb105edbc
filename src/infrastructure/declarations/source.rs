//! Declaration-backed directive source
//!
//! Implements the `DirectiveSource` port over a set of `ClassDeclaration`s.
//!
//! Inheritance follows the `parent` chain, root class first:
//! - Ancestors contribute only kinds the inheritance rules mark as inherited
//! - A repeatable kind accumulates across the chain
//! - A single-occurrence kind declared on a subclass shadows the ancestor's
//! - A parent that is not declared ends the chain
//!
//! Every raw directive names the class that declared it. Relative type names
//! resolve against that class's imports, then its namespace. Resolved names are rooted (`\App\Mailer`) so resolving
//! twice is a no-op.

use std::collections::HashSet;
use std::path::Path;

use indexmap::{IndexMap, IndexSet};

use super::declaration::ClassDeclaration;
use super::manifest::parse_manifest;
use crate::domain::entities::{ClassTarget, RawDirective};
use crate::domain::ports::{DirectiveSource, SourceError};
use crate::domain::registry::{DirectiveRegistry, InheritanceRules};
use crate::domain::value_objects::ScopeKind;
use crate::error::{DocketError, DocketResult};

const DEFAULT_SEPARATOR: &str = "\\";

#[derive(Debug, Clone)]
pub struct DeclarationSource {
    classes: IndexMap<String, ClassDeclaration>,
    inheritance: InheritanceRules,
    separator: String,
}

impl Default for DeclarationSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DeclarationSource {
    /// Empty source using the built-in inheritance rules
    pub fn new() -> Self {
        Self {
            classes: IndexMap::new(),
            inheritance: DirectiveRegistry::builtin().inheritance_rules(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }

    /// Add a class; a previous declaration with the same name is replaced
    pub fn with_class(mut self, class: ClassDeclaration) -> Self {
        self.classes.insert(class.name().to_string(), class);
        self
    }

    pub fn with_inheritance(mut self, rules: InheritanceRules) -> Self {
        self.inheritance = rules;
        self
    }

    pub fn with_namespace_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Parse a TOML manifest; `file` is only used in error messages
    pub fn from_toml_str(content: &str, file: &Path) -> DocketResult<Self> {
        let mut source = Self::new();
        for class in parse_manifest(content, file)? {
            source = source.with_class(class);
        }
        Ok(source)
    }

    pub fn load(path: &Path) -> DocketResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DocketError::InvalidManifest {
                    file: path.to_path_buf(),
                    message: "file not found".to_string(),
                }
            } else {
                DocketError::Io(e)
            }
        })?;
        let source = Self::from_toml_str(&content, path)?;
        tracing::debug!(
            file = %path.display(),
            classes = source.len(),
            "loaded declaration manifest"
        );
        Ok(source)
    }

    pub fn class(&self, name: &str) -> Option<&ClassDeclaration> {
        self.classes.get(name)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// `ClassTarget` listing every method and property declared on `class`
    /// or its ancestors, ancestors first
    pub fn target(&self, class: &str) -> Option<ClassTarget> {
        let chain = self.chain(class).ok()?;
        let mut methods: IndexSet<&str> = IndexSet::new();
        let mut properties: IndexSet<&str> = IndexSet::new();
        for decl in &chain {
            methods.extend(decl.methods());
            properties.extend(decl.properties());
        }
        Some(
            ClassTarget::new(class)
                .with_methods(methods)
                .with_properties(properties),
        )
    }

    /// Declarations from the root ancestor down to `class`
    fn chain(&self, class: &str) -> Result<Vec<&ClassDeclaration>, SourceError> {
        let mut current = self.classes.get(class).ok_or_else(|| SourceError::UnknownClass {
            class: class.to_string(),
        })?;
        let mut visited = HashSet::new();
        let mut chain = Vec::new();

        loop {
            if !visited.insert(current.name()) {
                return Err(SourceError::CyclicInheritance {
                    class: current.name().to_string(),
                });
            }
            chain.push(current);
            let Some(parent) = current.parent() else {
                break;
            };
            match self.classes.get(parent) {
                Some(next) => current = next,
                None => {
                    tracing::debug!(class, parent, "parent not declared, ending inheritance chain");
                    break;
                }
            }
        }

        chain.reverse();
        Ok(chain)
    }

    /// Rooted full name of `name` as written inside `decl`
    fn qualify(&self, decl: &ClassDeclaration, name: &str) -> String {
        let sep = self.separator.as_str();
        if name.starts_with(sep) {
            return name.to_string();
        }

        let (head, rest) = match name.find(sep) {
            Some(index) => name.split_at(index),
            None => (name, ""),
        };
        let full = match decl.imports().get(head) {
            Some(imported) => format!("{}{}", imported, rest),
            None => match self.namespace_of(decl) {
                Some(namespace) if !namespace.is_empty() => {
                    format!("{}{}{}", namespace, sep, name)
                }
                _ => name.to_string(),
            },
        };
        format!("{}{}", sep, full.trim_start_matches(sep))
    }

    fn namespace_of<'d>(&self, decl: &'d ClassDeclaration) -> Option<&'d str> {
        decl.namespace().or_else(|| {
            decl.name()
                .rfind(self.separator.as_str())
                .map(|index| &decl.name()[..index])
        })
    }
}

impl DirectiveSource for DeclarationSource {
    fn raw_directives(
        &self,
        target: &ClassTarget,
        scope: ScopeKind,
        member: Option<&str>,
    ) -> Result<Vec<RawDirective>, SourceError> {
        let chain = self.chain(target.name())?;
        let own = chain.len() - 1;
        let mut directives: Vec<RawDirective> = Vec::new();

        for (depth, decl) in chain.into_iter().enumerate() {
            let level: Vec<RawDirective> = decl
                .directives_for(scope, member)
                .iter()
                .filter(|entry| depth == own || self.inheritance.is_inherited(&entry.name))
                .map(|entry| {
                    RawDirective::new(entry.name.as_str(), entry.arguments.as_str(), scope)
                        .with_declared_in(decl.name())
                })
                .collect();

            for shadowing in level.iter().filter(|d| self.inheritance.is_single(&d.name)) {
                directives.retain(|d| d.name != shadowing.name);
            }
            directives.extend(level);
        }

        Ok(directives)
    }

    fn declared_type(&self, target: &ClassTarget, property: &str) -> Option<String> {
        let chain = self.chain(target.name()).ok()?;
        chain.iter().rev().find_map(|decl| {
            decl.property(property)
                .and_then(|p| p.declared_type.as_deref())
                .map(|ty| self.qualify(decl, ty))
        })
    }

    fn resolve_type(&self, target: &ClassTarget, declared_in: Option<&str>, name: &str) -> String {
        match self.classes.get(declared_in.unwrap_or(target.name())) {
            Some(decl) => self.qualify(decl, name),
            None => name.to_string(),
        }
    }
}
