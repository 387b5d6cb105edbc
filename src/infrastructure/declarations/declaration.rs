//! Explicit class declarations
//!
//! The in-process description of a class that `DeclarationSource` serves
//! directives from: its parent, namespace and imports, and the directive
//! lines attached to the class, its methods and its properties.

use indexmap::IndexMap;

use crate::domain::value_objects::ScopeKind;

/// One directive line: `@databag user.name` → (`databag`, `user.name`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveEntry {
    pub name: String,
    pub arguments: String,
}

impl DirectiveEntry {
    pub fn new(name: impl Into<String>, arguments: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: arguments.into(),
        }
    }

    /// Split a directive line at the first whitespace; a leading `@` is optional.
    ///
    /// Returns `None` for a line without a name.
    pub fn parse_line(line: &str) -> Option<Self> {
        let line = line.trim();
        let line = line.strip_prefix('@').unwrap_or(line);
        let (name, arguments) = match line.split_once(|c: char| c.is_ascii_whitespace()) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };
        if name.is_empty() {
            return None;
        }
        Some(Self::new(name, arguments))
    }
}

/// A declared property: optional type plus its directives
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyDeclaration {
    pub declared_type: Option<String>,
    pub directives: Vec<DirectiveEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassDeclaration {
    name: String,
    parent: Option<String>,
    namespace: Option<String>,
    imports: IndexMap<String, String>,
    directives: Vec<DirectiveEntry>,
    methods: IndexMap<String, Vec<DirectiveEntry>>,
    properties: IndexMap<String, PropertyDeclaration>,
}

impl ClassDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Namespace relative type names resolve against.
    ///
    /// Without one, the namespace is the class name minus its last segment.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// `use Full\Name as Alias;`
    pub fn with_import(mut self, alias: impl Into<String>, full_name: impl Into<String>) -> Self {
        self.imports.insert(alias.into(), full_name.into());
        self
    }

    pub fn with_directive(mut self, name: &str, arguments: &str) -> Self {
        self.directives.push(DirectiveEntry::new(name, arguments));
        self
    }

    pub fn with_method(mut self, method: &str) -> Self {
        self.methods.entry(method.to_string()).or_default();
        self
    }

    pub fn with_method_directive(mut self, method: &str, name: &str, arguments: &str) -> Self {
        self.methods
            .entry(method.to_string())
            .or_default()
            .push(DirectiveEntry::new(name, arguments));
        self
    }

    pub fn with_property(mut self, property: &str, declared_type: Option<&str>) -> Self {
        self.properties
            .entry(property.to_string())
            .or_default()
            .declared_type = declared_type.map(str::to_string);
        self
    }

    pub fn with_property_directive(mut self, property: &str, name: &str, arguments: &str) -> Self {
        self.properties
            .entry(property.to_string())
            .or_default()
            .directives
            .push(DirectiveEntry::new(name, arguments));
        self
    }

    pub(crate) fn set_directives(&mut self, directives: Vec<DirectiveEntry>) {
        self.directives = directives;
    }

    pub(crate) fn set_method(&mut self, method: String, directives: Vec<DirectiveEntry>) {
        self.methods.insert(method, directives);
    }

    pub(crate) fn set_property(&mut self, property: String, declaration: PropertyDeclaration) {
        self.properties.insert(property, declaration);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn imports(&self) -> &IndexMap<String, String> {
        &self.imports
    }

    /// Declared method names, in declaration order
    pub fn methods(&self) -> impl Iterator<Item = &str> {
        self.methods.keys().map(String::as_str)
    }

    /// Declared property names, in declaration order
    pub fn properties(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    pub fn property(&self, name: &str) -> Option<&PropertyDeclaration> {
        self.properties.get(name)
    }

    /// Directives attached to one scope of this class (not its ancestors)
    pub fn directives_for(&self, scope: ScopeKind, member: Option<&str>) -> &[DirectiveEntry] {
        let found = match (scope, member) {
            (ScopeKind::Class, _) => Some(self.directives.as_slice()),
            (ScopeKind::Method, Some(method)) => self.methods.get(method).map(Vec::as_slice),
            (ScopeKind::Property, Some(property)) => self
                .properties
                .get(property)
                .map(|p| p.directives.as_slice()),
            (_, None) => None,
        };
        found.unwrap_or(&[])
    }
}
