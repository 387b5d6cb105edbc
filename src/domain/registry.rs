//! Directive registry
//!
//! Immutable mapping from directive name to its descriptor and grammar,
//! built once and shared by every resolution. Hosts extend it through
//! `DirectiveRegistry::builder()`.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::domain::entities::DirectiveDescriptor;
use crate::domain::grammar::{
    CallbackGrammar, ClientCallbackGrammar, ContainerGrammar, DataBagGrammar, DirectiveGrammar,
    ExcludeGrammar, UploadGrammar,
};
use crate::domain::value_objects::ScopeKind;

/// Built-in directive kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinKind {
    Exclude,
    DataBag,
    Upload,
    Before,
    After,
    Container,
    ClientCallback,
}

impl BuiltinKind {
    pub const ALL: [BuiltinKind; 7] = [
        BuiltinKind::Exclude,
        BuiltinKind::DataBag,
        BuiltinKind::Upload,
        BuiltinKind::Before,
        BuiltinKind::After,
        BuiltinKind::Container,
        BuiltinKind::ClientCallback,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BuiltinKind::Exclude => "exclude",
            BuiltinKind::DataBag => "databag",
            BuiltinKind::Upload => "upload",
            BuiltinKind::Before => "before",
            BuiltinKind::After => "after",
            BuiltinKind::Container => "di",
            BuiltinKind::ClientCallback => "callback",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub fn descriptor(&self) -> DirectiveDescriptor {
        let name = self.name();
        match self {
            BuiltinKind::Exclude => DirectiveDescriptor::new(name, name).with_inherited(true),
            BuiltinKind::DataBag => DirectiveDescriptor::new(name, "bags").with_inherited(true),
            BuiltinKind::Upload => DirectiveDescriptor::new(name, "upload")
                .with_scopes(&[ScopeKind::Method])
                .with_multiple(false),
            BuiltinKind::Before => DirectiveDescriptor::new(name, "__before").with_inherited(true),
            BuiltinKind::After => DirectiveDescriptor::new(name, "__after").with_inherited(true),
            BuiltinKind::Container => DirectiveDescriptor::new(name, "__di")
                .with_scopes(&ScopeKind::ALL)
                .with_inherited(true),
            BuiltinKind::ClientCallback => {
                DirectiveDescriptor::new(name, "callback").with_inherited(true)
            }
        }
    }

    pub fn grammar(&self) -> Arc<dyn DirectiveGrammar> {
        match self {
            BuiltinKind::Exclude => Arc::new(ExcludeGrammar),
            BuiltinKind::DataBag => Arc::new(DataBagGrammar),
            BuiltinKind::Upload => Arc::new(UploadGrammar),
            BuiltinKind::Before | BuiltinKind::After => Arc::new(CallbackGrammar),
            BuiltinKind::Container => Arc::new(ContainerGrammar),
            BuiltinKind::ClientCallback => Arc::new(ClientCallbackGrammar),
        }
    }
}

/// A directive kind known to the registry
#[derive(Clone)]
pub struct RegisteredDirective {
    descriptor: DirectiveDescriptor,
    grammar: Arc<dyn DirectiveGrammar>,
}

impl RegisteredDirective {
    pub fn descriptor(&self) -> &DirectiveDescriptor {
        &self.descriptor
    }

    pub fn grammar(&self) -> &dyn DirectiveGrammar {
        self.grammar.as_ref()
    }
}

impl fmt::Debug for RegisteredDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredDirective")
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}

/// Immutable directive registry
#[derive(Debug, Clone, Default)]
pub struct DirectiveRegistry {
    entries: IndexMap<String, RegisteredDirective>,
}

impl DirectiveRegistry {
    /// Registry with every built-in kind
    pub fn builtin() -> Self {
        Self::builder().with_builtins().build()
    }

    pub fn builder() -> DirectiveRegistryBuilder {
        DirectiveRegistryBuilder::default()
    }

    pub fn get(&self, name: &str) -> Option<&RegisteredDirective> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Which kinds a source should carry down from ancestor classes
    pub fn inheritance_rules(&self) -> InheritanceRules {
        let mut rules = InheritanceRules::default();
        for entry in self.entries.values() {
            let descriptor = &entry.descriptor;
            if descriptor.is_inherited() {
                rules.inherited.insert(descriptor.name().to_string());
                if !descriptor.is_multiple() {
                    rules.single.insert(descriptor.name().to_string());
                }
            }
        }
        rules
    }
}

/// Builder for `DirectiveRegistry`
#[derive(Default)]
pub struct DirectiveRegistryBuilder {
    entries: IndexMap<String, RegisteredDirective>,
}

impl DirectiveRegistryBuilder {
    pub fn with_builtins(mut self) -> Self {
        for kind in BuiltinKind::ALL {
            self = self.register(kind.descriptor(), kind.grammar());
        }
        self
    }

    /// Register a kind; an existing kind with the same name is replaced
    pub fn register(
        mut self,
        descriptor: DirectiveDescriptor,
        grammar: Arc<dyn DirectiveGrammar>,
    ) -> Self {
        self.entries.insert(
            descriptor.name().to_string(),
            RegisteredDirective {
                descriptor,
                grammar,
            },
        );
        self
    }

    /// Drop a kind so its occurrences are ignored during resolution
    pub fn without(mut self, name: &str) -> Self {
        self.entries.shift_remove(name);
        self
    }

    pub fn build(self) -> DirectiveRegistry {
        DirectiveRegistry {
            entries: self.entries,
        }
    }
}

/// Inheritance metadata handed to directive sources
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InheritanceRules {
    inherited: HashSet<String>,
    single: HashSet<String>,
}

impl InheritanceRules {
    pub fn is_inherited(&self, name: &str) -> bool {
        self.inherited.contains(name)
    }

    /// Inherited kind that may appear at most once per scope
    pub fn is_single(&self, name: &str) -> bool {
        self.single.contains(name)
    }
}
