//! Class target entity
//!
//! Identifies the class under resolution together with the members the
//! caller wants examined. Member discovery is the caller's job.

/// A class and the ordered members to resolve
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassTarget {
    name: String,
    methods: Vec<String>,
    properties: Vec<String>,
}

impl ClassTarget {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
            properties: Vec::new(),
        }
    }

    pub fn with_methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.methods = methods.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_properties<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.properties = properties.into_iter().map(Into::into).collect();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn methods(&self) -> &[String] {
        &self.methods
    }

    pub fn properties(&self) -> &[String] {
        &self.properties
    }
}
