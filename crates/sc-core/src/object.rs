//! Object names and the cross-statement dependency registry.

use std::collections::{HashMap, HashSet};
use std::fmt;

/// Default namespace for unqualified object names.
pub const DEFAULT_NAMESPACE: &str = "public";

/// A namespace-qualified object name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectName {
    namespace: String,
    name: String,
}

impl ObjectName {
    /// An object in an explicit namespace.
    pub fn qualified(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// An unqualified object; the namespace defaults to `public`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            name: name.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Deterministic "namespace.name" composition used as registry key.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.namespace, self.name)
    }
}

impl fmt::Display for ObjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.namespace, self.name)
    }
}

/// Registry of objects successfully classified as created, keyed by object
/// type (e.g. "table"). Later statements consult it to validate references
/// to earlier ones; entries are never removed during a run.
#[derive(Debug, Default)]
pub struct ObjectRegistry {
    objects: HashMap<String, HashSet<String>>,
}

impl ObjectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a created object. Idempotent.
    pub fn register(&mut self, object_type: &str, qualified_name: impl Into<String>) {
        self.objects
            .entry(object_type.to_string())
            .or_default()
            .insert(qualified_name.into());
    }

    /// Whether an object of the given type was registered earlier in the run.
    pub fn contains(&self, object_type: &str, qualified_name: &str) -> bool {
        self.objects
            .get(object_type)
            .is_some_and(|set| set.contains(qualified_name))
    }
}
