//! Versioned compatibility-matrix configuration.
//!
//! The raw document is JSON: a top-level `configuration` object keyed by
//! engine version. Each version level may name an `inherit_from` parent and
//! any number of sections whose values are either a list of
//! unconditionally-supported feature names or an object of explicit
//! `{supported, error_message}` entries. The `extensions` and `index_types`
//! sections additionally feed the supported-extension and
//! supported-index-type sets.

use std::collections::{HashMap, HashSet};
use std::io::Read;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{ConfigError, CoreResult};
use crate::feature::Feature;

const CONFIGURATION: &str = "configuration";
const INHERIT_FROM: &str = "inherit_from";
const SUPPORTED: &str = "supported";
const ERROR_MESSAGE: &str = "error_message";
const EXTENSIONS: &str = "extensions";
const INDEX_TYPES: &str = "index_types";

/// The raw, pre-resolution configuration document.
#[derive(Debug, Clone)]
pub struct CompatConfig {
    versions: Map<String, Value>,
}

impl CompatConfig {
    /// Parse a configuration document from a JSON string.
    pub fn from_str(raw: &str) -> CoreResult<Self> {
        let value: Value = serde_json::from_str(raw)?;
        Self::from_value(value)
    }

    /// Parse a configuration document from a reader.
    pub fn from_reader(reader: impl Read) -> CoreResult<Self> {
        let value: Value = serde_json::from_reader(reader)?;
        Self::from_value(value)
    }

    /// Load a configuration document from a file path.
    pub fn load(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_str(&raw)
    }

    fn from_value(value: Value) -> CoreResult<Self> {
        let Value::Object(mut root) = value else {
            return Err(ConfigError::MissingConfigurationKey);
        };
        match root.remove(CONFIGURATION) {
            Some(Value::Object(versions)) => Ok(Self { versions }),
            _ => Err(ConfigError::MissingConfigurationKey),
        }
    }

    /// Whether `version` is a top-level key in the raw configuration.
    ///
    /// This consults the raw key set only, never the resolved map.
    pub fn is_supported_version(&self, version: &str) -> bool {
        self.versions.contains_key(version)
    }

    /// All configured version keys, in document order.
    pub fn versions(&self) -> impl Iterator<Item = &str> {
        self.versions.keys().map(String::as_str)
    }

    /// Resolve `version` into a flattened [`CompatMatrix`].
    ///
    /// Walks `inherit_from` pointers up to the root ancestor, then applies
    /// each level root-first: extension and index-type sets union, feature
    /// entries overwrite per key so a child version shadows its parents.
    pub fn resolve(&self, version: &str) -> CoreResult<CompatMatrix> {
        let path = self.loading_path(version)?;
        let mut matrix = CompatMatrix::default();
        for level in &path {
            // The path only contains keys verified during the walk.
            let Some(Value::Object(level_obj)) = self.versions.get(*level) else {
                return Err(ConfigError::UnknownVersion {
                    version: level.to_string(),
                });
            };
            matrix.merge_level(level_obj)?;
        }
        Ok(matrix)
    }

    /// Follow `inherit_from` from `version` to the root, returning the chain
    /// root-first. A revisited version is a fatal configuration error.
    fn loading_path<'a>(&'a self, version: &'a str) -> CoreResult<Vec<&'a str>> {
        let mut path: Vec<&str> = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();
        let mut pointer = version;
        loop {
            if !seen.insert(pointer) {
                let mut cycle: Vec<&str> = path.clone();
                cycle.push(pointer);
                return Err(ConfigError::InheritanceCycle {
                    cycle: cycle.join(" -> "),
                });
            }
            path.push(pointer);
            let level = self
                .versions
                .get(pointer)
                .ok_or_else(|| ConfigError::UnknownVersion {
                    version: pointer.to_string(),
                })?;
            let Value::Object(level_obj) = level else {
                return Err(ConfigError::MalformedEntry {
                    key: pointer.to_string(),
                    reason: "version level must be an object".to_string(),
                });
            };
            match level_obj.get(INHERIT_FROM) {
                Some(Value::String(parent)) => pointer = parent,
                Some(other) => {
                    return Err(ConfigError::MalformedEntry {
                        key: format!("{pointer}.{INHERIT_FROM}"),
                        reason: format!("expected a version string, found {other}"),
                    });
                }
                None => break,
            }
        }
        path.reverse();
        Ok(path)
    }
}

/// The flattened feature registry for one resolved version.
///
/// Built once per run, read-only afterward.
#[derive(Debug, Clone, Default)]
pub struct CompatMatrix {
    features: HashMap<String, Feature>,
    extensions: HashSet<String>,
    index_types: HashSet<String>,
}

impl CompatMatrix {
    /// Look up a feature key; unknown keys are always rejected with the
    /// process-wide default-unsupported entry.
    pub fn feature_config(&self, key: &str) -> Feature {
        self.features
            .get(key)
            .cloned()
            .unwrap_or_else(Feature::default_unsupported)
    }

    /// Whether `name` is a supported extension.
    pub fn is_supported_extension(&self, name: &str) -> bool {
        self.extensions.contains(name)
    }

    /// Whether `index_type` is a supported index access method
    /// (case-insensitive).
    pub fn is_supported_index_type(&self, index_type: &str) -> bool {
        self.index_types.contains(&index_type.to_uppercase())
    }

    /// Number of explicit feature entries (diagnostics only).
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Whether the matrix has no explicit feature entries.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Apply one version level on top of the already-merged ancestors.
    fn merge_level(&mut self, level: &Map<String, Value>) -> CoreResult<()> {
        if let Some(Value::Array(exts)) = level.get(EXTENSIONS) {
            self.extensions
                .extend(exts.iter().filter_map(Value::as_str).map(String::from));
        }
        if let Some(Value::Array(types)) = level.get(INDEX_TYPES) {
            self.index_types.extend(
                types
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_uppercase),
            );
        }

        for (section, entry) in level {
            match entry {
                // Type 1: section is a list of unconditionally-supported names.
                Value::Array(names) => {
                    for name in names.iter().filter_map(Value::as_str) {
                        self.features
                            .insert(name.to_string(), Feature::supported(name));
                    }
                }
                // Type 2: section is a map of explicit feature entries.
                Value::Object(entries) => {
                    for (feature, spec) in entries {
                        let parsed = parse_feature(feature, spec)?;
                        self.features.insert(feature.clone(), parsed);
                    }
                }
                // Scalar entries (e.g. `inherit_from`) are not feature
                // sections.
                _ => {
                    if section != INHERIT_FROM {
                        log::debug!("ignoring scalar config entry '{section}'");
                    }
                }
            }
        }
        Ok(())
    }
}

fn parse_feature(name: &str, spec: &Value) -> CoreResult<Feature> {
    let Value::Object(obj) = spec else {
        return Err(ConfigError::MalformedEntry {
            key: name.to_string(),
            reason: "feature entry must be an object".to_string(),
        });
    };
    let supported = obj
        .get(SUPPORTED)
        .and_then(Value::as_bool)
        .ok_or_else(|| ConfigError::MissingSupported {
            feature: name.to_string(),
        })?;
    if supported {
        return Ok(Feature::supported(name));
    }
    let message = obj
        .get(ERROR_MESSAGE)
        .and_then(Value::as_str)
        .ok_or_else(|| ConfigError::MissingErrorMessage {
            feature: name.to_string(),
        })?;
    Ok(Feature::unsupported(name, message))
}
