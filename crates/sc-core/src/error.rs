//! Error types for sc-core

use thiserror::Error;

/// Configuration errors. All of these are fatal to a run: without a resolved
/// compatibility matrix there is nothing to classify against.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// C001: Config file not found or unreadable
    #[error("[C001] Failed to read config '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// C002: Config document is not valid JSON
    #[error("[C002] Failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    /// C003: Top-level `configuration` key missing
    #[error("[C003] Key 'configuration' does not exist in config")]
    MissingConfigurationKey,

    /// C004: A requested version (or an ancestor reached via `inherit_from`)
    /// is not present in the configuration
    #[error("[C004] Version '{version}' does not exist in config")]
    UnknownVersion { version: String },

    /// C005: `inherit_from` chain loops back on itself
    #[error("[C005] Inheritance cycle detected in config: {cycle}")]
    InheritanceCycle { cycle: String },

    /// C006: An explicit feature entry is missing its `supported` flag
    #[error("[C006] Key 'supported' does not exist in feature config '{feature}'")]
    MissingSupported { feature: String },

    /// C007: An unsupported feature entry is missing its error message
    #[error("[C007] Key 'error_message' does not exist in feature config '{feature}'")]
    MissingErrorMessage { feature: String },

    /// C008: A config value has an unexpected JSON shape
    #[error("[C008] Malformed config entry '{key}': {reason}")]
    MalformedEntry { key: String, reason: String },
}

/// Result type alias for ConfigError
pub type CoreResult<T> = Result<T, ConfigError>;
