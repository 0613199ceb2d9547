//! Feature configuration entries

use serde::{Deserialize, Serialize};

/// Default message attached to statements with no matching feature entry.
pub const DEFAULT_UNSUPPORTED_MESSAGE: &str = "This statement is not supported";

/// One classifiable SQL capability and its support status for the resolved
/// target version.
///
/// Invariant: `supported == false` implies `error_message` is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    /// Feature key (e.g. "create_sequence")
    pub key: String,
    /// Whether the target engine accepts this feature
    pub supported: bool,
    /// Predicted engine error text when unsupported
    pub error_message: Option<String>,
}

impl Feature {
    /// A supported feature with no error message.
    pub fn supported(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            supported: true,
            error_message: None,
        }
    }

    /// An unsupported feature carrying the engine error it predicts.
    pub fn unsupported(key: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            supported: false,
            error_message: Some(error_message.into()),
        }
    }

    /// The process-wide default for statements with no feature entry.
    pub fn default_unsupported() -> Self {
        Self::unsupported("unsupported", DEFAULT_UNSUPPORTED_MESSAGE)
    }

    /// The process-wide default for clauses that are always accepted.
    pub fn default_supported() -> Self {
        Self::supported("supported")
    }

    /// Whether the target engine accepts this feature.
    pub fn is_supported(&self) -> bool {
        self.supported
    }

    /// Error message text, empty for supported features.
    pub fn message(&self) -> &str {
        self.error_message.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_unsupported_carries_message() {
        let f = Feature::default_unsupported();
        assert!(!f.is_supported());
        assert_eq!(f.message(), DEFAULT_UNSUPPORTED_MESSAGE);
    }

    #[test]
    fn test_default_supported_has_no_message() {
        let f = Feature::default_supported();
        assert!(f.is_supported());
        assert_eq!(f.error_message, None);
    }

    #[test]
    fn test_serde_roundtrip() {
        let f = Feature::unsupported("create_rule", "CREATE RULE is not supported");
        let json = serde_json::to_string(&f).unwrap();
        let back: Feature = serde_json::from_str(&json).unwrap();
        assert_eq!(back, f);
    }
}
