//! Classification results

use sc_core::Feature;
use serde::Serialize;

/// One classification outcome for (part of) a statement. A compound
/// statement may produce several results; it counts as supported only if
/// every result is supported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatementResult {
    pub feature: Feature,
}

impl StatementResult {
    pub fn new(feature: Feature) -> Self {
        Self { feature }
    }

    pub fn is_supported(&self) -> bool {
        self.feature.is_supported()
    }

    pub fn message(&self) -> &str {
        self.feature.message()
    }
}
