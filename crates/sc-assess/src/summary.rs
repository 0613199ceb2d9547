//! Per-run result aggregation.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::result::StatementResult;

/// Aggregates classification results against statement indices. A statement
/// is supported only when every result recorded for it is supported.
#[derive(Debug, Default, Serialize)]
pub struct AssessmentSummary {
    statements: Vec<String>,
    supported: BTreeSet<usize>,
    unsupported: BTreeMap<usize, Vec<String>>,
}

impl AssessmentSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a statement's source text, returning its sequential index.
    pub fn push_statement(&mut self, text: impl Into<String>) -> usize {
        self.statements.push(text.into());
        self.statements.len() - 1
    }

    /// Record the classification results for the statement at `index`.
    pub fn record(&mut self, index: usize, results: &[StatementResult]) {
        let messages: Vec<String> = results
            .iter()
            .filter(|r| !r.is_supported())
            .map(|r| r.message().to_string())
            .collect();
        if messages.is_empty() {
            self.supported.insert(index);
        } else {
            self.unsupported.entry(index).or_default().extend(messages);
            self.supported.remove(&index);
        }
    }

    pub fn statement(&self, index: usize) -> Option<&str> {
        self.statements.get(index).map(String::as_str)
    }

    pub fn total(&self) -> usize {
        self.statements.len()
    }

    pub fn supported_count(&self) -> usize {
        self.supported.len()
    }

    pub fn unsupported_count(&self) -> usize {
        self.unsupported.len()
    }

    pub fn is_supported(&self, index: usize) -> bool {
        self.supported.contains(&index)
    }

    /// Error messages recorded for an unsupported statement.
    pub fn messages(&self, index: usize) -> &[String] {
        self.unsupported
            .get(&index)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Indices of unsupported statements, in source order.
    pub fn unsupported_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.unsupported.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sc_core::Feature;

    #[test]
    fn test_statement_supported_only_if_all_results_supported() {
        let mut summary = AssessmentSummary::new();
        let idx = summary.push_statement("CREATE TABLE t (id int)");
        summary.record(
            idx,
            &[
                StatementResult::new(Feature::supported("create_table_standard")),
                StatementResult::new(Feature::unsupported("parameter_tablespace", "no")),
            ],
        );
        assert!(!summary.is_supported(idx));
        assert_eq!(summary.messages(idx), &["no".to_string()]);
        assert_eq!(summary.unsupported_count(), 1);
    }

    #[test]
    fn test_all_supported_statement() {
        let mut summary = AssessmentSummary::new();
        let idx = summary.push_statement("CREATE SCHEMA s");
        summary.record(idx, &[StatementResult::new(Feature::supported("create_schema"))]);
        assert!(summary.is_supported(idx));
        assert_eq!(summary.supported_count(), 1);
        assert_eq!(summary.total(), 1);
    }
}
