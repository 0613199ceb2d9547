//! JSON report assembly.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use sc_assess::AssessmentSummary;

/// Top-level report document written to `report.json`.
#[derive(Debug, Serialize)]
pub struct Report {
    pub metadata: ReportMetadata,
    pub statements: Vec<StatementReport>,
}

#[derive(Debug, Serialize)]
pub struct ReportMetadata {
    pub input_file: String,
    pub engine_version: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub total_statements: usize,
    pub supported_statements: usize,
    pub unsupported_statements: usize,
}

#[derive(Debug, Serialize)]
pub struct StatementReport {
    pub index: usize,
    pub sql: String,
    pub supported: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl Report {
    pub fn new(
        input_file: &str,
        engine_version: &str,
        started_at: DateTime<Utc>,
        summary: &AssessmentSummary,
    ) -> Self {
        let statements = (0..summary.total())
            .map(|index| StatementReport {
                index,
                sql: summary.statement(index).unwrap_or_default().to_string(),
                supported: summary.is_supported(index),
                errors: summary.messages(index).to_vec(),
            })
            .collect();
        Self {
            metadata: ReportMetadata {
                input_file: input_file.to_string(),
                engine_version: engine_version.to_string(),
                started_at,
                finished_at: Utc::now(),
                total_statements: summary.total(),
                supported_statements: summary.supported_count(),
                unsupported_statements: summary.unsupported_count(),
            },
            statements,
        }
    }

    /// Write the report as pretty-printed JSON into `dir/report.json`.
    pub fn write(&self, dir: &Path) -> Result<()> {
        let path = dir.join("report.json");
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }
}
