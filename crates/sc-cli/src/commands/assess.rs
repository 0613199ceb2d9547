//! `shardcheck assess` - run the assessment over a SQL script.

use std::fs;

use anyhow::{bail, Context, Result};
use chrono::Utc;

use sc_assess::{Assessor, AssessmentSummary};
use sc_core::CompatConfig;
use sc_sql::{lower_statement, split_script, SqlParser};

use crate::cli::AssessArgs;
use crate::report::Report;

pub fn execute(args: &AssessArgs) -> Result<()> {
    let started_at = Utc::now();

    let config = CompatConfig::load(&args.config)
        .with_context(|| format!("failed to load config from {}", args.config.display()))?;
    if !config.is_supported_version(&args.engine_version) {
        bail!(
            "Unsupported engine version [{}] specified",
            args.engine_version
        );
    }
    let matrix = config.resolve(&args.engine_version)?;

    let script = fs::read_to_string(&args.input_file)
        .with_context(|| format!("failed to read input file {}", args.input_file.display()))?;

    if args.output_directory.exists() {
        bail!(
            "Output directory [{}] already exists. Cannot recreate directory",
            args.output_directory.display()
        );
    }
    fs::create_dir_all(&args.output_directory).with_context(|| {
        format!(
            "failed to create output directory {}",
            args.output_directory.display()
        )
    })?;

    let summary = run_assessment(&script, &matrix);

    let report = Report::new(
        &args.input_file.display().to_string(),
        &args.engine_version,
        started_at,
        &summary,
    );
    report.write(&args.output_directory)?;

    println!(
        "Assessed {} statements against version {}: {} supported, {} unsupported",
        summary.total(),
        args.engine_version,
        summary.supported_count(),
        summary.unsupported_count()
    );
    for index in summary.unsupported_indices() {
        let sql = summary.statement(index).unwrap_or_default();
        let first_line = sql.lines().next().unwrap_or_default();
        println!("  [{index}] {first_line}");
        for message in summary.messages(index) {
            println!("      {message}");
        }
    }
    Ok(())
}

/// Split, lower and classify every statement of a script, in source order.
fn run_assessment(script: &str, matrix: &sc_core::CompatMatrix) -> AssessmentSummary {
    let parser = SqlParser::new();
    let mut assessor = Assessor::new(matrix);
    let mut summary = AssessmentSummary::new();

    for text in split_script(script) {
        let stmt = lower_statement(&text, &parser);
        log::debug!("classifying {} statement", stmt.kind());
        let index = summary.push_statement(text);
        let results = assessor.classify(&stmt);
        summary.record(index, &results);
    }
    summary
}
