//! sc-assess - Assessment engine for shardcheck
//!
//! The `Assessor` dispatches each DDL statement to its classifier, which
//! consults the compatibility matrix (and, for cross-statement references,
//! the object registry) and emits one or more `StatementResult`s. The
//! `AssessmentSummary` aggregates results per statement index.

pub mod assessor;
pub mod classifier;
pub mod result;
pub mod summary;

pub use assessor::Assessor;
pub use result::StatementResult;
pub use summary::AssessmentSummary;
