//! Statement classifiers, one module per statement family.
//!
//! Classifiers are free functions from a statement node (plus the
//! compatibility matrix and, where cross-statement references matter, the
//! object registry) to a list of results. They never fail and never panic:
//! every path ends in a `StatementResult`.

pub mod alter_table;
pub mod constraint;
pub mod define;
pub mod extension;
pub mod function;
pub mod grant;
pub mod index;
pub mod policy;
pub mod relocate;
pub mod rename;
pub mod schema;
pub mod sequence;
pub mod simple;
pub mod table;

use sc_core::{CompatMatrix, ObjectName};
use sc_sql::QualifiedName;

use crate::result::StatementResult;

/// Resolve a statement-level qualified name against the default namespace.
pub(crate) fn to_object_name(name: &QualifiedName) -> ObjectName {
    match &name.schema {
        Some(schema) => ObjectName::qualified(schema.clone(), name.name.clone()),
        None => ObjectName::new(name.name.clone()),
    }
}

/// Single feature-lookup result.
pub(crate) fn lookup(matrix: &CompatMatrix, key: &str) -> StatementResult {
    StatementResult::new(matrix.feature_config(key))
}
