//! CREATE / ALTER EXTENSION classification.

use sc_core::{CompatMatrix, Feature};
use sc_sql::ddl::{AddDrop, AlterExtensionContentsStmt, AlterExtensionStmt, CreateExtensionStmt};

use crate::result::StatementResult;

pub(crate) fn classify_create(
    stmt: &CreateExtensionStmt,
    matrix: &CompatMatrix,
) -> Vec<StatementResult> {
    vec![StatementResult::new(extension_feature(
        &stmt.name,
        "create_extension",
        matrix,
    ))]
}

pub(crate) fn classify_alter(
    stmt: &AlterExtensionStmt,
    matrix: &CompatMatrix,
) -> Vec<StatementResult> {
    vec![StatementResult::new(extension_feature(
        &stmt.name,
        "alter_extension_update_version",
        matrix,
    ))]
}

pub(crate) fn classify_contents(
    stmt: &AlterExtensionContentsStmt,
    matrix: &CompatMatrix,
) -> Vec<StatementResult> {
    let key = match stmt.action {
        AddDrop::Add => "alter_extension_add_object",
        AddDrop::Drop => "alter_extension_drop_object",
    };
    vec![StatementResult::new(matrix.feature_config(key))]
}

/// Baseline feature for the statement kind, overridden when the extension
/// itself is not in the supported set.
pub(crate) fn extension_feature(name: &str, feature_key: &str, matrix: &CompatMatrix) -> Feature {
    if matrix.is_supported_extension(name) {
        matrix.feature_config(feature_key)
    } else {
        Feature::unsupported("", format!("Extension {name} is not supported"))
    }
}
