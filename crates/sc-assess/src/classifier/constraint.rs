//! Column and table constraint classification, shared by the CREATE TABLE
//! and ALTER TABLE classifiers.

use sc_core::{CompatMatrix, Feature};
use sc_sql::ddl::{ColumnConstraint, ColumnDef, TableConstraint};

use crate::result::StatementResult;

const VALID_SERIAL_TYPES: [&str; 6] = [
    "smallserial",
    "serial2",
    "serial",
    "serial4",
    "bigserial",
    "serial8",
];

pub(crate) fn is_serial_type(type_name: &str) -> bool {
    VALID_SERIAL_TYPES.contains(&type_name.to_lowercase().as_str())
}

/// Classify every constraint of one column definition.
pub(crate) fn classify_column(
    column: &ColumnDef,
    is_create_table: bool,
    matrix: &CompatMatrix,
) -> Vec<StatementResult> {
    let serial = is_serial_type(&column.type_name);
    column
        .constraints
        .iter()
        .map(|c| classify_column_constraint(c, is_create_table, serial, matrix))
        .collect()
}

pub(crate) fn classify_column_constraint(
    constraint: &ColumnConstraint,
    is_create_table: bool,
    is_serial_col: bool,
    matrix: &CompatMatrix,
) -> StatementResult {
    let feature = match constraint {
        ColumnConstraint::NotNull => {
            let key = if !is_create_table && is_serial_col {
                "alter_table_add_column_serial_not_null"
            } else {
                "constraint_not_null_standard"
            };
            matrix.feature_config(key)
        }
        ColumnConstraint::Null => matrix.feature_config("constraint_null_standard"),
        ColumnConstraint::Unique { with_options } => {
            matrix.feature_config(unique_key("constraint_unique_standard", *with_options))
        }
        ColumnConstraint::PrimaryKey { with_options } => {
            matrix.feature_config(unique_key("constraint_primary_key_standard", *with_options))
        }
        ColumnConstraint::Check => matrix.feature_config("constraint_check_standard"),
        ColumnConstraint::Default => Feature::default_supported(),
        ColumnConstraint::GeneratedIdentity => {
            matrix.feature_config("constraint_generated_as_identity_standard")
        }
        ColumnConstraint::GeneratedStored => {
            matrix.feature_config("constraint_generated_stored_standard")
        }
        // COLLATE and constraint attributes carry no restriction.
        ColumnConstraint::Other => Feature::default_supported(),
    };
    StatementResult::new(feature)
}

pub(crate) fn classify_table_constraint(
    constraint: &TableConstraint,
    matrix: &CompatMatrix,
) -> StatementResult {
    let feature = match constraint {
        TableConstraint::Check => matrix.feature_config("constraint_check_standard"),
        TableConstraint::Unique { with_options } => {
            matrix.feature_config(unique_key("constraint_unique_standard", *with_options))
        }
        TableConstraint::PrimaryKey { with_options } => {
            matrix.feature_config(unique_key("constraint_primary_key_standard", *with_options))
        }
        TableConstraint::Exclude => matrix.feature_config("constraint_exclude_standard"),
        TableConstraint::ForeignKey => Feature::default_unsupported(),
    };
    StatementResult::new(feature)
}

fn unique_key(base: &'static str, with_options: bool) -> &'static str {
    if with_options {
        "storage_parameter"
    } else {
        base
    }
}
