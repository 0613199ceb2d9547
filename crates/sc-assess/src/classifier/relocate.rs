//! SET SCHEMA, OWNER TO and DEPENDS ON EXTENSION classification.

use sc_core::{CompatMatrix, Feature};
use sc_sql::ddl::{
    AlterObjectDependsStmt, AlterObjectSchemaStmt, AlterOwnerStmt, DependsTarget, OwnerTarget,
    SetSchemaTarget,
};

use crate::result::StatementResult;

pub(crate) fn classify_set_schema(
    stmt: &AlterObjectSchemaStmt,
    matrix: &CompatMatrix,
) -> Vec<StatementResult> {
    match &stmt.target {
        SetSchemaTarget::Extension { names } => {
            let mut results: Vec<StatementResult> = names
                .iter()
                .filter(|name| !matrix.is_supported_extension(name))
                .map(|name| {
                    StatementResult::new(Feature::unsupported(
                        "",
                        format!("Extension {name} is not supported"),
                    ))
                })
                .collect();
            if results.is_empty() {
                results.push(StatementResult::new(
                    matrix.feature_config("alter_extension_set_schema"),
                ));
            }
            results
        }
        SetSchemaTarget::View => vec![StatementResult::new(
            matrix.feature_config("alter_view_change_schema"),
        )],
        SetSchemaTarget::Type => vec![StatementResult::new(matrix.feature_config("alter_type"))],
        SetSchemaTarget::Table => vec![StatementResult::new(
            matrix.feature_config("alter_table_set_schema"),
        )],
        SetSchemaTarget::Other => vec![StatementResult::new(Feature::default_unsupported())],
    }
}

pub(crate) fn classify_owner(stmt: &AlterOwnerStmt, matrix: &CompatMatrix) -> Vec<StatementResult> {
    let feature = match stmt.target {
        OwnerTarget::Schema => matrix.feature_config("alter_schema_owner_to"),
        OwnerTarget::Aggregate => matrix.feature_config("alter_aggregate_owner_to"),
        OwnerTarget::Statistics => matrix.feature_config("alter_statistics_owner_to"),
        OwnerTarget::Subscription => matrix.feature_config("alter_subscription_owner_to"),
        OwnerTarget::Collation => matrix.feature_config("alter_collation_owner_to"),
        OwnerTarget::Function => matrix.feature_config("alter_function"),
        OwnerTarget::Type => matrix.feature_config("alter_type"),
        OwnerTarget::Other => Feature::default_unsupported(),
    };
    vec![StatementResult::new(feature)]
}

pub(crate) fn classify_depends(
    stmt: &AlterObjectDependsStmt,
    matrix: &CompatMatrix,
) -> Vec<StatementResult> {
    let feature = match stmt.target {
        DependsTarget::Trigger => matrix.feature_config("alter_trigger_depends_on"),
        DependsTarget::MaterializedView => {
            matrix.feature_config("alter_materialized_view_depends_on")
        }
        DependsTarget::Index => matrix.feature_config("alter_object_depend_alter_index"),
        DependsTarget::Other => Feature::default_unsupported(),
    };
    vec![StatementResult::new(feature)]
}
