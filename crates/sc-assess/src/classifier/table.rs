//! CREATE TABLE classification.

use sc_core::{CompatMatrix, ObjectRegistry};
use sc_sql::ddl::{CreateTableStmt, OnCommitClause};

use super::{constraint, lookup, to_object_name};
use crate::result::StatementResult;

/// Classify a CREATE TABLE statement. Each restricted clause contributes its
/// own result; supported sub-results are then filtered out, and only a table
/// with no remaining restrictions is recorded in the dependency registry.
pub(crate) fn classify(
    stmt: &CreateTableStmt,
    matrix: &CompatMatrix,
    objects: &mut ObjectRegistry,
) -> Vec<StatementResult> {
    let mut results = Vec::new();
    let mut feature = matrix.feature_config("create_table_standard");

    if stmt.of_type {
        results.push(lookup(matrix, "create_table_of_type"));
    }
    if let Some(on_commit) = stmt.on_commit {
        let key = match on_commit {
            OnCommitClause::Drop => "parameter_on_commit_drop",
            OnCommitClause::DeleteRows => "parameter_on_commit_delete_rows",
            OnCommitClause::PreserveRows => "parameter_on_commit_preserve_rows",
        };
        results.push(lookup(matrix, key));
    }
    if stmt.if_not_exists {
        feature = matrix.feature_config("parameter_if_not_exists_create_table");
    }
    if stmt.storage_options {
        feature = matrix.feature_config("storage_parameter");
    }
    if stmt.partition_by {
        results.push(lookup(matrix, "parameter_partition_by"));
    }
    if stmt.tablespace {
        results.push(lookup(matrix, "parameter_tablespace"));
    }
    if stmt.inherits {
        results.push(lookup(matrix, "parameter_inherits"));
    }
    if stmt.using_method {
        results.push(lookup(matrix, "parameter_using_method"));
    }
    if stmt.temp {
        results.push(lookup(matrix, "create_temporary_table"));
    }
    for column in &stmt.columns {
        results.extend(constraint::classify_column(column, true, matrix));
    }
    for table_constraint in &stmt.constraints {
        results.push(constraint::classify_table_constraint(table_constraint, matrix));
    }
    if stmt.like_clause {
        results.push(lookup(matrix, "create_table_like"));
    }

    // Supported clause results carry no information for the report; what
    // remains decides whether the statement is clean.
    results.retain(|r| !r.is_supported());

    if results.is_empty() {
        if feature.is_supported() {
            if let Some(name) = &stmt.name {
                objects.register("table", to_object_name(name).qualified_name());
            }
        }
        results.push(StatementResult::new(feature));
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::testutil::test_matrix;
    use sc_sql::ddl::{ColumnConstraint, ColumnDef, QualifiedName, TableConstraint};

    fn plain_table(name: &str) -> CreateTableStmt {
        CreateTableStmt {
            name: Some(QualifiedName::new(name)),
            columns: vec![ColumnDef {
                name: "id".to_string(),
                type_name: "bigint".to_string(),
                constraints: vec![ColumnConstraint::NotNull],
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_plain_table_is_supported_and_registered() {
        let matrix = test_matrix();
        let mut objects = ObjectRegistry::new();
        let results = classify(&plain_table("orders"), &matrix, &mut objects);
        assert_eq!(results.len(), 1);
        assert!(results[0].is_supported());
        assert_eq!(results[0].feature.key, "create_table_standard");
        assert!(objects.contains("table", "public.orders"));
    }

    #[test]
    fn test_unsupported_clause_blocks_registration() {
        let matrix = test_matrix();
        let mut objects = ObjectRegistry::new();
        let mut stmt = plain_table("t");
        stmt.tablespace = true;
        let results = classify(&stmt, &matrix, &mut objects);
        assert_eq!(results.len(), 1);
        assert!(!results[0].is_supported());
        assert_eq!(results[0].message(), "TABLESPACE parameter is not supported");
        assert!(!objects.contains("table", "public.t"));
    }

    #[test]
    fn test_multiple_unsupported_clauses_each_report() {
        let matrix = test_matrix();
        let mut objects = ObjectRegistry::new();
        let mut stmt = plain_table("t");
        stmt.temp = true;
        stmt.partition_by = true;
        let results = classify(&stmt, &matrix, &mut objects);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| !r.is_supported()));
    }

    #[test]
    fn test_unsupported_constraint_reports_its_message() {
        let matrix = test_matrix();
        let mut objects = ObjectRegistry::new();
        let mut stmt = plain_table("t");
        stmt.constraints.push(TableConstraint::Exclude);
        let results = classify(&stmt, &matrix, &mut objects);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].message(), "EXCLUDE constraint is not supported");
    }

    #[test]
    fn test_schema_qualified_registration() {
        let matrix = test_matrix();
        let mut objects = ObjectRegistry::new();
        let mut stmt = plain_table("t");
        stmt.name = Some(QualifiedName::with_schema("sales", "orders"));
        classify(&stmt, &matrix, &mut objects);
        assert!(objects.contains("table", "sales.orders"));
        assert!(!objects.contains("table", "public.orders"));
    }

    #[test]
    fn test_generated_identity_column_unsupported() {
        let matrix = test_matrix();
        let mut objects = ObjectRegistry::new();
        let mut stmt = plain_table("t");
        stmt.columns[0]
            .constraints
            .push(ColumnConstraint::GeneratedIdentity);
        let results = classify(&stmt, &matrix, &mut objects);
        assert_eq!(results.len(), 1);
        assert_eq!(
            results[0].message(),
            "GENERATED AS IDENTITY constraint is not supported"
        );
    }
}
