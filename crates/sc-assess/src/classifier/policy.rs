//! CREATE POLICY / ALTER POLICY classification.
//!
//! Policies reference a table created earlier in the script; the object
//! registry decides whether that reference resolves.

use sc_core::{CompatMatrix, Feature, ObjectRegistry};
use sc_sql::ddl::PolicyStmt;

use super::to_object_name;
use crate::result::StatementResult;

pub(crate) fn classify(
    stmt: &PolicyStmt,
    feature_key: &str,
    matrix: &CompatMatrix,
    objects: &ObjectRegistry,
) -> Vec<StatementResult> {
    let mut feature = matrix.feature_config(feature_key);
    if let Some(table) = &stmt.table {
        let qualified = to_object_name(table).qualified_name();
        if !objects.contains("table", &qualified) {
            feature = Feature::unsupported(
                feature_key,
                format!("relation {qualified} does not exist"),
            );
        }
    }
    vec![StatementResult::new(feature)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::testutil::test_matrix;
    use sc_sql::ddl::QualifiedName;

    fn policy(table: &str) -> PolicyStmt {
        PolicyStmt {
            name: Some("p".to_string()),
            table: Some(QualifiedName::new(table)),
        }
    }

    #[test]
    fn test_policy_on_unregistered_table() {
        let matrix = test_matrix();
        let objects = ObjectRegistry::new();
        let results = classify(&policy("t"), "create_policy", &matrix, &objects);
        assert_eq!(results.len(), 1);
        assert!(!results[0].is_supported());
        assert_eq!(results[0].message(), "relation public.t does not exist");
    }

    #[test]
    fn test_policy_after_table_registration() {
        let matrix = test_matrix();
        let mut objects = ObjectRegistry::new();
        objects.register("table", "public.t");
        let results = classify(&policy("t"), "create_policy", &matrix, &objects);
        assert!(results[0].is_supported());
        assert_eq!(results[0].feature.key, "create_policy");
    }

    #[test]
    fn test_alter_policy_uses_its_own_key() {
        let matrix = test_matrix();
        let objects = ObjectRegistry::new();
        let results = classify(&policy("missing"), "alter_policy", &matrix, &objects);
        assert_eq!(results[0].feature.key, "alter_policy");
        assert_eq!(results[0].message(), "relation public.missing does not exist");
    }

    #[test]
    fn test_schema_qualified_policy_target() {
        let matrix = test_matrix();
        let mut objects = ObjectRegistry::new();
        objects.register("table", "sales.orders");
        let stmt = PolicyStmt {
            name: Some("p".to_string()),
            table: Some(QualifiedName::with_schema("sales", "orders")),
        };
        let results = classify(&stmt, "create_policy", &matrix, &objects);
        assert!(results[0].is_supported());
    }
}
