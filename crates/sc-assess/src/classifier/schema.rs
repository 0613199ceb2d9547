//! CREATE SCHEMA classification.

use sc_core::CompatMatrix;
use sc_sql::ddl::CreateSchemaStmt;

use crate::result::StatementResult;

pub(crate) fn classify(stmt: &CreateSchemaStmt, matrix: &CompatMatrix) -> Vec<StatementResult> {
    let key = if stmt.has_elements {
        "create_schema_with_elements"
    } else {
        "create_schema"
    };
    vec![StatementResult::new(matrix.feature_config(key))]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::testutil::test_matrix;

    #[test]
    fn test_plain_schema_supported() {
        let matrix = test_matrix();
        let results = classify(&CreateSchemaStmt { has_elements: false }, &matrix);
        assert!(results[0].is_supported());
    }

    #[test]
    fn test_schema_with_elements_unsupported() {
        let matrix = test_matrix();
        let results = classify(&CreateSchemaStmt { has_elements: true }, &matrix);
        assert_eq!(
            results[0].message(),
            "CREATE SCHEMA WITH ELEMENTS is not supported"
        );
    }
}
