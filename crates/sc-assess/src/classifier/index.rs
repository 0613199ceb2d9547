//! CREATE INDEX classification.

use sc_core::{CompatMatrix, Feature};
use sc_sql::ddl::CreateIndexStmt;

use crate::result::StatementResult;

pub(crate) fn classify(stmt: &CreateIndexStmt, matrix: &CompatMatrix) -> Vec<StatementResult> {
    let mut results = Vec::new();
    let mut feature = matrix.feature_config("index_create");

    if let Some(index_type) = &stmt.using {
        if !matrix.is_supported_index_type(index_type) {
            results.push(StatementResult::new(Feature::unsupported(
                "",
                format!("Index type {index_type} is not supported"),
            )));
        }
    }
    if stmt.unique {
        feature = matrix.feature_config("index_create_unique");
    }
    if results.is_empty() {
        results.push(StatementResult::new(feature));
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::testutil::test_matrix;

    #[test]
    fn test_plain_index_supported() {
        let matrix = test_matrix();
        let results = classify(
            &CreateIndexStmt {
                unique: false,
                using: None,
            },
            &matrix,
        );
        assert_eq!(results[0].feature.key, "index_create");
        assert!(results[0].is_supported());
    }

    #[test]
    fn test_unique_index_uses_its_own_key() {
        let matrix = test_matrix();
        let results = classify(
            &CreateIndexStmt {
                unique: true,
                using: None,
            },
            &matrix,
        );
        assert_eq!(results[0].feature.key, "index_create_unique");
    }

    #[test]
    fn test_supported_index_type_is_case_insensitive() {
        let matrix = test_matrix();
        let results = classify(
            &CreateIndexStmt {
                unique: false,
                using: Some("hash".to_string()),
            },
            &matrix,
        );
        assert!(results[0].is_supported());
    }

    #[test]
    fn test_unsupported_index_type_names_the_type() {
        let matrix = test_matrix();
        let results = classify(
            &CreateIndexStmt {
                unique: true,
                using: Some("gin".to_string()),
            },
            &matrix,
        );
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].message(), "Index type gin is not supported");
    }
}
