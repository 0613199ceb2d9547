//! Single-key statement classifications: statement kinds whose support is
//! fully decided by one feature entry.

use sc_core::{CompatMatrix, Feature};
use sc_sql::ddl::CreateViewStmt;

use super::lookup;
use crate::result::StatementResult;

pub(crate) fn classify_view(stmt: &CreateViewStmt, matrix: &CompatMatrix) -> Vec<StatementResult> {
    let key = if stmt.materialized {
        "create_materialized_view"
    } else {
        "create_view"
    };
    vec![lookup(matrix, key)]
}

pub(crate) fn classify_key(matrix: &CompatMatrix, key: &str) -> Vec<StatementResult> {
    vec![lookup(matrix, key)]
}

pub(crate) fn default_unsupported() -> Vec<StatementResult> {
    vec![StatementResult::new(Feature::default_unsupported())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::testutil::test_matrix;

    #[test]
    fn test_view_and_materialized_view_keys() {
        let matrix = test_matrix();
        let view = classify_view(&CreateViewStmt { materialized: false }, &matrix);
        assert_eq!(view[0].feature.key, "create_view");
        assert!(view[0].is_supported());

        let matview = classify_view(&CreateViewStmt { materialized: true }, &matrix);
        assert_eq!(
            matview[0].message(),
            "CREATE MATERIALIZED VIEW is not supported"
        );
    }

    #[test]
    fn test_default_unsupported_result() {
        let results = default_unsupported();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].message(), "This statement is not supported");
    }
}
