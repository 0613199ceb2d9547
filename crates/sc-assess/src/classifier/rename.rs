//! ALTER ... RENAME classification.

use sc_core::{CompatMatrix, Feature};
use sc_sql::ddl::{RenameStmt, RenameTarget};

use crate::result::StatementResult;

pub(crate) fn classify(stmt: &RenameStmt, matrix: &CompatMatrix) -> Vec<StatementResult> {
    let feature = match stmt.target {
        RenameTarget::Index => matrix.feature_config("rename_alter_index"),
        RenameTarget::View => matrix.feature_config("alter_view_rename"),
        RenameTarget::Type => matrix.feature_config("alter_type"),
        RenameTarget::Column { only } => {
            if only {
                matrix.feature_config("alter_table_only")
            } else {
                matrix.feature_config("alter_table_rename_column")
            }
        }
        RenameTarget::Constraint => Feature::default_unsupported(),
        RenameTarget::Table => matrix.feature_config("alter_table_rename"),
        // Renames of object kinds with no restriction pass through.
        RenameTarget::Other => Feature::default_supported(),
    };
    vec![StatementResult::new(feature)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::testutil::test_matrix;

    fn rename(target: RenameTarget) -> Vec<StatementResult> {
        classify(&RenameStmt { target }, &test_matrix())
    }

    #[test]
    fn test_rename_column() {
        let results = rename(RenameTarget::Column { only: false });
        assert_eq!(results[0].feature.key, "alter_table_rename_column");
        assert!(results[0].is_supported());
    }

    #[test]
    fn test_rename_column_with_only() {
        let results = rename(RenameTarget::Column { only: true });
        assert_eq!(results[0].message(), "ALTER TABLE ONLY is not supported");
    }

    #[test]
    fn test_rename_constraint_is_unsupported() {
        let results = rename(RenameTarget::Constraint);
        assert_eq!(results[0].message(), "This statement is not supported");
    }

    #[test]
    fn test_rename_other_object_kinds_pass() {
        let results = rename(RenameTarget::Other);
        assert!(results[0].is_supported());
    }
}
