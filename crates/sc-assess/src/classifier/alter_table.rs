//! ALTER TABLE classification, plus the grammar-adjacent ALTER VIEW,
//! ALTER MATERIALIZED VIEW and ALTER INDEX forms.
//!
//! A compound ALTER TABLE decomposes into sub-commands. Some commands
//! override the statement's single baseline feature (last one wins, as in
//! the target engine's own handling), others contribute their own result;
//! the baseline is only reported when no contributed result exists.

use sc_core::CompatMatrix;
use sc_sql::ddl::{
    AlterColumnCmd, AlterTableCmd, AlterTableStmt, AlterViewCmd, AlterViewStmt, EnableMode,
};

use super::{constraint, lookup};
use crate::result::StatementResult;

pub(crate) fn classify(stmt: &AlterTableStmt, matrix: &CompatMatrix) -> Vec<StatementResult> {
    let mut results = Vec::new();
    let mut feature = matrix.feature_config("alter_table_standard");

    if stmt.if_exists {
        feature = matrix.feature_config("parameter_if_not_exists_alter_table");
    }
    if stmt.only {
        results.push(lookup(matrix, "alter_table_only"));
    }

    for cmd in &stmt.cmds {
        match cmd {
            AlterTableCmd::AddColumn { column } => {
                feature = matrix.feature_config("alter_table_add_column");
                // The added column's constraints are classified on the
                // alter-table path (serial NOT NULL is restricted there);
                // only restrictions surface as extra results.
                results.extend(
                    constraint::classify_column(column, false, matrix)
                        .into_iter()
                        .filter(|r| !r.is_supported()),
                );
            }
            AlterTableCmd::DropColumn => {
                feature = matrix.feature_config("alter_table_drop_column");
            }
            AlterTableCmd::AlterColumn(sub) => match sub {
                AlterColumnCmd::TypeWithUsing => {
                    results.push(lookup(matrix, "alter_table_column_type_using"));
                }
                AlterColumnCmd::Type => {}
                AlterColumnCmd::Default => {
                    feature = matrix.feature_config("alter_table_column_default");
                }
                AlterColumnCmd::SetNotNull => {
                    feature = matrix.feature_config("alter_table_column_set_not_null");
                }
                AlterColumnCmd::DropNotNull => {
                    feature = matrix.feature_config("alter_table_column_drop_not_null");
                }
                AlterColumnCmd::DropExpression => {
                    results.push(lookup(matrix, "alter_table_column_drop_expression"));
                }
                AlterColumnCmd::SetStatistics => {
                    results.push(lookup(matrix, "alter_table_column_set_statistics"));
                }
                AlterColumnCmd::SetStorage => {
                    results.push(lookup(matrix, "alter_table_column_set_storage"));
                }
                AlterColumnCmd::AddIdentity => {
                    results.push(lookup(matrix, "alter_table_column_add_identity"));
                }
                AlterColumnCmd::DropIdentity => {
                    results.push(lookup(matrix, "alter_table_column_drop_identity"));
                }
                AlterColumnCmd::SetIdentity => {
                    results.push(lookup(matrix, "alter_table_column_set_identity"));
                }
                AlterColumnCmd::SetAttributeOptions => {
                    results.push(lookup(matrix, "alter_table_column_set_attribute_option"));
                }
                AlterColumnCmd::ResetAttributeOptions => {
                    results.push(lookup(matrix, "alter_table_column_reset_attribute_option"));
                }
                AlterColumnCmd::Other => {}
            },
            AlterTableCmd::AddConstraint => {}
            AlterTableCmd::AlterConstraint => {
                results.push(lookup(matrix, "alter_table_alter_constraint"));
            }
            AlterTableCmd::ValidateConstraint => {
                feature = matrix.feature_config("alter_table_validate_constraint");
            }
            AlterTableCmd::DropConstraint => {
                feature = matrix.feature_config("alter_table_drop_constraint");
            }
            AlterTableCmd::AttachPartition => {
                results.push(lookup(matrix, "alter_table_attach_partition"));
            }
            AlterTableCmd::DetachPartition => {
                results.push(lookup(matrix, "alter_table_detach_partition"));
            }
            AlterTableCmd::OwnerTo => {
                feature = matrix.feature_config("alter_table_owner_to");
            }
            AlterTableCmd::EnableTrigger(mode) => {
                let key = match mode {
                    EnableMode::Normal => "alter_table_enable_trigger",
                    EnableMode::Always => "alter_table_enable_always_trigger",
                    EnableMode::Replica => "alter_table_enable_replica_trigger",
                };
                results.push(lookup(matrix, key));
            }
            AlterTableCmd::DisableTrigger => {
                results.push(lookup(matrix, "alter_table_disable_trigger"));
            }
            AlterTableCmd::EnableRule(mode) => {
                let key = match mode {
                    EnableMode::Normal => "alter_table_enable_rule",
                    EnableMode::Always => "alter_table_enable_always_rule",
                    EnableMode::Replica => "alter_table_enable_replica_rule",
                };
                results.push(lookup(matrix, key));
            }
            AlterTableCmd::DisableRule => {
                results.push(lookup(matrix, "alter_table_disable_rule"));
            }
            AlterTableCmd::Inherit { no } => {
                let key = if *no {
                    "alter_table_no_inherit"
                } else {
                    "alter_table_inherit"
                };
                results.push(lookup(matrix, key));
            }
            AlterTableCmd::OfType { not } => {
                let key = if *not { "alter_table_not_of" } else { "alter_table_of" };
                results.push(lookup(matrix, key));
            }
            AlterTableCmd::SetTablespace => {
                results.push(lookup(matrix, "alter_table_set_tablespace"));
            }
            AlterTableCmd::SetWithoutOids => {
                results.push(lookup(matrix, "alter_table_set_without_oids"));
            }
            AlterTableCmd::SetWithoutCluster => {
                results.push(lookup(matrix, "alter_table_set_without_cluster"));
            }
            AlterTableCmd::SetLogged => {
                results.push(lookup(matrix, "alter_table_set_logged"));
            }
            AlterTableCmd::SetUnlogged => {
                results.push(lookup(matrix, "alter_table_set_unlogged"));
            }
            AlterTableCmd::ReplicaIdentity => {
                results.push(lookup(matrix, "alter_table_replica_identity"));
            }
            AlterTableCmd::ClusterOn => {
                results.push(lookup(matrix, "alter_table_cluster_on_index"));
            }
            AlterTableCmd::RowLevelSecurity => {
                feature = matrix.feature_config("alter_table_row_level_security");
            }
            AlterTableCmd::SetOptions => {
                results.push(lookup(matrix, "alter_table_set_options"));
            }
            AlterTableCmd::ResetOptions => {
                results.push(lookup(matrix, "alter_table_reset_options"));
            }
            AlterTableCmd::Other => {}
        }
    }

    if results.is_empty() {
        results.push(StatementResult::new(feature));
    }
    results
}

pub(crate) fn classify_alter_view(
    stmt: &AlterViewStmt,
    matrix: &CompatMatrix,
) -> Vec<StatementResult> {
    let key = match stmt.cmd {
        AlterViewCmd::AlterColumn => "alter_view_alter",
        AlterViewCmd::OwnerTo => "alter_view_change_owner",
        AlterViewCmd::Reset => "alter_view_reset",
        AlterViewCmd::Set => "alter_view_set",
        AlterViewCmd::Other => return super::simple::default_unsupported(),
    };
    vec![lookup(matrix, key)]
}

pub(crate) fn classify_alter_index(matrix: &CompatMatrix) -> Vec<StatementResult> {
    vec![lookup(matrix, "alter_table_alter_index")]
}

pub(crate) fn classify_alter_materialized_view(matrix: &CompatMatrix) -> Vec<StatementResult> {
    vec![lookup(matrix, "alter_materialized_view")]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::testutil::test_matrix;
    use sc_sql::ddl::{ColumnConstraint, ColumnDef};

    fn alter(cmds: Vec<AlterTableCmd>) -> AlterTableStmt {
        AlterTableStmt {
            if_exists: false,
            only: false,
            cmds,
        }
    }

    #[test]
    fn test_bare_alter_table_is_standard() {
        let matrix = test_matrix();
        let results = classify(&alter(vec![AlterTableCmd::Other]), &matrix);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].feature.key, "alter_table_standard");
    }

    #[test]
    fn test_add_column_overrides_baseline() {
        let matrix = test_matrix();
        let column = ColumnDef {
            name: "c".to_string(),
            type_name: "bigint".to_string(),
            constraints: vec![ColumnConstraint::NotNull],
        };
        let results = classify(&alter(vec![AlterTableCmd::AddColumn { column }]), &matrix);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].feature.key, "alter_table_add_column");
    }

    #[test]
    fn test_add_serial_column_with_not_null_is_restricted() {
        let matrix = test_matrix();
        let column = ColumnDef {
            name: "c".to_string(),
            type_name: "bigserial".to_string(),
            constraints: vec![ColumnConstraint::NotNull],
        };
        let results = classify(&alter(vec![AlterTableCmd::AddColumn { column }]), &matrix);
        assert_eq!(results.len(), 1);
        assert_eq!(
            results[0].message(),
            "Adding serial column with NOT NULL constraint is not supported"
        );
    }

    #[test]
    fn test_only_contributes_extra_result() {
        let matrix = test_matrix();
        let stmt = AlterTableStmt {
            if_exists: false,
            only: true,
            cmds: vec![AlterTableCmd::DropColumn],
        };
        let results = classify(&stmt, &matrix);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].message(), "ALTER TABLE ONLY is not supported");
    }

    #[test]
    fn test_attach_partition_reports() {
        let matrix = test_matrix();
        let results = classify(&alter(vec![AlterTableCmd::AttachPartition]), &matrix);
        assert_eq!(
            results[0].message(),
            "ALTER TABLE ATTACH PARTITION is not supported"
        );
    }

    #[test]
    fn test_trigger_commands() {
        let matrix = test_matrix();
        let results = classify(
            &alter(vec![AlterTableCmd::EnableTrigger(EnableMode::Normal)]),
            &matrix,
        );
        assert_eq!(
            results[0].message(),
            "ALTER TABLE ENABLE TRIGGER is not supported"
        );
    }

    #[test]
    fn test_compound_statement_accumulates_results() {
        let matrix = test_matrix();
        let results = classify(
            &alter(vec![
                AlterTableCmd::AttachPartition,
                AlterTableCmd::AlterColumn(AlterColumnCmd::SetStatistics),
            ]),
            &matrix,
        );
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| !r.is_supported()));
    }

    #[test]
    fn test_owner_to_uses_baseline_override() {
        let matrix = test_matrix();
        let results = classify(&alter(vec![AlterTableCmd::OwnerTo]), &matrix);
        assert_eq!(results[0].feature.key, "alter_table_owner_to");
        assert!(results[0].is_supported());
    }

    #[test]
    fn test_unconfigured_command_is_default_unsupported() {
        let matrix = test_matrix();
        let results = classify(&alter(vec![AlterTableCmd::SetTablespace]), &matrix);
        assert_eq!(results[0].message(), "This statement is not supported");
    }

    #[test]
    fn test_alter_view_commands() {
        let matrix = test_matrix();
        let results = classify_alter_view(
            &AlterViewStmt {
                cmd: AlterViewCmd::OwnerTo,
            },
            &matrix,
        );
        assert_eq!(results[0].feature.key, "alter_view_change_owner");
    }
}
