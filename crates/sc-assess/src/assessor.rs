//! The statement dispatcher and per-run session state.

use sc_core::{CompatMatrix, ObjectRegistry};
use sc_sql::DdlStatement;

use crate::classifier::{
    alter_table, define, extension, function, grant, index, policy, relocate, rename, schema,
    sequence, simple, table,
};
use crate::result::StatementResult;

/// One assessment session: borrows the resolved compatibility matrix and
/// owns the run's object registry. Statements must be classified in source
/// order, since later statements may reference objects registered by
/// earlier ones.
pub struct Assessor<'a> {
    matrix: &'a CompatMatrix,
    objects: ObjectRegistry,
}

impl<'a> Assessor<'a> {
    pub fn new(matrix: &'a CompatMatrix) -> Self {
        Self {
            matrix,
            objects: ObjectRegistry::new(),
        }
    }

    /// Objects registered so far in this run.
    pub fn objects(&self) -> &ObjectRegistry {
        &self.objects
    }

    /// Classify one statement. Total: every statement shape yields at least
    /// one result, and unknown shapes yield the default-unsupported result.
    pub fn classify(&mut self, stmt: &DdlStatement) -> Vec<StatementResult> {
        let matrix = self.matrix;
        match stmt {
            DdlStatement::CreateSchema(s) => schema::classify(s, matrix),
            DdlStatement::CreateTable(s) => table::classify(s, matrix, &mut self.objects),
            DdlStatement::AlterTable(s) => alter_table::classify(s, matrix),
            DdlStatement::AlterTableAllInTablespace => simple::default_unsupported(),
            DdlStatement::CreateSequence(s) => sequence::classify_create(s, matrix),
            DdlStatement::AlterSequence(s) => sequence::classify_alter(s, matrix),
            DdlStatement::CreateIndex(s) => index::classify(s, matrix),
            DdlStatement::AlterIndex => alter_table::classify_alter_index(matrix),
            DdlStatement::CreateExtension(s) => extension::classify_create(s, matrix),
            DdlStatement::AlterExtension(s) => extension::classify_alter(s, matrix),
            DdlStatement::AlterExtensionContents(s) => extension::classify_contents(s, matrix),
            DdlStatement::CreateCollation(s) => define::classify_collation(s, matrix),
            DdlStatement::CreateOperator(s) => define::classify_operator(s, matrix),
            DdlStatement::CreateAggregate => define::classify_aggregate(matrix),
            DdlStatement::CreateType(s) => define::classify_type(s, matrix),
            DdlStatement::AlterType => simple::classify_key(matrix, "alter_type"),
            DdlStatement::CreatePolicy(s) => {
                policy::classify(s, "create_policy", matrix, &self.objects)
            }
            DdlStatement::AlterPolicy(s) => {
                policy::classify(s, "alter_policy", matrix, &self.objects)
            }
            DdlStatement::CreateView(s) => simple::classify_view(s, matrix),
            DdlStatement::AlterView(s) => alter_table::classify_alter_view(s, matrix),
            DdlStatement::AlterMaterializedView => {
                alter_table::classify_alter_materialized_view(matrix)
            }
            DdlStatement::CreateFunction(s) => function::classify(s, matrix),
            DdlStatement::CreateDomain => simple::classify_key(matrix, "create_domain"),
            DdlStatement::CreateTrigger => simple::classify_key(matrix, "create_trigger"),
            DdlStatement::CreateRule => simple::classify_key(matrix, "create_rule"),
            DdlStatement::CreateStatistics => simple::classify_key(matrix, "create_statistics"),
            DdlStatement::CreateSubscription => {
                simple::classify_key(matrix, "create_subscription")
            }
            DdlStatement::AlterSubscription => simple::classify_key(matrix, "alter_subscription"),
            DdlStatement::CreateAccessMethod => {
                simple::classify_key(matrix, "create_access_method")
            }
            DdlStatement::CreateCast => simple::classify_key(matrix, "create_cast"),
            DdlStatement::CreateForeignTable => {
                simple::classify_key(matrix, "create_foreign_table")
            }
            DdlStatement::CreateOperatorClass => {
                simple::classify_key(matrix, "create_operator_class")
            }
            DdlStatement::CreateOperatorFamily => {
                simple::classify_key(matrix, "create_operator_family")
            }
            DdlStatement::Rename(s) => rename::classify(s, matrix),
            DdlStatement::AlterObjectSchema(s) => relocate::classify_set_schema(s, matrix),
            DdlStatement::AlterOwner(s) => relocate::classify_owner(s, matrix),
            DdlStatement::AlterObjectDepends(s) => relocate::classify_depends(s, matrix),
            DdlStatement::Grant(s) => grant::classify(s, matrix),
            DdlStatement::Other => {
                log::debug!("statement shape has no classifier; defaulting to unsupported");
                simple::default_unsupported()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::testutil::test_matrix;
    use sc_core::feature::DEFAULT_UNSUPPORTED_MESSAGE;
    use sc_sql::ddl::{CreateTableStmt, PolicyStmt, QualifiedName};

    #[test]
    fn test_unmatched_shape_yields_single_default_unsupported() {
        let matrix = test_matrix();
        let mut assessor = Assessor::new(&matrix);
        let results = assessor.classify(&DdlStatement::Other);
        assert_eq!(results.len(), 1);
        assert!(!results[0].is_supported());
        assert_eq!(results[0].message(), DEFAULT_UNSUPPORTED_MESSAGE);
    }

    #[test]
    fn test_policy_sees_tables_registered_by_earlier_statements() {
        let matrix = test_matrix();
        let mut assessor = Assessor::new(&matrix);

        let policy = DdlStatement::CreatePolicy(PolicyStmt {
            name: Some("p".to_string()),
            table: Some(QualifiedName::new("t")),
        });

        // Before the table exists the policy reference fails.
        let results = assessor.classify(&policy);
        assert_eq!(results[0].message(), "relation public.t does not exist");

        let create_table = DdlStatement::CreateTable(CreateTableStmt {
            name: Some(QualifiedName::new("t")),
            ..Default::default()
        });
        assert!(assessor.classify(&create_table)[0].is_supported());
        assert!(assessor.objects().contains("table", "public.t"));

        // The same policy statement now resolves.
        let results = assessor.classify(&policy);
        assert!(results[0].is_supported());
    }

    #[test]
    fn test_every_statement_yields_at_least_one_result() {
        let matrix = test_matrix();
        let mut assessor = Assessor::new(&matrix);
        let statements = [
            DdlStatement::CreateAggregate,
            DdlStatement::CreateAccessMethod,
            DdlStatement::CreateCast,
            DdlStatement::CreateDomain,
            DdlStatement::CreateTrigger,
            DdlStatement::CreateRule,
            DdlStatement::CreateStatistics,
            DdlStatement::CreateSubscription,
            DdlStatement::AlterSubscription,
            DdlStatement::CreateForeignTable,
            DdlStatement::CreateOperatorClass,
            DdlStatement::CreateOperatorFamily,
            DdlStatement::AlterType,
            DdlStatement::AlterIndex,
            DdlStatement::AlterMaterializedView,
            DdlStatement::AlterTableAllInTablespace,
            DdlStatement::Other,
        ];
        for stmt in &statements {
            let results = assessor.classify(stmt);
            assert!(!results.is_empty(), "no result for {}", stmt.kind());
        }
    }
}
