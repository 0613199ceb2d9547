//! CREATE FUNCTION / CREATE PROCEDURE classification.

use sc_core::{CompatMatrix, Feature};
use sc_sql::ddl::CreateFunctionStmt;

use crate::result::StatementResult;

pub(crate) fn classify(stmt: &CreateFunctionStmt, matrix: &CompatMatrix) -> Vec<StatementResult> {
    if stmt.is_procedure && stmt.has_declared_return {
        return vec![StatementResult::new(Feature::unsupported(
            "create_function",
            "Procedure return type must be void",
        ))];
    }
    if let Some(language) = &stmt.language {
        if language != "sql" && language != "plpgsql" {
            return vec![StatementResult::new(Feature::unsupported(
                "create_function",
                "Invalid or untrusted language",
            ))];
        }
    }
    vec![StatementResult::new(matrix.feature_config("create_function"))]
}
