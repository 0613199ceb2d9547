//! GRANT classification.

use sc_core::{CompatMatrix, Feature};
use sc_sql::ddl::{GrantStmt, GrantTarget};

use crate::result::StatementResult;

pub(crate) fn classify(stmt: &GrantStmt, matrix: &CompatMatrix) -> Vec<StatementResult> {
    let feature = match stmt.target {
        GrantTarget::Domain => matrix.feature_config("grant_privilege_on_domain"),
        GrantTarget::Language => matrix.feature_config("grant_privilege_on_language"),
        GrantTarget::LargeObject => matrix.feature_config("grant_privilege_on_largeobject"),
        GrantTarget::Procedure => matrix.feature_config("grant_privilege_on_procedure"),
        GrantTarget::Routine => matrix.feature_config("grant_privilege_on_routine"),
        GrantTarget::Type => matrix.feature_config("grant_privilege_on_type"),
        GrantTarget::ForeignServer => matrix.feature_config("grant_privilege_on_foreign_server"),
        GrantTarget::ForeignDataWrapper => matrix.feature_config("grant_privilege_on_fdw"),
        GrantTarget::Other => Feature::default_supported(),
    };
    vec![StatementResult::new(feature)]
}
