//! Statement lowering: raw statement text to the DDL tree.
//!
//! sqlparser carries the weight for CREATE TABLE, where column and
//! constraint structure matters; the keyword recognizer covers the
//! PostgreSQL-specific families sqlparser has no grammar for. Anything
//! neither understands lowers to `DdlStatement::Other` — this path never
//! fails, matching the rule that classification must survive arbitrary
//! statements.

use sqlparser::ast::{
    ColumnDef as AstColumnDef, ColumnOption, CreateTable, Ident, ObjectName, OnCommit, Statement,
    TableConstraint as AstTableConstraint,
};

use crate::ddl::*;
use crate::parser::SqlParser;
use crate::recognize;
use crate::scan;

/// Lower one statement text into the DDL tree.
pub fn lower_statement(text: &str, parser: &SqlParser) -> DdlStatement {
    match parser.parse_single(text) {
        Ok(Statement::CreateTable(ct)) => lower_create_table(&ct, text),
        Ok(other) => recognize::recognize(text).unwrap_or_else(|| {
            log::debug!("no classification shape for parsed statement: {other}");
            DdlStatement::Other
        }),
        Err(_) => recognize::recognize(text).unwrap_or(DdlStatement::Other),
    }
}

fn lower_create_table(ct: &CreateTable, text: &str) -> DdlStatement {
    // CREATE TABLE ... AS query is a different statement shape with no
    // dedicated classification.
    if ct.query.is_some() {
        return DdlStatement::Other;
    }

    // Modifier clauses sqlparser has no structure for come from the token
    // scan; clauses it does parse come from the AST.
    let tokens = scan::tokenize(text);
    let flags = recognize::table_modifier_flags(&tokens);

    let on_commit = ct.on_commit.as_ref().map(|oc| match oc {
        OnCommit::Drop => OnCommitClause::Drop,
        OnCommit::DeleteRows => OnCommitClause::DeleteRows,
        OnCommit::PreserveRows => OnCommitClause::PreserveRows,
    });

    let columns = ct.columns.iter().map(lower_column).collect();
    let constraints = ct
        .constraints
        .iter()
        .filter_map(lower_table_constraint)
        .collect();

    DdlStatement::CreateTable(CreateTableStmt {
        name: Some(lower_object_name(&ct.name)),
        if_not_exists: ct.if_not_exists,
        temp: ct.temporary,
        of_type: flags.of_type,
        on_commit: on_commit.or(flags.on_commit),
        storage_options: flags.storage_options,
        partition_by: flags.partition_by,
        tablespace: flags.tablespace,
        inherits: flags.inherits,
        using_method: flags.using_method,
        like_clause: flags.like_clause,
        columns,
        constraints,
    })
}

fn lower_column(col: &AstColumnDef) -> ColumnDef {
    let constraints = col
        .options
        .iter()
        .map(|def| match &def.option {
            ColumnOption::NotNull => ColumnConstraint::NotNull,
            ColumnOption::Null => ColumnConstraint::Null,
            ColumnOption::Default(_) => ColumnConstraint::Default,
            ColumnOption::PrimaryKey(_) => ColumnConstraint::PrimaryKey {
                with_options: false,
            },
            ColumnOption::Unique(_) => ColumnConstraint::Unique {
                with_options: false,
            },
            ColumnOption::Check(_) => ColumnConstraint::Check,
            ColumnOption::Generated {
                generation_expr, ..
            } => {
                if generation_expr.is_some() {
                    ColumnConstraint::GeneratedStored
                } else {
                    ColumnConstraint::GeneratedIdentity
                }
            }
            _ => ColumnConstraint::Other,
        })
        .collect();
    ColumnDef {
        name: normalize_ast_ident(&col.name),
        type_name: col.data_type.to_string(),
        constraints,
    }
}

fn lower_table_constraint(c: &AstTableConstraint) -> Option<TableConstraint> {
    match c {
        AstTableConstraint::Check { .. } => Some(TableConstraint::Check),
        AstTableConstraint::Unique { .. } => Some(TableConstraint::Unique {
            with_options: false,
        }),
        AstTableConstraint::PrimaryKey { .. } => Some(TableConstraint::PrimaryKey {
            with_options: false,
        }),
        AstTableConstraint::ForeignKey { .. } => Some(TableConstraint::ForeignKey),
        _ => None,
    }
}

fn lower_object_name(name: &ObjectName) -> QualifiedName {
    let parts: Vec<String> = name
        .0
        .iter()
        .filter_map(|p| p.as_ident())
        .map(normalize_ast_ident)
        .collect();
    match parts.len() {
        0 => QualifiedName::new(String::new()),
        1 => QualifiedName::new(parts[0].clone()),
        // schema.table, or the last two parts of a longer chain
        n => QualifiedName::with_schema(parts[n - 2].clone(), parts[n - 1].clone()),
    }
}

/// Apply the same case rules the recognizer applies to raw tokens, so names
/// agree across both front ends (the dependency registry compares them
/// literally).
fn normalize_ast_ident(ident: &Ident) -> String {
    if ident.quote_style.is_some() {
        let inner = &ident.value;
        let all_upper = !inner.is_empty() && inner.chars().all(|c| c.is_uppercase());
        let all_lower = !inner.is_empty() && inner.chars().all(|c| c.is_lowercase());
        if all_upper || all_lower {
            inner.to_lowercase()
        } else {
            inner.clone()
        }
    } else {
        ident.value.to_lowercase()
    }
}

#[cfg(test)]
#[path = "lower_test.rs"]
mod tests;
