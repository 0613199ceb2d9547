//! SQL parser wrapper

use crate::error::{SqlError, SqlResult};
use sqlparser::ast::Statement;
use sqlparser::dialect::PostgreSqlDialect;
use sqlparser::parser::Parser;

/// SQL parser that wraps sqlparser-rs with the PostgreSQL dialect.
pub struct SqlParser {
    dialect: PostgreSqlDialect,
}

impl SqlParser {
    /// Create a new PostgreSQL parser.
    pub fn new() -> Self {
        Self {
            dialect: PostgreSqlDialect {},
        }
    }

    /// Parse SQL into AST statements.
    pub fn parse(&self, sql: &str) -> SqlResult<Vec<Statement>> {
        let sql = sql.trim();
        if sql.is_empty() {
            return Err(SqlError::EmptySql);
        }
        Parser::parse_sql(&self.dialect, sql).map_err(|e| SqlError::ParseError(e.to_string()))
    }

    /// Parse SQL and return the first statement.
    pub fn parse_single(&self, sql: &str) -> SqlResult<Statement> {
        let stmts = self.parse(sql)?;
        stmts.into_iter().next().ok_or(SqlError::EmptySql)
    }
}

impl Default for SqlParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "parser_test.rs"]
mod tests;
