//! sc-sql - SQL front end for shardcheck
//!
//! This crate turns a raw SQL script into the closed DDL statement tree the
//! assessment engine classifies: a splitter breaks the script into statement
//! texts, sqlparser (PostgreSQL dialect) parses what it can, and a keyword
//! recognizer covers the PostgreSQL-specific DDL sqlparser cannot represent.

pub mod ddl;
pub mod error;
pub mod lower;
pub mod parser;
pub mod recognize;
pub mod scan;
pub mod splitter;

pub use ddl::{DdlStatement, QualifiedName};
pub use error::SqlError;
pub use lower::lower_statement;
pub use parser::SqlParser;
pub use splitter::split_script;
