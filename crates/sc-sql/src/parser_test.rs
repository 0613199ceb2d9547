use super::*;

#[test]
fn test_parse_create_table() {
    let parser = SqlParser::new();
    let stmts = parser.parse("CREATE TABLE t (id bigint)").unwrap();
    assert_eq!(stmts.len(), 1);
    assert!(matches!(stmts[0], Statement::CreateTable(_)));
}

#[test]
fn test_parse_empty_is_error() {
    let parser = SqlParser::new();
    assert!(matches!(parser.parse("   "), Err(SqlError::EmptySql)));
}

#[test]
fn test_parse_invalid_is_error() {
    let parser = SqlParser::new();
    assert!(matches!(
        parser.parse("CREATE COLLATION c (provider = icu)"),
        Err(SqlError::ParseError(_))
    ));
}

#[test]
fn test_parse_single_returns_first() {
    let parser = SqlParser::new();
    let stmt = parser.parse_single("SELECT 1; SELECT 2").unwrap();
    assert!(matches!(stmt, Statement::Query(_)));
}
