use super::*;

#[test]
fn test_split_simple_statements() {
    let stmts = split_script("CREATE TABLE a (id int);\nCREATE TABLE b (id int);");
    assert_eq!(stmts.len(), 2);
    assert!(stmts[0].starts_with("CREATE TABLE a"));
    assert!(stmts[1].starts_with("CREATE TABLE b"));
}

#[test]
fn test_split_keeps_trailing_unterminated_statement() {
    let stmts = split_script("CREATE TABLE a (id int);\nCREATE TABLE b (id int)");
    assert_eq!(stmts.len(), 2);
}

#[test]
fn test_split_ignores_semicolon_in_string_literal() {
    let stmts = split_script("INSERT INTO t VALUES ('a;b');SELECT 1;");
    assert_eq!(stmts.len(), 2);
    assert!(stmts[0].contains("'a;b'"));
}

#[test]
fn test_split_ignores_semicolon_in_dollar_body() {
    let script = "CREATE FUNCTION f() RETURNS int AS $$\nBEGIN\nRETURN 1;\nEND;\n$$ LANGUAGE plpgsql;\nSELECT 1;";
    let stmts = split_script(script);
    assert_eq!(stmts.len(), 2);
    assert!(stmts[0].contains("RETURN 1;"));
}

#[test]
fn test_split_tagged_dollar_quote() {
    let script = "CREATE FUNCTION f() RETURNS int AS $body$ SELECT 1; $body$ LANGUAGE sql;";
    let stmts = split_script(script);
    assert_eq!(stmts.len(), 1);
}

#[test]
fn test_split_drops_comment_only_chunks() {
    let stmts = split_script("-- a comment\n;\n/* block */;\nSELECT 1;");
    assert_eq!(stmts.len(), 1);
}

#[test]
fn test_split_empty_script() {
    assert!(split_script("").is_empty());
    assert!(split_script("  \n ").is_empty());
}
