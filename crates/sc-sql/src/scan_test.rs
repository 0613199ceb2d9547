use super::*;

#[test]
fn test_tokenize_words_and_punctuation() {
    let tokens = tokenize("CREATE TABLE public.t (id bigint);");
    assert_eq!(
        tokens,
        vec!["CREATE", "TABLE", "public", ".", "t", "(", "id", "bigint", ")", ";"]
    );
}

#[test]
fn test_tokenize_quoted_identifier_is_one_token() {
    let tokens = tokenize(r#"ALTER TABLE "My Table" DROP COLUMN c"#);
    assert_eq!(tokens[2], r#""My Table""#);
}

#[test]
fn test_tokenize_string_literal_is_one_token() {
    let tokens = tokenize("locale = 'en_US'");
    assert_eq!(tokens, vec!["locale", "=", "'en_US'"]);
}

#[test]
fn test_tokenize_skips_comments() {
    let tokens = tokenize("CREATE -- trailing\n/* block */ TABLE t");
    assert_eq!(tokens, vec!["CREATE", "TABLE", "t"]);
}

#[test]
fn test_tokenize_dollar_quoted_body() {
    let tokens = tokenize("AS $$ SELECT 1; $$ LANGUAGE sql");
    assert_eq!(tokens[0], "AS");
    assert!(tokens[1].starts_with("$$"));
    assert_eq!(tokens[2], "LANGUAGE");
}

#[test]
fn test_keyword_at_ignores_quoted() {
    let tokens = tokenize(r#""CREATE" TABLE"#);
    assert!(!keyword_at(&tokens, 0, "CREATE"));
    assert!(keyword_at(&tokens, 1, "TABLE"));
}

#[test]
fn test_normalize_ident_unquoted_lowercases() {
    assert_eq!(normalize_ident("Orders"), "orders");
    assert_eq!(normalize_ident("ORDERS"), "orders");
}

#[test]
fn test_normalize_ident_quoted_mixed_case_kept() {
    assert_eq!(normalize_ident("\"MyTable\""), "MyTable");
}

#[test]
fn test_normalize_ident_quoted_uniform_case_folds() {
    assert_eq!(normalize_ident("\"DEFAULT\""), "default");
    assert_eq!(normalize_ident("\"default\""), "default");
}

#[test]
fn test_qualified_name_at() {
    let tokens = tokenize("sales.orders rest");
    let (name, next) = qualified_name_at(&tokens, 0).unwrap();
    assert_eq!(name, QualifiedName::with_schema("sales", "orders"));
    assert_eq!(tokens[next], "rest");

    let tokens = tokenize("orders rest");
    let (name, next) = qualified_name_at(&tokens, 0).unwrap();
    assert_eq!(name, QualifiedName::new("orders"));
    assert_eq!(next, 1);
}

#[test]
fn test_paren_block_matches_nesting() {
    let tokens = tokenize("f (a, g(b, c), d) tail");
    let (inner, next) = paren_block(&tokens, 0).unwrap();
    assert_eq!(inner.first().unwrap(), "a");
    assert_eq!(inner.last().unwrap(), "d");
    assert_eq!(tokens[next], "tail");
}

#[test]
fn test_split_top_level_respects_parens() {
    let tokens = tokenize("a, g(b, c), d");
    let parts = split_top_level(&tokens);
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0], &tokens[0..1]);
}

#[test]
fn test_signed_number_at() {
    let tokens = tokenize("-42 7");
    assert_eq!(signed_number_at(&tokens, 0), Some((-42, 2)));
    assert_eq!(signed_number_at(&tokens, 2), Some((7, 3)));
    let tokens = tokenize("abc");
    assert_eq!(signed_number_at(&tokens, 0), None);
}
