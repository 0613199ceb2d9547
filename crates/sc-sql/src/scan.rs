//! Lightweight token scanner for the keyword recognizer.
//!
//! Tokens keep their source spelling: quoted identifiers retain their double
//! quotes, string literals their single quotes, so downstream code can
//! distinguish keywords from quoted names.

use crate::ddl::QualifiedName;

/// Split SQL text into tokens: words, quoted identifiers, string literals,
/// dollar-quoted bodies (kept as one token), punctuation, and operator runs.
pub fn tokenize(sql: &str) -> Vec<String> {
    let chars: Vec<char> = sql.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c.is_whitespace() {
            i += 1;
        } else if c == '-' && chars.get(i + 1) == Some(&'-') {
            // line comment
            while i < chars.len() && chars[i] != '\n' {
                i += 1;
            }
        } else if c == '/' && chars.get(i + 1) == Some(&'*') {
            // block comment
            i += 2;
            while i < chars.len() && !(chars[i] == '*' && chars.get(i + 1) == Some(&'/')) {
                i += 1;
            }
            i = (i + 2).min(chars.len());
        } else if c == '"' {
            let start = i;
            i += 1;
            while i < chars.len() {
                if chars[i] == '"' {
                    if chars.get(i + 1) == Some(&'"') {
                        i += 2;
                        continue;
                    }
                    i += 1;
                    break;
                }
                i += 1;
            }
            tokens.push(chars[start..i].iter().collect());
        } else if c == '\'' {
            let start = i;
            i += 1;
            while i < chars.len() {
                if chars[i] == '\'' {
                    if chars.get(i + 1) == Some(&'\'') {
                        i += 2;
                        continue;
                    }
                    i += 1;
                    break;
                }
                i += 1;
            }
            tokens.push(chars[start..i].iter().collect());
        } else if c == '$' {
            // dollar-quoted string: $tag$ ... $tag$
            if let Some(token_len) = dollar_quote_len(&chars[i..]) {
                tokens.push(chars[i..i + token_len].iter().collect());
                i += token_len;
            } else {
                tokens.push(c.to_string());
                i += 1;
            }
        } else if c.is_alphanumeric() || c == '_' {
            let start = i;
            while i < chars.len() && (chars[i].is_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            tokens.push(chars[start..i].iter().collect());
        } else if matches!(c, '(' | ')' | ',' | ';' | '.' | '=') {
            tokens.push(c.to_string());
            i += 1;
        } else {
            // operator characters (CREATE OPERATOR names and the like)
            let start = i;
            while i < chars.len()
                && !chars[i].is_whitespace()
                && !chars[i].is_alphanumeric()
                && !matches!(chars[i], '(' | ')' | ',' | ';' | '.' | '=' | '"' | '\'' | '_')
            {
                i += 1;
            }
            tokens.push(chars[start..i].iter().collect());
        }
    }
    tokens
}

/// Length of a dollar-quoted token starting at `chars[0] == '$'`, if the
/// opening delimiter is well-formed and the closing delimiter is found.
fn dollar_quote_len(chars: &[char]) -> Option<usize> {
    let mut j = 1;
    while j < chars.len() && (chars[j].is_alphanumeric() || chars[j] == '_') {
        j += 1;
    }
    if j >= chars.len() || chars[j] != '$' {
        return None;
    }
    let tag_len = j + 1;
    let mut k = tag_len;
    while k + tag_len <= chars.len() {
        if chars[k..k + tag_len] == chars[..tag_len] {
            return Some(k + tag_len);
        }
        k += 1;
    }
    None
}

/// Whether the token at `i` is the given bare keyword (case-insensitive;
/// quoted identifiers and literals never match).
pub fn keyword_at(tokens: &[String], i: usize, keyword: &str) -> bool {
    tokens
        .get(i)
        .is_some_and(|t| !t.starts_with('"') && !t.starts_with('\'') && t.eq_ignore_ascii_case(keyword))
}

/// Whether the tokens at `i..` start with the given keyword sequence.
pub fn keywords_at(tokens: &[String], i: usize, keywords: &[&str]) -> bool {
    keywords
        .iter()
        .enumerate()
        .all(|(k, kw)| keyword_at(tokens, i + k, kw))
}

/// First position at or after `from` where `keyword` appears.
pub fn find_keyword(tokens: &[String], from: usize, keyword: &str) -> Option<usize> {
    (from..tokens.len()).find(|&i| keyword_at(tokens, i, keyword))
}

/// First position at or after `from` where the keyword sequence appears.
pub fn find_keywords(tokens: &[String], from: usize, keywords: &[&str]) -> Option<usize> {
    (from..tokens.len()).find(|&i| keywords_at(tokens, i, keywords))
}

/// Normalize an identifier the way the target engine reports it: strip
/// double quotes, fold a uniformly-cased quoted identifier to lower case,
/// keep mixed case as written, and lower-case unquoted identifiers.
pub fn normalize_ident(raw: &str) -> String {
    if raw.len() < 2 {
        return raw.to_lowercase();
    }
    if raw.starts_with('"') && raw.ends_with('"') {
        let inner = &raw[1..raw.len() - 1];
        let inner = inner.replace("\"\"", "\"");
        let all_upper = !inner.is_empty() && inner.chars().all(|c| c.is_uppercase());
        let all_lower = !inner.is_empty() && inner.chars().all(|c| c.is_lowercase());
        if all_upper || all_lower {
            return inner.to_lowercase();
        }
        return inner;
    }
    raw.to_lowercase()
}

/// Read a possibly schema-qualified name at `i`; returns the parsed name and
/// the index just past it.
pub fn qualified_name_at(tokens: &[String], i: usize) -> Option<(QualifiedName, usize)> {
    let first = tokens.get(i)?;
    if is_punct(first) {
        return None;
    }
    let first = normalize_ident(first);
    if tokens.get(i + 1).map(String::as_str) == Some(".") {
        let second = tokens.get(i + 2)?;
        if is_punct(second) {
            return None;
        }
        return Some((
            QualifiedName::with_schema(first, normalize_ident(second)),
            i + 3,
        ));
    }
    Some((QualifiedName::new(first), i + 1))
}

fn is_punct(token: &str) -> bool {
    matches!(token, "(" | ")" | "," | ";" | "." | "=")
}

/// Extract the token range inside the first top-level parenthesis at or
/// after `from`: returns (inner tokens, index just past the closing paren).
pub fn paren_block(tokens: &[String], from: usize) -> Option<(&[String], usize)> {
    let open = (from..tokens.len()).find(|&i| tokens[i] == "(")?;
    let mut depth = 0usize;
    for i in open..tokens.len() {
        match tokens[i].as_str() {
            "(" => depth += 1,
            ")" => {
                depth -= 1;
                if depth == 0 {
                    return Some((&tokens[open + 1..i], i + 1));
                }
            }
            _ => {}
        }
    }
    None
}

/// Split a token slice on top-level commas.
pub fn split_top_level(tokens: &[String]) -> Vec<&[String]> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, token) in tokens.iter().enumerate() {
        match token.as_str() {
            "(" => depth += 1,
            ")" => depth = depth.saturating_sub(1),
            "," if depth == 0 => {
                parts.push(&tokens[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&tokens[start..]);
    parts
}

/// Parse an optionally signed integer starting at `i`; returns the value and
/// the index just past it.
pub fn signed_number_at(tokens: &[String], i: usize) -> Option<(i64, usize)> {
    match tokens.get(i).map(String::as_str) {
        Some("-") => {
            let n: i64 = tokens.get(i + 1)?.parse().ok()?;
            Some((n.wrapping_neg(), i + 2))
        }
        Some("+") => {
            let n: i64 = tokens.get(i + 1)?.parse().ok()?;
            Some((n, i + 2))
        }
        Some(tok) => {
            let n: i64 = tok.parse().ok()?;
            Some((n, i + 1))
        }
        None => None,
    }
}

#[cfg(test)]
#[path = "scan_test.rs"]
mod tests;
