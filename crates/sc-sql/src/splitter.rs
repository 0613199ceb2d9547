//! Raw-script splitting.
//!
//! Breaks a script into individual statement texts on top-level semicolons,
//! tracking string literals, quoted identifiers, dollar-quoted bodies
//! (function and procedure definitions), and comments so a `;` inside any of
//! those never terminates a statement. A trailing statement without a
//! terminator is kept.

/// Split a SQL script into statement texts. Chunks that contain only
/// whitespace and comments are dropped.
pub fn split_script(script: &str) -> Vec<String> {
    let chars: Vec<char> = script.chars().collect();
    let mut statements = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            '-' if chars.get(i + 1) == Some(&'-') => {
                while i < chars.len() && chars[i] != '\n' {
                    i += 1;
                }
            }
            '/' if chars.get(i + 1) == Some(&'*') => {
                i += 2;
                while i < chars.len() && !(chars[i] == '*' && chars.get(i + 1) == Some(&'/')) {
                    i += 1;
                }
                i = (i + 2).min(chars.len());
            }
            '\'' => {
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
            }
            '"' => {
                i += 1;
                while i < chars.len() {
                    if chars[i] == '"' {
                        i += 1;
                        break;
                    }
                    i += 1;
                }
            }
            '$' => {
                if let Some(len) = dollar_span(&chars[i..]) {
                    i += len;
                } else {
                    i += 1;
                }
            }
            ';' => {
                push_statement(&mut statements, &chars[start..i]);
                i += 1;
                start = i;
            }
            _ => i += 1,
        }
    }
    push_statement(&mut statements, &chars[start..]);
    statements
}

fn push_statement(statements: &mut Vec<String>, chars: &[char]) {
    let text: String = chars.iter().collect();
    let text = text.trim();
    if !text.is_empty() && has_significant_content(text) {
        statements.push(text.to_string());
    }
}

/// Whether the text contains anything besides whitespace and comments.
fn has_significant_content(text: &str) -> bool {
    !crate::scan::tokenize(text).is_empty()
}

/// Length of a dollar-quoted span starting at `chars[0] == '$'`, if any.
fn dollar_span(chars: &[char]) -> Option<usize> {
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
    // Unterminated dollar quote: swallow the rest of the script.
    Some(chars.len())
}

#[cfg(test)]
#[path = "splitter_test.rs"]
mod tests;
