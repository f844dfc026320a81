// WHERE Condition Splitter
//
// This module splits a WHERE body into its top-level AND conjuncts using a
// single left-to-right character scan. Splitting must never trigger inside
// parentheses or string literals, which is why this is a hand-written
// scanner and not a regex.

use crate::rewrite::error::{RewriteError, RewriteResult};

/// Split a WHERE body into top-level conjuncts.
///
/// An empty body yields no conjuncts. The scan tracks parenthesis depth
/// and single/double quote state; a bare AND only splits at depth zero
/// outside any quote. Fails when the scan ends inside an unterminated
/// string literal.
pub fn split_conditions(where_body: &str) -> RewriteResult<Vec<String>> {
    let trimmed = where_body.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let chars: Vec<char> = trimmed.chars().collect();
    let mut conditions = Vec::new();
    let mut buffer = String::new();
    let mut depth: i32 = 0;
    let mut in_single = false;
    let mut in_double = false;
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];

        // Quotes of the other kind are literal characters while one is open
        if ch == '\'' && !in_double {
            in_single = !in_single;
            buffer.push(ch);
            i += 1;
            continue;
        }
        if ch == '"' && !in_single {
            in_double = !in_double;
            buffer.push(ch);
            i += 1;
            continue;
        }

        if !in_single && !in_double {
            if ch == '(' {
                depth += 1;
                buffer.push(ch);
                i += 1;
                continue;
            }
            if ch == ')' {
                depth -= 1;
                buffer.push(ch);
                i += 1;
                continue;
            }
            if depth == 0 && is_and_keyword(&chars, i) {
                let condition = buffer.trim().to_string();
                if !condition.is_empty() {
                    conditions.push(condition);
                }
                buffer.clear();
                i += 3;
                while i < chars.len() && chars[i].is_whitespace() {
                    i += 1;
                }
                continue;
            }
        }

        buffer.push(ch);
        i += 1;
    }

    if in_single {
        return Err(RewriteError::QuoteImbalance('\''));
    }
    if in_double {
        return Err(RewriteError::QuoteImbalance('"'));
    }

    let last = buffer.trim().to_string();
    if !last.is_empty() {
        conditions.push(last);
    }

    Ok(conditions)
}

/// Check for the word AND (case-insensitive, whole word) at index i
fn is_and_keyword(chars: &[char], i: usize) -> bool {
    if i + 3 > chars.len() {
        return false;
    }
    let is_and = chars[i].eq_ignore_ascii_case(&'a')
        && chars[i + 1].eq_ignore_ascii_case(&'n')
        && chars[i + 2].eq_ignore_ascii_case(&'d');
    if !is_and {
        return false;
    }
    let bounded_before = i == 0 || !chars[i - 1].is_alphanumeric();
    let bounded_after = i + 3 == chars.len() || !chars[i + 3].is_alphanumeric();
    bounded_before && bounded_after
}
