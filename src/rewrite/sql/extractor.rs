// SQL Clause Extraction
//
// This module splits one flat SQL statement into its SELECT list and
// WHERE body. The statement may arrive wrapped in quotes and may carry a
// trailing semicolon; both are stripped before matching.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::rewrite::error::{RewriteError, RewriteResult};

static SELECT_FROM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)^\s*SELECT\s+(.*?)\s+FROM\b(.*)$").expect("valid SELECT regex")
});

static WHERE_TAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)\bWHERE\b(.*)$").expect("valid WHERE regex"));

/// Split one statement into its SELECT list and WHERE body.
///
/// The WHERE body is empty when the statement has no WHERE clause.
/// ORDER BY / GROUP BY / LIMIT tails are not recognized and would be
/// swallowed into the WHERE body, so callers must not pass them.
pub fn extract_select_and_where(query: &str) -> RewriteResult<(String, String)> {
    let q = strip_trailing_semicolon(strip_outer_quotes(query));

    let captures = SELECT_FROM
        .captures(q)
        .ok_or_else(|| RewriteError::QueryShape(query.trim().to_string()))?;

    let select_list = captures[1].trim().to_string();
    let rest = captures[2].trim().to_string();

    let where_body = WHERE_TAIL
        .captures(&rest)
        .map(|c| c[1].trim().to_string())
        .unwrap_or_default();

    Ok((select_list, where_body))
}

/// Strip a consistent pair of wrapping quotes, if present
fn strip_outer_quotes(s: &str) -> &str {
    let s = s.trim();
    let bytes = s.as_bytes();
    if s.len() >= 2 {
        let first = bytes[0];
        let last = bytes[s.len() - 1];
        if first == last && (first == b'"' || first == b'\'') {
            return &s[1..s.len() - 1];
        }
    }
    s
}

/// Strip a trailing semicolon and surrounding whitespace
fn strip_trailing_semicolon(s: &str) -> &str {
    let s = s.trim();
    s.strip_suffix(';').map_or(s, str::trim_end)
}
