// Condition Classifier
//
// This module partitions WHERE conjuncts into equi-join predicates
// (table.col = table.col) and plain filter predicates. Filters are kept
// verbatim; the rewriter never needs to understand their semantics.

use std::collections::HashSet;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

static EQUI_JOIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b([A-Za-z_]\w*)\.([A-Za-z_]\w*)\s*=\s*([A-Za-z_]\w*)\.([A-Za-z_]\w*)\b")
        .expect("valid equi-join regex")
});

/// A qualified column reference
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnRef {
    pub table: String,
    pub column: String,
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.table, self.column)
    }
}

/// An equality predicate linking two tables
#[derive(Debug, Clone, PartialEq)]
pub struct JoinPredicate {
    pub left: ColumnRef,
    pub right: ColumnRef,
    /// The conjunct exactly as written in the original WHERE clause
    pub text: String,
}

impl JoinPredicate {
    /// Whether this predicate bridges the two table sets, in either
    /// orientation
    pub fn connects(&self, left_tables: &HashSet<String>, right_tables: &HashSet<String>) -> bool {
        (left_tables.contains(&self.left.table) && right_tables.contains(&self.right.table))
            || (left_tables.contains(&self.right.table)
                && right_tables.contains(&self.left.table))
    }
}

/// One top-level WHERE conjunct
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// An equi-join predicate between two tables
    Join(JoinPredicate),
    /// Anything else, passed through verbatim
    Filter(String),
}

/// Classify one conjunct as a join predicate or a filter
pub fn classify_condition(text: &str) -> Condition {
    match EQUI_JOIN.captures(text) {
        Some(caps) => Condition::Join(JoinPredicate {
            left: ColumnRef {
                table: caps[1].to_string(),
                column: caps[2].to_string(),
            },
            right: ColumnRef {
                table: caps[3].to_string(),
                column: caps[4].to_string(),
            },
            text: text.trim().to_string(),
        }),
        None => Condition::Filter(text.trim().to_string()),
    }
}

/// Partition conjuncts into join predicates and filters, preserving the
/// original left-to-right order within each class
pub fn classify_conditions(conditions: &[String]) -> (Vec<JoinPredicate>, Vec<String>) {
    let mut joins = Vec::new();
    let mut filters = Vec::new();

    for condition in conditions {
        match classify_condition(condition) {
            Condition::Join(predicate) => joins.push(predicate),
            Condition::Filter(text) => filters.push(text),
        }
    }

    (joins, filters)
}
