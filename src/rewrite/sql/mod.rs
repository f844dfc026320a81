// SQL Clause Handling Module
//
// This module pulls a flat SQL query apart: clause extraction, top-level
// conjunct splitting, and join-versus-filter classification.

// Re-export public components
pub mod extractor;
pub mod splitter;
pub mod classifier;

// Export key types
pub use self::classifier::{ColumnRef, Condition, JoinPredicate};
pub use self::classifier::{classify_condition, classify_conditions};
pub use self::extractor::extract_select_and_where;
pub use self::splitter::split_conditions;
