// Joinfix - fixed join order SQL rewriter
//
// Rewrites flat equi-join SQL queries into explicit nested JOIN trees
// that follow a caller-supplied join order, so a downstream engine with
// join reordering disabled still receives correct ON clauses.

pub mod rewrite;
pub mod host;

// Re-export key items for convenient access
pub use rewrite::rewriter::rewrite_with_fixed_join_order;
pub use rewrite::error::RewriteError;
pub use rewrite::join_order::ast::JoinOrderNode;
pub use rewrite::join_order::parser::JoinOrderParser;
pub use host::table::{TableOptions, process_table};
