// Query Rewrite Module
//
// This module implements the fixed-join-order rewriter: a join order
// parser, SQL clause handling, and tree-directed code generation that
// together turn a flat equi-join query into an explicit nested JOIN tree.

// Re-export public components
pub mod join_order;
pub mod sql;
pub mod generator;
pub mod error;
pub mod rewriter;

// Export key types
pub use self::error::{RewriteError, RewriteResult};
pub use self::rewriter::rewrite_with_fixed_join_order;
