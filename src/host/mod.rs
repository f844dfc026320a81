// Host Layer Module
//
// Row-oriented collaborators around the pure rewriter core. The core
// never performs I/O; everything file- and table-shaped lives here.

// Re-export public components
pub mod table;

// Export key types
pub use self::table::{TableError, TableOptions, TableSummary, process_table};
