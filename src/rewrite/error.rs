use thiserror::Error;

/// Errors that can occur while rewriting one (join order, query) pair
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RewriteError {
    #[error("join order syntax error at position {position}: {message}")]
    JoinOrderSyntax {
        position: usize,
        message: String,
    },
    #[error("query is missing a recognizable SELECT ... FROM shape: {0}")]
    QueryShape(String),
    #[error("no join condition connects tables {left:?} with tables {right:?}")]
    NoConnectingPredicate {
        left: Vec<String>,
        right: Vec<String>,
    },
    #[error("unterminated {0} quote in WHERE clause")]
    QuoteImbalance(char),
}

/// Result type for rewrite operations
pub type RewriteResult<T> = Result<T, RewriteError>;
