// Join Order Parsing Module
//
// This module turns a textual join order description like (a,((b,c),d))
// into a binary tree of table names.

// Re-export public components
pub mod lexer;
pub mod ast;
pub mod parser;

// Export key types
pub use self::ast::JoinOrderNode;
pub use self::lexer::Lexer;
pub use self::lexer::Token;
pub use self::parser::JoinOrderParser;
