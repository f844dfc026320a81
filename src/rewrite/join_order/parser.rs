// Join Order Parser Implementation
//
// Recursive descent parser for the join order grammar:
//
//   node := '(' node ',' node ')' | IDENT

use std::iter::Peekable;
use std::vec::IntoIter;

use crate::rewrite::error::{RewriteError, RewriteResult};
use crate::rewrite::join_order::ast::JoinOrderNode;
use crate::rewrite::join_order::lexer::{Lexer, Token, TokenType};

/// Parser for constructing a join order tree from tokens
pub struct JoinOrderParser {
    tokens: Peekable<IntoIter<Token>>,
    current_token: Option<Token>,
}

impl JoinOrderParser {
    /// Create a new parser from a join order string
    pub fn new(input: &str) -> Self {
        let mut lexer = Lexer::new(input);
        let mut tokens = Vec::new();

        loop {
            let token = lexer.next_token();
            let is_eof = matches!(token.token_type, TokenType::Eof);
            tokens.push(token);
            if is_eof {
                break;
            }
        }

        let mut parser = JoinOrderParser {
            tokens: tokens.into_iter().peekable(),
            current_token: None,
        };

        parser.next_token();
        parser
    }

    /// Parse a complete join order, rejecting trailing tokens
    pub fn parse(&mut self) -> RewriteResult<JoinOrderNode> {
        let node = self.parse_node()?;

        match &self.current_token {
            Some(token) if matches!(token.token_type, TokenType::Eof) => Ok(node),
            Some(token) => Err(syntax_error(
                token.position,
                format!("unconsumed trailing token '{}'", token.literal),
            )),
            None => Ok(node),
        }
    }

    /// Parse one node: either a parenthesized pair or a single table name
    fn parse_node(&mut self) -> RewriteResult<JoinOrderNode> {
        match self.current_token.clone() {
            Some(token) => match token.token_type {
                TokenType::LeftParen => {
                    self.next_token();
                    let left = self.parse_node()?;
                    self.expect_token(TokenType::Comma)?;
                    let right = self.parse_node()?;
                    self.expect_token(TokenType::RightParen)?;
                    Ok(JoinOrderNode::Internal(Box::new(left), Box::new(right)))
                }
                TokenType::Ident(name) => {
                    self.next_token();
                    Ok(JoinOrderNode::Leaf(name))
                }
                TokenType::Eof => Err(syntax_error(
                    token.position,
                    "unexpected end of input".to_string(),
                )),
                _ => Err(syntax_error(
                    token.position,
                    format!("unexpected token '{}'", token.literal),
                )),
            },
            None => Err(syntax_error(0, "unexpected end of input".to_string())),
        }
    }

    /// Advance to the next token
    fn next_token(&mut self) -> Option<Token> {
        self.current_token = self.tokens.next();
        self.current_token.clone()
    }

    /// Check that the current token matches the expected type and consume it
    fn expect_token(&mut self, expected: TokenType) -> RewriteResult<Token> {
        match self.current_token.clone() {
            Some(token) if token.token_type == expected => {
                self.next_token();
                Ok(token)
            }
            Some(token) => Err(syntax_error(
                token.position,
                format!("expected {:?}, found '{}'", expected, token.literal),
            )),
            None => Err(syntax_error(0, "unexpected end of input".to_string())),
        }
    }
}

fn syntax_error(position: usize, message: String) -> RewriteError {
    RewriteError::JoinOrderSyntax { position, message }
}
