// Join Order Lexer Implementation
//
// This module implements a lexer for join order strings like (a,((b,c),d)),
// breaking them into parentheses, commas and identifier tokens.

use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

/// Join order token types
#[derive(Debug, PartialEq, Clone)]
pub enum TokenType {
    // Punctuation
    LeftParen,      // (
    RightParen,     // )
    Comma,          // ,

    // Identifiers
    Ident(String),

    // Special
    Eof,
    Illegal(String),
}

/// A Token represents a lexical unit in a join order string
#[derive(Debug, Clone)]
pub struct Token {
    pub token_type: TokenType,
    pub literal: String,
    pub position: usize,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}({})", self.token_type, self.literal)
    }
}

/// Lexer for breaking a join order string into tokens
pub struct Lexer<'a> {
    input: Peekable<Chars<'a>>,
    position: usize,
    ch: Option<char>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer from a join order string
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Lexer {
            input: input.chars().peekable(),
            position: 0,
            ch: None,
        };
        lexer.ch = lexer.input.next();
        lexer
    }

    /// Advance to the next character in the input
    fn read_char(&mut self) {
        self.ch = self.input.next();
        self.position += 1;
    }

    /// Peek at the next character without advancing
    fn peek_char(&mut self) -> Option<char> {
        self.input.peek().copied()
    }

    /// Skip whitespace characters
    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.ch {
            if ch.is_whitespace() {
                self.read_char();
            } else {
                break;
            }
        }
    }

    /// Read an identifier starting at the current character
    fn read_identifier(&mut self) -> String {
        let mut identifier = String::new();

        // First character is already read in self.ch
        if let Some(ch) = self.ch {
            if is_letter(ch) {
                identifier.push(ch);
            }
        }

        // Read rest of identifier
        while let Some(next_ch) = self.peek_char() {
            if is_letter(next_ch) || next_ch.is_ascii_digit() {
                identifier.push(next_ch);
                self.read_char();
            } else {
                break;
            }
        }

        // Advance past the identifier
        self.read_char();

        identifier
    }

    /// Get the next token from the input
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let mut token = Token {
            token_type: TokenType::Eof,
            literal: String::new(),
            position: self.position,
        };

        match self.ch {
            Some(ch) => {
                token.literal = ch.to_string();

                match ch {
                    '(' => token.token_type = TokenType::LeftParen,
                    ')' => token.token_type = TokenType::RightParen,
                    ',' => token.token_type = TokenType::Comma,
                    _ => {
                        if is_letter(ch) {
                            let identifier = self.read_identifier();
                            token.literal = identifier.clone();
                            token.token_type = TokenType::Ident(identifier);
                            return token; // No need to read_char again
                        } else {
                            token.token_type = TokenType::Illegal(ch.to_string());
                        }
                    }
                }
            }
            None => {
                return token;
            }
        }

        self.read_char();
        token
    }
}

/// Check if a character can start an identifier
fn is_letter(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_'
}
