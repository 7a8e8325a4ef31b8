//! Very small hand-written lexer for the tuple-list string found in
//! `returns.cut.value`.
//!
//! It only breaks the string into `Token`s; the cut parser decides what
//! they mean.
//
//  Lexical items:
//
//      Atom     ::= [A-Za-z0-9_]+     (addresses, ordinals, selectors)
//      Symbols  ::= '[' | ']' | '(' | ')' | ','
//      Whitespace between tokens is discarded.
//
//  Anything else is rejected, so no token can carry quotes, semicolons
//  or line breaks into the generated source.

use std::iter::Peekable;
use std::str::CharIndices;

use crate::error::ParseError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    LBracket, // '['
    RBracket, // ']'
    LParen,   // '('
    RParen,   // ')'
    Comma,    // ','
    Atom(String),
    Eof,
}

impl Token {
    /// Short human description for error messages.
    pub fn describe(&self) -> String {
        match self {
            Token::LBracket => "'['".into(),
            Token::RBracket => "']'".into(),
            Token::LParen => "'('".into(),
            Token::RParen => "')'".into(),
            Token::Comma => "','".into(),
            Token::Atom(text) => format!("`{text}`"),
            Token::Eof => "end of input".into(),
        }
    }
}

/// A token plus the byte offset where it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned {
    pub offset: usize,
    pub token: Token,
}

#[derive(Clone)]
pub struct Lexer<'a> {
    src: &'a str,
    chars: Peekable<CharIndices<'a>>,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            chars: src.char_indices().peekable(),
            finished: false,
        }
    }

    fn is_atom_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '_'
    }

    fn skip_whitespace(&mut self) {
        while let Some(&(_, c)) = self.chars.peek() {
            if c.is_whitespace() {
                self.chars.next();
            } else {
                break;
            }
        }
    }

    fn read_atom(&mut self, start: usize) -> String {
        let mut end = self.src.len();
        while let Some(&(i, c)) = self.chars.peek() {
            if Self::is_atom_char(c) {
                self.chars.next();
            } else {
                end = i;
                break;
            }
        }
        self.src[start..end].to_string()
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Spanned, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        self.skip_whitespace();

        let (offset, ch) = match self.chars.next() {
            Some(next) => next,
            None => {
                self.finished = true;
                return Some(Ok(Spanned {
                    offset: self.src.len(),
                    token: Token::Eof,
                }));
            }
        };

        let token = match ch {
            '[' => Token::LBracket,
            ']' => Token::RBracket,
            '(' => Token::LParen,
            ')' => Token::RParen,
            ',' => Token::Comma,
            c if Self::is_atom_char(c) => Token::Atom(self.read_atom(offset)),
            ch => {
                self.finished = true;
                return Some(Err(ParseError::UnexpectedChar { offset, ch }));
            }
        };

        Some(Ok(Spanned { offset, token }))
    }
}
