//! Recursive-descent parser that consumes the lexer and builds `CutRecord`s.
//
//      List   ::= '[' ( Tuple ( ',' Tuple )* )? ']' EOF
//      Tuple  ::= '(' Atom ',' Atom ',' Array ')'
//      Array  ::= '[' ( Atom ( ',' Atom )* )? ']'

use std::iter::Peekable;

use super::lexer::{Lexer, Spanned, Token};
use crate::error::ParseError;
use crate::model::{CutAction, CutRecord};

/// Parse a full tuple-list string, e.g. `[(0xABC, 0, [0x11111111])]`.
pub fn parse_cut(src: &str) -> Result<Vec<CutRecord>, ParseError> {
    Parser::new(src).parse()
}

struct Parser<'a> {
    lex: Peekable<Lexer<'a>>,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            lex: Lexer::new(src).peekable(),
        }
    }

    fn parse(&mut self) -> Result<Vec<CutRecord>, ParseError> {
        self.expect(Token::LBracket, "'[' opening the cut list")?;

        let mut records = Vec::new();
        if !self.eat(&Token::RBracket)? {
            loop {
                let index = records.len();
                let record = self.parse_tuple().map_err(|e| ParseError::InTuple {
                    index,
                    error: Box::new(e),
                })?;
                records.push(record);

                if self.eat(&Token::RBracket)? {
                    break;
                }
                self.expect(Token::Comma, "',' or ']' after tuple")?;
            }
        }

        let end = self.next()?;
        if end.token != Token::Eof {
            return Err(ParseError::TrailingInput { offset: end.offset });
        }
        Ok(records)
    }

    fn parse_tuple(&mut self) -> Result<CutRecord, ParseError> {
        self.expect(Token::LParen, "'(' opening a tuple")?;
        let target = self.atom("facet address")?;
        self.expect(Token::Comma, "',' after facet address")?;
        let action = self.parse_action()?;
        self.expect(Token::Comma, "',' after action")?;
        let selectors = self.parse_array()?;
        self.expect(Token::RParen, "')' closing the tuple")?;

        Ok(CutRecord {
            target,
            action,
            selectors,
        })
    }

    fn parse_action(&mut self) -> Result<CutAction, ParseError> {
        let ordinal = self.atom("action ordinal")?;
        ordinal
            .parse::<u8>()
            .ok()
            .and_then(CutAction::from_ordinal)
            .ok_or(ParseError::UnknownAction(ordinal))
    }

    fn parse_array(&mut self) -> Result<Vec<String>, ParseError> {
        self.expect(Token::LBracket, "'[' opening the selector array")?;

        let mut selectors = Vec::new();
        if self.eat(&Token::RBracket)? {
            return Ok(selectors);
        }
        loop {
            selectors.push(self.atom("function selector")?);
            if self.eat(&Token::RBracket)? {
                return Ok(selectors);
            }
            self.expect(Token::Comma, "',' or ']' in selector array")?;
        }
    }

    // ── token helpers ──────────────────────────────────────────────────

    fn next(&mut self) -> Result<Spanned, ParseError> {
        match self.lex.next() {
            Some(res) => res,
            // The lexer always yields Eof before running dry.
            None => Err(ParseError::Unexpected {
                offset: 0,
                expected: "more input",
                found: Token::Eof.describe(),
            }),
        }
    }

    /// Consume the next token if it equals `token`.
    fn eat(&mut self, token: &Token) -> Result<bool, ParseError> {
        match self.lex.peek() {
            Some(Ok(next)) if next.token == *token => {
                self.lex.next();
                Ok(true)
            }
            Some(Err(_)) => self.next().map(|_| false),
            _ => Ok(false),
        }
    }

    fn expect(&mut self, token: Token, expected: &'static str) -> Result<(), ParseError> {
        let next = self.next()?;
        if next.token == token {
            Ok(())
        } else {
            Err(ParseError::Unexpected {
                offset: next.offset,
                expected,
                found: next.token.describe(),
            })
        }
    }

    fn atom(&mut self, expected: &'static str) -> Result<String, ParseError> {
        match self.next()? {
            Spanned {
                token: Token::Atom(text),
                ..
            } => Ok(text),
            other => Err(ParseError::Unexpected {
                offset: other.offset,
                expected,
                found: other.token.describe(),
            }),
        }
    }
}
