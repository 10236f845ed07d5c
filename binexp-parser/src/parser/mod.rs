pub mod ast;
pub mod error;
pub mod token;

use binexp_error::ErrorKind;
use crate::tokenizer::{tokenize_complete, Token};
use error::{kind, Error};
use std::ops::Range;

/// A high-level parser for prefix-notation expressions. This is the type to use to parse an
/// arbitrary piece of source text into an abstract syntax tree.
///
/// The parser holds the complete token stream and an index into it, which makes backtracking a
/// matter of restoring the index. Consuming the stream never mutates the tokens themselves.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
        }
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns the current token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the end of the stream.
    pub fn current_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor)
    }

    /// Returns the next token to be parsed, then advances the cursor. Whitespace tokens are
    /// skipped.
    ///
    /// Returns an EOF error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        while self.cursor < self.tokens.len() {
            let token = &self.tokens[self.cursor];
            self.cursor += 1;
            if token.is_whitespace() {
                continue;
            } else {
                // cloning is cheap: only Range<_> is cloned
                return Ok(token.clone());
            }
        }

        Err(self.error(kind::UnexpectedEof))
    }

    /// Speculatively parses a value from the given stream of tokens. This function can be used
    /// in the [`Parse::parse`] implementation of a type with the given [`Parser`], as it will
    /// automatically backtrack the cursor position if parsing fails.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse<T: Parse>(&mut self) -> Result<T, Error> {
        self.try_parse_with_fn(T::parse)
    }

    /// Speculatively parses a value from the given stream of tokens, using a custom parsing
    /// function to parse the value.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse_with_fn<T, F>(&mut self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Parser) -> Result<T, Error>,
    {
        let start = self.cursor;
        match f(self) {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Attempts to parse a value from the given stream of tokens. All the tokens must be consumed
    /// by the parser; if not, an error is returned.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        let value = T::parse(self)?;
        while self.current_token().map_or(false, Token::is_whitespace) {
            self.cursor += 1;
        }
        if self.cursor == self.tokens.len() {
            Ok(value)
        } else {
            Err(self.error(kind::ExpectedEof))
        }
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    ///
    /// This function should be used by consumers of the library.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use ast::{Binary, Expr, LitInt, LitSym, Literal};
    use crate::tokenizer::TokenKind;
    use token::op::{BinOp, BinOpKind};

    #[test]
    fn literal_int() {
        let mut parser = Parser::new("16");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Literal(Literal::Integer(LitInt {
            value: "16".to_string(),
            span: 0..2,
        })));
    }

    #[test]
    fn literal_symbol() {
        let mut parser = Parser::new("x");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Literal(Literal::Symbol(LitSym {
            name: "x".to_string(),
            span: 0..1,
        })));
    }

    #[test]
    fn simple_add() {
        let mut parser = Parser::new("+ 1 2");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Binary(Binary {
            op: BinOp {
                kind: BinOpKind::Add,
                span: 0..1,
            },
            lhs: Box::new(Expr::Literal(Literal::Integer(LitInt {
                value: "1".to_string(),
                span: 2..3,
            }))),
            rhs: Box::new(Expr::Literal(Literal::Integer(LitInt {
                value: "2".to_string(),
                span: 4..5,
            }))),
            span: 0..5,
        }));
    }

    #[test]
    fn nested_prefix() {
        let mut parser = Parser::new("* + 1 x 10");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Binary(Binary {
            op: BinOp {
                kind: BinOpKind::Mul,
                span: 0..1,
            },
            lhs: Box::new(Expr::Binary(Binary {
                op: BinOp {
                    kind: BinOpKind::Add,
                    span: 2..3,
                },
                lhs: Box::new(Expr::Literal(Literal::Integer(LitInt {
                    value: "1".to_string(),
                    span: 4..5,
                }))),
                rhs: Box::new(Expr::Literal(Literal::Symbol(LitSym {
                    name: "x".to_string(),
                    span: 6..7,
                }))),
                span: 2..7,
            })),
            rhs: Box::new(Expr::Literal(Literal::Integer(LitInt {
                value: "10".to_string(),
                span: 8..10,
            }))),
            span: 0..10,
        }));
    }

    #[test]
    fn extra_whitespace() {
        let mut parser = Parser::new("+   1\t2 ");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Binary(Binary {
            op: BinOp {
                kind: BinOpKind::Add,
                span: 0..1,
            },
            lhs: Box::new(Expr::Literal(Literal::Integer(LitInt {
                value: "1".to_string(),
                span: 4..5,
            }))),
            rhs: Box::new(Expr::Literal(Literal::Integer(LitInt {
                value: "2".to_string(),
                span: 6..7,
            }))),
            span: 0..7,
        }));
    }

    #[test]
    fn missing_operand() {
        let mut parser = Parser::new("+ 1");
        let err = parser.try_parse_full::<Expr>().unwrap_err();

        assert!(err.kind.as_any().downcast_ref::<kind::UnexpectedEof>().is_some());
        assert_eq!(err.spans, vec![3..3]);
    }

    #[test]
    fn missing_both_operands() {
        let mut parser = Parser::new("*");
        let err = parser.try_parse_full::<Expr>().unwrap_err();

        assert!(err.kind.as_any().downcast_ref::<kind::UnexpectedEof>().is_some());
    }

    #[test]
    fn empty_input() {
        let mut parser = Parser::new("");
        let err = parser.try_parse_full::<Expr>().unwrap_err();

        assert!(err.kind.as_any().downcast_ref::<kind::UnexpectedEof>().is_some());
        assert_eq!(err.spans, vec![0..0]);
    }

    #[test]
    fn trailing_tokens() {
        let mut parser = Parser::new("1 2");
        let err = parser.try_parse_full::<Expr>().unwrap_err();

        assert!(err.kind.as_any().downcast_ref::<kind::ExpectedEof>().is_some());
        assert_eq!(err.spans, vec![2..3]);
    }

    #[test]
    fn trailing_tokens_after_operator() {
        let mut parser = Parser::new("+ 1 2 3");
        let err = parser.try_parse_full::<Expr>().unwrap_err();

        assert!(err.kind.as_any().downcast_ref::<kind::ExpectedEof>().is_some());
        assert_eq!(err.spans, vec![6..7]);
    }

    #[test]
    fn unknown_token() {
        let mut parser = Parser::new("$");
        let err = parser.try_parse_full::<Expr>().unwrap_err();

        let kind = err.kind.as_any().downcast_ref::<kind::UnexpectedToken>().unwrap();
        assert_eq!(kind.found, TokenKind::Symbol);
    }
}
