use crate::{
    parser::{
        error::{kind, Error},
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An integer literal, represented as a [`String`].
///
/// The literal text is kept verbatim so that serialized output reproduces the source exactly;
/// numeric conversion is deferred until a computation actually needs the value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LitInt {
    /// The value of the integer literal as a string.
    pub value: String,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl fmt::Display for LitInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A symbolic operand, such as `x` or `y`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LitSym {
    /// The name of the symbol.
    pub name: String,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl fmt::Display for LitSym {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A literal operand: an integer or a symbol. Literals are the leaves of the expression tree.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Literal {
    /// An integer literal, such as `0` or `144`.
    Integer(LitInt),

    /// A symbolic operand, such as `x`.
    Symbol(LitSym),
}

impl Literal {
    /// Returns the span of the literal.
    pub fn span(&self) -> Range<usize> {
        match self {
            Literal::Integer(int) => int.span.clone(),
            Literal::Symbol(sym) => sym.span.clone(),
        }
    }
}

impl Parse for Literal {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.next_token()?;
        match token.kind {
            TokenKind::Int => Ok(Self::Integer(LitInt {
                value: token.lexeme.to_owned(),
                span: token.span,
            })),
            TokenKind::Name => Ok(Self::Symbol(LitSym {
                name: token.lexeme.to_owned(),
                span: token.span,
            })),
            _ => Err(Error::new(vec![token.span], kind::UnexpectedToken {
                expected: &[
                    TokenKind::Int,
                    TokenKind::Name,
                ],
                found: token.kind,
            })),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Integer(int) => int.fmt(f),
            Literal::Symbol(sym) => sym.fmt(f),
        }
    }
}
