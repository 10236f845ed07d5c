//! The error kinds the parser can produce. All of them describe a structurally malformed
//! expression; the parser has no recovery path, so a single kind is reported per parse.

use ariadne::{Fmt, Label, Report, ReportKind};
use binexp_error::{ErrorKind, EXPR};
use crate::tokenizer::TokenKind;
use std::{any::Any, ops::Range};

/// Returns the offset the report should start at.
fn offset(spans: &[Range<usize>]) -> usize {
    spans.first().map_or(0, |span| span.start)
}

/// Builds one highlighted label per span, each with the given message.
fn labels<'a>(
    src_id: &'a str,
    spans: &[Range<usize>],
    message: String,
) -> Vec<Label<(&'a str, Range<usize>)>> {
    spans.iter()
        .map(|span| {
            Label::new((src_id, span.clone()))
                .with_message(&message)
                .with_color(EXPR)
        })
        .collect()
}

/// The token stream ended while an operand was still expected, i.e. an operator token was not
/// followed by two complete operand subtrees.
#[derive(Debug, Clone, PartialEq)]
pub struct UnexpectedEof;

impl ErrorKind for UnexpectedEof {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        Report::build(ReportKind::Error, src_id, offset(spans))
            .with_message("unexpected end of expression")
            .with_labels(labels(
                src_id,
                spans,
                format!("you might need to add another {} here", "operand".fg(EXPR)),
            ))
            .finish()
    }
}

/// The end of the token stream was expected, but there were tokens left over after the first
/// complete expression.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpectedEof;

impl ErrorKind for ExpectedEof {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        Report::build(ReportKind::Error, src_id, offset(spans))
            .with_message("expected end of expression")
            .with_labels(labels(
                src_id,
                spans,
                format!("the {} is already complete before this point", "expression".fg(EXPR)),
            ))
            .with_help("remove the extra tokens, or wrap them under another operator")
            .finish()
    }
}

/// An unexpected token was encountered.
#[derive(Debug, Clone, PartialEq)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

impl ErrorKind for UnexpectedToken {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        Report::build(ReportKind::Error, src_id, offset(spans))
            .with_message("unexpected token")
            .with_labels(labels(
                src_id,
                spans,
                format!(
                    "expected one of: {}",
                    self.expected
                        .iter()
                        .map(|kind| format!("{:?}", kind))
                        .collect::<Vec<_>>()
                        .join(", "),
                ),
            ))
            .with_help(format!("found {:?}", self.found))
            .finish()
    }
}
