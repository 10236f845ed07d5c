//! Symbolic manipulation of prefix-notation binary expressions.
//!
//! This crate consumes the abstract syntax tree produced by [`binexp_parser`] and rewrites it
//! into an equivalent but simpler form. See the [`symbolic`] module for the expression
//! representation and the set of rewrite rules.

pub mod primitive;
pub mod symbolic;
