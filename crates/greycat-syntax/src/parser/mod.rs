//! Parser infrastructure for GreyCat.
//!
//! # Architecture
//!
//! The parser produces a lossless concrete syntax tree (CST) via Rowan's green tree builder:
//!
//! - Zero-copy lexing: tokens carry spans, text is sliced only when building tree nodes
//! - Trivia buffering: whitespace and comments are collected, then attached as leading trivia
//! - Checkpoint-based wrapping: binary, postfix and member expressions are opened retroactively
//! - Explicit recovery sets: each production knows where to resynchronize
//!
//! # Recovery Strategy
//!
//! The parser always produces a tree whose text equals the input. Recovery follows these rules:
//!
//! 1. Unexpected tokens are wrapped in `SyntaxKind::Error` nodes and consumed
//! 2. Missing expected tokens emit a diagnostic but don't consume (an ancestor may handle them)
//! 3. A block that runs into end of input reports one unclosed-delimiter error over its region
//! 4. Lexical errors stay in the tree as `Garbage`, `MalformedString` or `UnterminatedComment`
//!
//! Fuel exhaustion (exec fuel, recursion fuel) is fatal and returns an [`Error`](crate::Error).
//! So does the first error in strict mode, see [`parse_strict`].

pub mod ast;
pub mod cst;
pub mod lexer;

mod core;
mod grammar;
mod invariants;
mod printer;

#[cfg(test)]
mod tests;

pub use cst::{SyntaxKind, SyntaxNode, SyntaxToken};

pub use ast::{Expr, Item, Program, Stmt};

pub use core::{DEFAULT_RECURSION_FUEL, Parser};
pub use printer::CstPrinter;

use crate::PassResult;

/// Parse result containing the green tree.
///
/// The tree is always complete; diagnostics are returned separately.
/// Error nodes in the tree mark recovery points.
#[derive(Debug, Clone)]
pub struct Parse {
    cst: rowan::GreenNode,
}

impl Parse {
    pub(super) fn new(cst: rowan::GreenNode) -> Self {
        Self { cst }
    }

    pub fn as_cst(&self) -> &rowan::GreenNode {
        &self.cst
    }

    /// Creates a navigable view over the immutable green tree.
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.cst.clone())
    }

    pub fn program(&self) -> Program {
        Program::cast(self.syntax()).expect("parser always produces a Program root")
    }

    /// Indented CST dump without trivia.
    pub fn dump(&self) -> String {
        CstPrinter::new(&self.syntax()).dump()
    }
}

/// Error-tolerant entry point. Returns `Err` only on fuel exhaustion.
pub fn parse(source: &str) -> PassResult<Parse> {
    Parser::new(source).parse()
}

/// Stops at the first syntax error and returns it as [`Error::ParseFailed`](crate::Error::ParseFailed).
pub fn parse_strict(source: &str) -> PassResult<Parse> {
    Parser::new(source).with_recovery(false).parse()
}
