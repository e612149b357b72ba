//! GreyCat syntax: lexer and error-tolerant CST parser.
//!
//! [`parse`] lexes and parses in one go. Tokens already produced by [`tokenize`]
//! can be parsed with [`Parser::from_tokens`].
//!
//! # Example
//!
//! ```
//! use greycat_syntax::parse;
//!
//! let source = "var x: int = 1;\nvar y = x +;";
//!
//! let (parse, diagnostics) = parse(source).expect("out of fuel");
//! assert_eq!(parse.syntax().text().to_string(), source);
//! eprintln!("{}", diagnostics.render(source));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod line_index;
pub mod parser;

/// Result type for passes that produce both output and diagnostics.
///
/// The pass returns its typed output alongside any diagnostics it collected.
/// Fatal errors (like fuel exhaustion) use the outer `Result`.
pub type PassResult<T> = std::result::Result<(T, Diagnostics), Error>;

pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter, Severity};
pub use line_index::{LineCol, LineIndex};
pub use parser::lexer::{Token, lex, tokenize};
pub use parser::{Parse, Parser, parse, parse_strict};

/// Errors that stop a parse.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Execution fuel exhausted (too many consumed tokens).
    #[error("execution limit exceeded")]
    ExecFuelExhausted,

    /// Recursion fuel exhausted (input nested too deeply).
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,

    /// Strict mode hit a syntax or lexical error.
    #[error("parsing failed with {} errors", .0.error_count())]
    ParseFailed(Diagnostics),
}

/// Result type for parser operations.
pub type Result<T> = std::result::Result<T, Error>;
