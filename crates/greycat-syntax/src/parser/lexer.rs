//! Lexer for GreyCat.
//!
//! Produces span-based tokens without storing text - text is sliced from source only when needed.
//!
//! ## Error handling
//!
//! The lexer coalesces consecutive error characters into single `Garbage` tokens rather
//! than producing one error per character. Scanning always resumes right after the
//! unrecognized run, so malformed input never stalls the lexer.
//!
//! ## Signed numbers
//!
//! The number pattern accepts a leading `-`. When the previous significant token ends an
//! operand (`a-1`, `f()-1`), the sign is split off into a `Minus` token so the grammar sees
//! a binary expression rather than two juxtaposed operands.

use logos::Logos;
use rowan::{TextRange, TextSize};
use serde::Serialize;
use std::ops::Range;

use super::cst::SyntaxKind;
use super::cst::token_sets::OPERAND_END;
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::line_index::{LineCol, serialize_range};

/// Zero-copy token: kind + span + start position, text retrieved via [`token_text`] when needed.
///
/// `line` and `column` are 1-based; columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: SyntaxKind,
    #[serde(serialize_with = "serialize_range")]
    pub span: TextRange,
    pub line: u32,
    pub column: u32,
}

impl Token {
    #[inline]
    pub fn new(kind: SyntaxKind, span: TextRange, line: u32, column: u32) -> Self {
        Self {
            kind,
            span,
            line,
            column,
        }
    }

    #[inline]
    pub fn text<'src>(&self, source: &'src str) -> &'src str {
        token_text(source, self)
    }
}

fn range_to_text_range(range: Range<usize>) -> TextRange {
    TextRange::new((range.start as u32).into(), (range.end as u32).into())
}

/// Tokenizes source into the significant tokens plus lexical diagnostics.
///
/// Whitespace and comments are dropped; unrecognized input is reported and dropped.
/// Positions of the remaining tokens are unaffected by what was dropped.
pub fn tokenize(source: &str) -> (Vec<Token>, Diagnostics) {
    let raw = lex(source);
    let diagnostics = lex_diagnostics(source, &raw);
    let tokens = raw.into_iter().filter(|t| !t.kind.is_skipped()).collect();
    (tokens, diagnostics)
}

/// Tokenizes source into a lossless vector of span-based tokens.
///
/// Post-processes the Logos output:
/// - Coalesces consecutive lexer errors into single `Garbage` tokens
/// - Splits a signed `Number` that directly follows an operand into `Minus` + `Number`
pub fn lex(source: &str) -> Vec<Token> {
    let mut pieces: Vec<(SyntaxKind, Range<usize>)> = Vec::new();
    let mut lexer = SyntaxKind::lexer(source);
    let mut error_start: Option<usize> = None;
    let mut last_significant: Option<SyntaxKind> = None;

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                if let Some(start) = error_start.take() {
                    let end = lexer.span().start;
                    pieces.push((SyntaxKind::Garbage, start..end));
                }

                let span = lexer.span();
                let signed = kind == SyntaxKind::Number && source[span.clone()].starts_with('-');
                if signed && last_significant.is_some_and(|k| OPERAND_END.contains(k)) {
                    pieces.push((SyntaxKind::Minus, span.start..span.start + 1));
                    pieces.push((SyntaxKind::Number, span.start + 1..span.end));
                } else {
                    pieces.push((kind, span));
                }

                if !kind.is_skipped() {
                    last_significant = Some(kind);
                }
            }
            Some(Err(())) => {
                if error_start.is_none() {
                    error_start = Some(lexer.span().start);
                }
            }
            None => {
                if let Some(start) = error_start.take() {
                    pieces.push((SyntaxKind::Garbage, start..source.len()));
                }
                break;
            }
        }
    }

    let mut tokens: Vec<Token> = pieces
        .into_iter()
        .map(|(kind, span)| Token::new(kind, range_to_text_range(span), 0, 0))
        .collect();
    stamp_positions(source, &mut tokens);
    tokens
}

/// Rebuilds a lossless stream from significant tokens by re-lexing the gaps between them.
///
/// `tokens` must come from `source` in source order, as [`tokenize`] returns them.
pub(crate) fn restore_trivia(source: &str, tokens: Vec<Token>) -> Vec<Token> {
    let mut restored = Vec::with_capacity(tokens.len() * 2);
    let mut cursor = 0;
    for token in tokens {
        let start = usize::from(token.span.start());
        debug_assert!(start >= cursor, "tokens out of source order");
        if start > cursor {
            lex_gap(source, cursor..start, &mut restored);
        }
        restored.push(token);
        cursor = usize::from(token.span.end());
    }
    if cursor < source.len() {
        lex_gap(source, cursor..source.len(), &mut restored);
    }
    stamp_positions(source, &mut restored);
    restored
}

fn lex_gap(source: &str, gap: Range<usize>, out: &mut Vec<Token>) {
    let offset = TextSize::from(gap.start as u32);
    out.extend(
        lex(&source[gap])
            .into_iter()
            .map(|t| Token::new(t.kind, t.span + offset, 0, 0)),
    );
}

/// Assigns line and column to contiguous tokens covering `source`.
fn stamp_positions(source: &str, tokens: &mut [Token]) {
    let mut position = LineCol::START;
    for token in tokens {
        token.line = position.line;
        token.column = position.column;
        position.advance(token_text(source, token));
    }
}

/// One diagnostic per lexical error token, in source order.
fn lex_diagnostics(source: &str, tokens: &[Token]) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();
    for token in tokens.iter().filter(|t| t.kind.is_lex_error()) {
        report_lex_error(&mut diagnostics, source, token);
    }
    diagnostics
}

/// Reports a single lexical error token. Returns the reported kind.
pub(crate) fn report_lex_error(
    diagnostics: &mut Diagnostics,
    source: &str,
    token: &Token,
) -> DiagnosticKind {
    let kind = match token.kind {
        SyntaxKind::MalformedString => DiagnosticKind::MalformedString,
        SyntaxKind::UnterminatedComment => DiagnosticKind::UnterminatedComment,
        _ => DiagnosticKind::UnrecognizedCharacter,
    };
    let builder = diagnostics.report(kind, token.span);
    if kind == DiagnosticKind::UnrecognizedCharacter {
        let text = token_text(source, token);
        builder.message(format!("`{}`", text.escape_debug())).emit();
    } else {
        builder.emit();
    }
    kind
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'src>(source: &'src str, token: &Token) -> &'src str {
    &source[std::ops::Range::<usize>::from(token.span)]
}
