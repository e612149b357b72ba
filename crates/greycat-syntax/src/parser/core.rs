//! Parser state machine and low-level operations.

use std::cell::Cell;

use rowan::{Checkpoint, GreenNode, GreenNodeBuilder, TextRange, TextSize};

use super::Parse;
use super::cst::{SyntaxKind, TokenSet};
use super::invariants::{debug_assert_lossless, debug_assert_pairs};
use super::lexer::{Token, lex, report_lex_error, restore_trivia, token_text};
use crate::diagnostics::{DiagnosticKind, Diagnostics, Severity};
use crate::{Error, PassResult};

/// Nesting depth allowed when no explicit recursion fuel is configured.
pub const DEFAULT_RECURSION_FUEL: u32 = 512;

const DEBUG_FUEL: u32 = 256;

#[derive(Debug, Clone, Copy)]
pub(super) struct OpenDelimiter {
    pub kind: SyntaxKind,
    pub span: TextRange,
}

/// Recursive-descent parser over the lossless token stream.
///
/// Trivia and lexical error tokens are buffered and flushed when starting a new node,
/// so grammar rules never see them but the tree still contains them.
pub struct Parser<'src> {
    pub(super) source: &'src str,
    pub(super) tokens: Vec<Token>,
    pub(super) pos: usize,
    pub(super) trivia_buffer: Vec<Token>,
    pub(super) builder: GreenNodeBuilder<'static>,
    pub(super) diagnostics: Diagnostics,
    pub(super) depth: u32,
    pub(super) last_diagnostic_pos: Option<TextSize>,
    pub(super) delimiter_stack: Vec<OpenDelimiter>,
    pub(super) debug_fuel: Cell<u32>,
    recovery: bool,
    halted: bool,
    exec_fuel_remaining: Option<u32>,
    recursion_fuel_limit: Option<u32>,
    fatal_error: Option<Error>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        Self::with_tokens(source, lex(source))
    }

    /// Parses tokens produced by [`tokenize`](super::lexer::tokenize) on `source`.
    ///
    /// Whitespace, comments and unrecognized input dropped by the tokenizer are
    /// re-lexed from the gaps, so the tree stays lossless and lexical errors are
    /// reported exactly as [`Parser::new`] would report them.
    pub fn from_tokens(source: &'src str, tokens: Vec<Token>) -> Self {
        Self::with_tokens(source, restore_trivia(source, tokens))
    }

    fn with_tokens(source: &'src str, tokens: Vec<Token>) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            trivia_buffer: Vec::with_capacity(4),
            builder: GreenNodeBuilder::new(),
            diagnostics: Diagnostics::new(),
            depth: 0,
            last_diagnostic_pos: None,
            delimiter_stack: Vec::with_capacity(8),
            debug_fuel: Cell::new(DEBUG_FUEL),
            recovery: true,
            halted: false,
            exec_fuel_remaining: None,
            recursion_fuel_limit: Some(DEFAULT_RECURSION_FUEL),
            fatal_error: None,
        }
    }

    /// With recovery off, the first error-severity diagnostic stops the parse and
    /// [`Parser::parse`] returns [`Error::ParseFailed`].
    pub fn with_recovery(mut self, enabled: bool) -> Self {
        self.recovery = enabled;
        self
    }

    /// Upper bound on consumed tokens. `None` means unlimited.
    pub fn with_exec_fuel(mut self, limit: Option<u32>) -> Self {
        self.exec_fuel_remaining = limit;
        self
    }

    /// Upper bound on rule nesting. `None` means unlimited.
    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel_limit = limit;
        self
    }

    pub fn parse(mut self) -> PassResult<Parse> {
        self.parse_root();
        let (cst, diagnostics) = self.finish()?;
        Ok((Parse::new(cst), diagnostics))
    }

    fn finish(self) -> Result<(GreenNode, Diagnostics), Error> {
        if let Some(err) = self.fatal_error {
            return Err(err);
        }
        if self.halted {
            return Err(Error::ParseFailed(self.diagnostics));
        }
        let tree = self.builder.finish();
        debug_assert_lossless(self.source, &tree);
        Ok((tree, self.diagnostics))
    }

    pub(super) fn has_fatal_error(&self) -> bool {
        self.fatal_error.is_some()
    }

    pub(super) fn current(&mut self) -> SyntaxKind {
        self.skip_trivia_to_buffer();
        self.nth_raw(0)
    }

    fn reset_debug_fuel(&self) {
        self.debug_fuel.set(DEBUG_FUEL);
    }

    /// `Error` past the end of input.
    pub(super) fn nth_raw(&self, lookahead: usize) -> SyntaxKind {
        self.ensure_progress();
        self.tokens
            .get(self.pos + lookahead)
            .map_or(SyntaxKind::Error, |t| t.kind)
    }

    fn consume_exec_fuel(&mut self) {
        if let Some(ref mut remaining) = self.exec_fuel_remaining {
            if *remaining == 0 {
                if self.fatal_error.is_none() {
                    self.fatal_error = Some(Error::ExecFuelExhausted);
                }
                return;
            }
            *remaining -= 1;
        }
    }

    pub(super) fn current_span(&mut self) -> TextRange {
        self.skip_trivia_to_buffer();
        self.tokens
            .get(self.pos)
            .map_or_else(|| TextRange::empty(self.eof_offset()), |t| t.span)
    }

    pub(super) fn current_text(&mut self) -> &'src str {
        self.skip_trivia_to_buffer();
        self.tokens
            .get(self.pos)
            .map_or("", |t| token_text(self.source, t))
    }

    pub(super) fn eof_offset(&self) -> TextSize {
        TextSize::from(self.source.len() as u32)
    }

    pub(super) fn eof(&mut self) -> bool {
        self.skip_trivia_to_buffer();
        self.pos >= self.tokens.len()
    }

    pub(super) fn should_stop(&mut self) -> bool {
        self.eof() || self.has_fatal_error() || self.halted
    }

    pub(super) fn currently_is(&mut self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    pub(super) fn currently_is_one_of(&mut self, set: TokenSet) -> bool {
        set.contains(self.current())
    }

    /// LL(k) lookahead past trivia and lexical errors.
    pub(super) fn peek_nth(&mut self, n: usize) -> SyntaxKind {
        self.skip_trivia_to_buffer();
        self.ensure_progress();
        self.tokens[self.pos..]
            .iter()
            .filter(|t| !t.kind.is_skipped())
            .nth(n)
            .map_or(SyntaxKind::Error, |t| t.kind)
    }

    pub(super) fn next_is(&mut self, kind: SyntaxKind) -> bool {
        self.peek_nth(1) == kind
    }

    /// Moves skipped tokens into the buffer. Lexical errors are reported as they are passed.
    pub(super) fn skip_trivia_to_buffer(&mut self) {
        while self.pos < self.tokens.len() && self.tokens[self.pos].kind.is_skipped() {
            let token = self.tokens[self.pos];
            if token.kind.is_lex_error() && !self.halted {
                let kind = report_lex_error(&mut self.diagnostics, self.source, &token);
                self.after_report(kind);
            }
            self.trivia_buffer.push(token);
            self.pos += 1;
        }
    }

    pub(super) fn drain_trivia(&mut self) {
        for token in self.trivia_buffer.drain(..) {
            let text = token_text(self.source, &token);
            self.builder.token(token.kind.into(), text);
        }
    }

    pub(super) fn eat_trivia(&mut self) {
        self.skip_trivia_to_buffer();
        self.drain_trivia();
    }

    pub(super) fn start_node(&mut self, kind: SyntaxKind) {
        self.drain_trivia();
        self.builder.start_node(kind.into());
    }

    pub(super) fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) {
        self.builder.start_node_at(checkpoint, kind.into());
    }

    pub(super) fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    pub(super) fn checkpoint(&mut self) -> Checkpoint {
        self.drain_trivia();
        self.builder.checkpoint()
    }

    pub(super) fn bump(&mut self) {
        assert!(!self.eof(), "bump called at EOF");
        self.reset_debug_fuel();
        self.consume_exec_fuel();

        self.drain_trivia();

        let token = self.tokens[self.pos];
        let text = token_text(self.source, &token);
        self.builder.token(token.kind.into(), text);
        self.pos += 1;
    }

    pub(super) fn eat_token(&mut self, kind: SyntaxKind) -> bool {
        if self.currently_is(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// On mismatch: emit diagnostic but don't consume.
    pub(super) fn expect(&mut self, kind: SyntaxKind, what: &str) -> bool {
        if self.eat_token(kind) {
            return true;
        }
        self.report_here(
            DiagnosticKind::ExpectedToken,
            Some(what.to_string()),
            Some(kind.describe()),
        );
        false
    }

    pub(super) fn current_suppression_span(&mut self) -> TextRange {
        let eof = self.eof_offset();
        self.delimiter_stack
            .last()
            .map(|d| TextRange::new(d.span.start(), eof))
            .unwrap_or_else(|| self.current_span())
    }

    fn should_report(&mut self, pos: TextSize) -> bool {
        if self.halted || self.last_diagnostic_pos == Some(pos) {
            return false;
        }
        self.last_diagnostic_pos = Some(pos);
        true
    }

    /// Strict mode halts on the first error.
    fn after_report(&mut self, kind: DiagnosticKind) {
        if !self.recovery && kind.default_severity() == Severity::Error {
            self.halted = true;
        }
    }

    /// Token text in backticks, or `end of file`.
    fn found_description(&mut self) -> String {
        if self.eof() {
            return "end of file".to_string();
        }
        let kind = self.current();
        let text = self.current_text();
        if text.contains('\n') {
            kind.describe().to_string()
        } else {
            format!("`{}`", text)
        }
    }

    fn bump_as_error(&mut self) {
        if !self.eof() {
            self.start_node(SyntaxKind::Error);
            self.bump();
            self.finish_node();
        }
    }

    fn get_error_ranges(&mut self) -> Option<(TextRange, TextRange)> {
        let range = self.current_span();
        if !self.should_report(range.start()) {
            return None;
        }
        let suppression = self.current_suppression_span();
        Some((range, suppression))
    }

    fn report_here(
        &mut self,
        kind: DiagnosticKind,
        message: Option<String>,
        expected: Option<&str>,
    ) {
        let found = self.found_description();
        let Some((range, suppression)) = self.get_error_ranges() else {
            return;
        };
        let mut builder = self
            .diagnostics
            .report(kind, range)
            .suppression_range(suppression)
            .found(found);
        if let Some(message) = message {
            builder = builder.message(message);
        }
        if let Some(expected) = expected {
            builder = builder.expected(expected);
        }
        builder.emit();
        self.after_report(kind);
    }

    pub(super) fn error(&mut self, kind: DiagnosticKind) {
        self.report_here(kind, None, None);
    }

    pub(super) fn error_msg(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        self.report_here(kind, Some(message.into()), None);
    }

    /// Reports that `what` was required here, keeping the kind's own message.
    pub(super) fn error_expected(&mut self, kind: DiagnosticKind, what: &str) {
        self.report_here(kind, None, Some(what));
    }

    pub(super) fn error_and_bump(&mut self, kind: DiagnosticKind, what: &str) {
        self.error_expected(kind, what);
        self.bump_as_error();
    }

    /// Reports at an explicit range instead of the current token.
    pub(super) fn error_at(&mut self, kind: DiagnosticKind, range: TextRange) {
        if !self.should_report(range.start()) {
            return;
        }
        self.diagnostics.report(kind, range).emit();
        self.after_report(kind);
    }

    /// Non-fatal notice on the current token, which is then consumed as-is.
    pub(super) fn warn_and_bump(&mut self, kind: DiagnosticKind) {
        let range = self.current_span();
        if self.should_report(range.start()) {
            self.diagnostics.report(kind, range).emit();
            self.after_report(kind);
        }
        self.bump();
    }

    /// Reports, then wraps tokens up to the recovery set in an `Error` node.
    pub(super) fn error_recover(&mut self, kind: DiagnosticKind, what: &str, recovery: TokenSet) {
        if self.currently_is_one_of(recovery) || self.should_stop() {
            self.error_expected(kind, what);
            return;
        }

        self.start_node(SyntaxKind::Error);
        self.error_expected(kind, what);
        while !self.currently_is_one_of(recovery) && !self.should_stop() {
            self.bump();
        }
        self.finish_node();
    }

    pub(super) fn enter_recursion(&mut self) -> bool {
        if let Some(limit) = self.recursion_fuel_limit
            && self.depth >= limit
        {
            if self.fatal_error.is_none() {
                self.fatal_error = Some(Error::RecursionLimitExceeded);
            }
            return false;
        }
        self.depth += 1;
        self.reset_debug_fuel();
        true
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.reset_debug_fuel();
    }

    pub(super) fn push_delimiter(&mut self, kind: SyntaxKind) {
        let span = self.current_span();
        self.delimiter_stack.push(OpenDelimiter { kind, span });
    }

    /// Pops the innermost delimiter and consumes `close`.
    ///
    /// At end of input the whole unclosed region is reported; otherwise the
    /// missing closer is reported at the current token.
    pub(super) fn close_delimiter(
        &mut self,
        close: SyntaxKind,
        unclosed: DiagnosticKind,
        construct: &str,
    ) {
        let open = self.delimiter_stack.pop();
        debug_assert_pairs(open, close);
        if self.eat_token(close) {
            return;
        }
        match open {
            Some(open) if self.eof() => {
                self.error_unclosed_delimiter(unclosed, format!("{construct} started here"), open.span)
            }
            _ => {
                let what = format!("{} to close the {construct}", close.describe());
                self.expect(close, &what);
            }
        }
    }

    pub(super) fn error_unclosed_delimiter(
        &mut self,
        kind: DiagnosticKind,
        related_msg: impl Into<String>,
        open_range: TextRange,
    ) {
        let current = self.current_span();
        if !self.should_report(current.start()) {
            return;
        }
        // Use full range for easier downstream error suppression
        let full_range = TextRange::new(open_range.start(), current.end());
        self.diagnostics
            .report(kind, full_range)
            .found("end of file")
            .related_to(related_msg, open_range)
            .emit();
        self.after_report(kind);
    }

    pub(super) fn last_non_trivia_end(&self) -> Option<TextSize> {
        self.tokens[..self.pos]
            .iter()
            .rev()
            .find(|t| !t.kind.is_skipped())
            .map(|t| t.span.end())
    }
}
