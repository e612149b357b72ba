//! Grammar productions for GreyCat.
//!
//! This module implements all `parse_*` methods as an extension of `Parser`.
//! Wrapper productions (binary, postfix, member) open their node retroactively
//! through a checkpoint, only once they know they contribute tokens.

mod expressions;
mod items;
mod literals;
mod statements;
mod types;

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::token_sets::LIST_STOP;
use crate::parser::cst::{SyntaxKind, TokenSet};

/// A comma-separated list between a pair of delimiters. Trailing comma allowed.
pub(super) struct DelimitedList {
    pub open: SyntaxKind,
    pub close: SyntaxKind,
    /// Tokens that start an element.
    pub first: TokenSet,
    pub expected_kind: DiagnosticKind,
    pub expected: &'static str,
    pub unclosed: DiagnosticKind,
    pub construct: &'static str,
}

impl Parser<'_> {
    /// `open (item (, item)* ,?)? close`
    ///
    /// Stray tokens are wrapped one by one in `Error` nodes. Tokens from
    /// [`LIST_STOP`] end the list early and are left for the enclosing rule.
    pub(super) fn parse_delimited(
        &mut self,
        list: &DelimitedList,
        mut parse_item: impl FnMut(&mut Self),
    ) {
        self.assert_current(list.open);
        self.push_delimiter(list.open);
        self.bump();

        loop {
            if self.should_stop() {
                break;
            }
            let kind = self.current();
            if kind == list.close {
                break;
            }
            if list.first.contains(kind) {
                parse_item(self);
                if self.eat_token(SyntaxKind::Comma) {
                    continue;
                }
                if self.currently_is_one_of(list.first) {
                    self.expect(SyntaxKind::Comma, "`,` between list elements");
                    continue;
                }
                break;
            }
            if kind != SyntaxKind::Comma && LIST_STOP.contains(kind) {
                break;
            }
            self.error_and_bump(list.expected_kind, list.expected);
        }

        self.close_delimiter(list.close, list.unclosed, list.construct);
    }

    /// Consumes an identifier or reports what it should have been.
    pub(super) fn expect_identifier(&mut self, what: &str) -> bool {
        if self.eat_token(SyntaxKind::Identifier) {
            return true;
        }
        self.error_expected(DiagnosticKind::ExpectedIdentifier, what);
        false
    }
}
