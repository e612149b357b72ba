//! Debug-time checks on parser state. Kept out of coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use rowan::GreenNode;

use super::core::{OpenDelimiter, Parser};
use super::cst::{SyntaxKind, SyntaxNode};

impl Parser<'_> {
    /// Every lookahead spends one unit; consuming a token refills it.
    #[inline]
    pub(super) fn ensure_progress(&self) {
        let left = self.debug_fuel.get();
        assert!(
            left != 0,
            "grammar loop stopped consuming input at token index {}",
            self.pos
        );
        self.debug_fuel.set(left - 1);
    }

    /// Entry check for rules whose caller has already matched the leading token.
    #[inline]
    pub(super) fn assert_current(&mut self, expected: SyntaxKind) {
        let found = self.current();
        assert!(
            found == expected,
            "rule entered on {found:?}; the caller was meant to check for {expected:?}"
        );
    }
}

/// The popped delimiter must be the opener of `close`.
#[inline]
pub(super) fn debug_assert_pairs(open: Option<OpenDelimiter>, close: SyntaxKind) {
    debug_assert!(
        open.is_none_or(|o| matches!(
            (o.kind, close),
            (SyntaxKind::LCurly, SyntaxKind::RCurly)
                | (SyntaxKind::LParen, SyntaxKind::RParen)
                | (SyntaxKind::LBracket, SyntaxKind::RBracket)
        )),
        "{close:?} closes a delimiter that was not opened with its partner"
    );
}

/// A finished tree spells out the source byte for byte, trivia and garbage included.
pub(super) fn debug_assert_lossless(source: &str, tree: &GreenNode) {
    if cfg!(debug_assertions) {
        let text = SyntaxNode::new_root(tree.clone()).text().to_string();
        assert!(text == source, "tree text diverges from source:\n{text:?}\n{source:?}");
    }
}
