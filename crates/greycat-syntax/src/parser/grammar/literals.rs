//! Primary expressions and the lookahead gates that choose between them.

use super::DelimitedList;
use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::{ARRAY_TYPE_NAMES, EXPR_FIRST, IDENTIFIER_NAMES, LITERALS};

const RECORD: DelimitedList = DelimitedList {
    open: SyntaxKind::LCurly,
    close: SyntaxKind::RCurly,
    first: IDENTIFIER_NAMES,
    expected_kind: DiagnosticKind::ExpectedIdentifier,
    expected: "a property name",
    unclosed: DiagnosticKind::UnclosedBlock,
    construct: "record literal",
};

const ARRAY: DelimitedList = DelimitedList {
    open: SyntaxKind::LBracket,
    close: SyntaxKind::RBracket,
    first: EXPR_FIRST,
    expected_kind: DiagnosticKind::ExpectedExpression,
    expected: "an array element",
    unclosed: DiagnosticKind::UnclosedBracket,
    construct: "array literal",
};

/// Scalar element types that turn `name[` into a typed array literal.
fn is_array_type_name(name: &str) -> bool {
    ARRAY_TYPE_NAMES.iter().any(|scalar| *scalar == name)
}

impl Parser<'_> {
    pub(super) fn parse_primary(&mut self) {
        match self.current() {
            SyntaxKind::Identifier => self.parse_identifier_primary(),
            SyntaxKind::Hash => self.parse_ref_literal(),
            SyntaxKind::LCurly => {
                self.start_node(SyntaxKind::RecordLiteral);
                self.parse_delimited(&RECORD, |p| p.parse_record_prop());
                self.finish_node();
            }
            SyntaxKind::LBracket => {
                self.start_node(SyntaxKind::ArrayLiteral);
                self.parse_delimited(&ARRAY, |p| p.parse_expr());
                self.finish_node();
            }
            SyntaxKind::LParen if self.at_fn_literal() => {
                self.start_node(SyntaxKind::FnLiteral);
                self.parse_fn_tail();
                self.finish_node();
            }
            SyntaxKind::LParen => self.parse_paren_expr(),
            kind if LITERALS.contains(kind) => {
                self.start_node(SyntaxKind::Literal);
                self.bump();
                self.finish_node();
            }
            _ => self.error_expected(DiagnosticKind::ExpectedExpression, "an expression"),
        }
    }

    /// `name`, `Type { props }`, or `scalar [ elements ]`.
    ///
    /// `name {` always opens a record; `name [` only opens an array when the name
    /// is a scalar type, otherwise the bracket is left for an index accessor.
    fn parse_identifier_primary(&mut self) {
        let kind = if self.next_is(SyntaxKind::LBracket) && is_array_type_name(self.current_text())
        {
            SyntaxKind::ArrayLiteral
        } else if self.next_is(SyntaxKind::LCurly) {
            SyntaxKind::RecordLiteral
        } else {
            SyntaxKind::NameRef
        };

        self.start_node(kind);
        self.bump();
        match kind {
            SyntaxKind::ArrayLiteral => self.parse_delimited(&ARRAY, |p| p.parse_expr()),
            SyntaxKind::RecordLiteral => self.parse_delimited(&RECORD, |p| p.parse_record_prop()),
            _ => {}
        }
        self.finish_node();
    }

    /// `#name`
    fn parse_ref_literal(&mut self) {
        self.start_node(SyntaxKind::RefLiteral);
        self.bump();
        self.expect_identifier("a name after `#`");
        self.finish_node();
    }

    /// `name : expr`
    fn parse_record_prop(&mut self) {
        self.start_node(SyntaxKind::RecordProp);
        self.bump();
        if self.expect(SyntaxKind::Colon, "`:` after the property name") {
            self.parse_expr();
        }
        self.finish_node();
    }

    /// `( expr )`
    fn parse_paren_expr(&mut self) {
        self.start_node(SyntaxKind::ParenExpr);
        self.push_delimiter(SyntaxKind::LParen);
        self.bump();
        self.parse_expr();
        self.close_delimiter(
            SyntaxKind::RParen,
            DiagnosticKind::UnclosedParen,
            "parenthesized expression",
        );
        self.finish_node();
    }

    /// `( )` or `( name : T` where `T` is not a second `:` starts a function literal.
    fn at_fn_literal(&mut self) -> bool {
        match self.peek_nth(1) {
            SyntaxKind::RParen => true,
            SyntaxKind::Identifier => {
                self.peek_nth(2) == SyntaxKind::Colon && self.peek_nth(3) != SyntaxKind::Colon
            }
            _ => false,
        }
    }

    /// `{ name :` (not `::`) at statement start is a record literal, not a block.
    pub(super) fn at_record_body(&mut self) -> bool {
        IDENTIFIER_NAMES.contains(self.peek_nth(1))
            && self.peek_nth(2) == SyntaxKind::Colon
            && self.peek_nth(3) != SyntaxKind::Colon
    }
}
