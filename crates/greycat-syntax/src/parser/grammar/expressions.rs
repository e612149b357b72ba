//! Expressions.
//!
//! Binary operators are not ranked: every operator family sits at one level and
//! chains to the right, so `a - b * c = d` is `a - (b * (c = d))`. Consumers that
//! need precedence re-associate the flat chain themselves.

use super::DelimitedList;
use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::{
    BINARY_OPS, EXPR_FIRST, IDENTIFIER_NAMES, POSTFIX_OPS, PREFIX_OPS, PRIMARY_FIRST,
};

const CALL_ARGS: DelimitedList = DelimitedList {
    open: SyntaxKind::LParen,
    close: SyntaxKind::RParen,
    first: EXPR_FIRST,
    expected_kind: DiagnosticKind::ExpectedExpression,
    expected: "an argument",
    unclosed: DiagnosticKind::UnclosedParen,
    construct: "argument list",
};

impl Parser<'_> {
    /// `unary ((op unary)* | is Type)`, nested to the right.
    ///
    /// Built iteratively: each operator retroactively opens a `BinaryExpr` at the
    /// checkpoint of its left operand, and all of them close at the end. The tree
    /// still deepens per operator, so each one is charged against recursion fuel.
    pub(crate) fn parse_expr(&mut self) {
        if !self.currently_is_one_of(EXPR_FIRST) {
            self.error_expected(DiagnosticKind::ExpectedExpression, "an expression");
            return;
        }
        if !self.enter_recursion() {
            return;
        }

        let mut open = 0;
        let mut checkpoint = self.checkpoint();
        loop {
            self.parse_unary();

            let kind = self.current();
            if BINARY_OPS.contains(kind) {
                // every operator nests the tree one level deeper
                if !self.enter_recursion() {
                    break;
                }
                self.start_node_at(checkpoint, SyntaxKind::BinaryExpr);
                open += 1;
                self.bump();
                if !self.currently_is_one_of(EXPR_FIRST) {
                    self.error_expected(
                        DiagnosticKind::ExpectedExpression,
                        "an operand after the operator",
                    );
                    break;
                }
                checkpoint = self.checkpoint();
                continue;
            }

            if kind == SyntaxKind::KwIs {
                self.start_node_at(checkpoint, SyntaxKind::IsExpr);
                self.bump();
                if !self.eat_token(SyntaxKind::Identifier) {
                    self.error_expected(DiagnosticKind::ExpectedTypeName, "a type name after `is`");
                }
                self.finish_node();
            }
            break;
        }

        for _ in 0..open {
            self.finish_node();
            self.exit_recursion();
        }
        self.exit_recursion();
    }

    /// `(! | + | -) postfix | postfix`
    ///
    /// A second prefix operator is reported but still nested, keeping every token in the tree.
    fn parse_unary(&mut self) {
        if !self.currently_is_one_of(PREFIX_OPS) {
            self.parse_postfix();
            return;
        }

        let mut open = 0;
        while self.currently_is_one_of(PREFIX_OPS) {
            if open == 1 {
                self.error(DiagnosticKind::ChainedPrefixOperator);
            }
            if !self.enter_recursion() {
                break;
            }
            self.start_node(SyntaxKind::PrefixExpr);
            self.bump();
            open += 1;
        }

        if self.currently_is_one_of(PRIMARY_FIRST) {
            self.parse_postfix();
        } else if !self.has_fatal_error() {
            self.error_expected(
                DiagnosticKind::ExpectedExpression,
                "an operand after the prefix operator",
            );
        }

        for _ in 0..open {
            self.finish_node();
            self.exit_recursion();
        }
    }

    /// `member (++ | --)?`
    fn parse_postfix(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_member();
        if self.currently_is_one_of(POSTFIX_OPS) {
            self.start_node_at(checkpoint, SyntaxKind::PostfixExpr);
            self.bump();
            self.finish_node();
        }
    }

    /// `new? primary accessor*`
    fn parse_member(&mut self) {
        let checkpoint = self.checkpoint();
        let mut wrapped = self.currently_is(SyntaxKind::KwNew);
        if wrapped {
            self.start_node(SyntaxKind::MemberExpr);
            self.bump();
        }

        self.parse_primary();

        loop {
            let accessor = match self.current() {
                SyntaxKind::Dot => SyntaxKind::FieldAccess,
                SyntaxKind::Colon if self.next_is(SyntaxKind::Colon) => SyntaxKind::StaticAccess,
                SyntaxKind::LBracket => SyntaxKind::IndexAccess,
                SyntaxKind::LParen => SyntaxKind::CallArgs,
                SyntaxKind::ExclMark => SyntaxKind::NonNullAssert,
                _ => break,
            };
            if !wrapped {
                self.start_node_at(checkpoint, SyntaxKind::MemberExpr);
                wrapped = true;
            }
            self.parse_accessor(accessor);
        }

        if wrapped {
            self.finish_node();
        }
    }

    fn parse_accessor(&mut self, kind: SyntaxKind) {
        self.start_node(kind);
        match kind {
            SyntaxKind::FieldAccess => {
                self.bump();
                self.parse_member_name("`.`");
            }
            SyntaxKind::StaticAccess => {
                self.bump();
                self.bump();
                self.parse_member_name("`::`");
            }
            SyntaxKind::IndexAccess => {
                self.push_delimiter(SyntaxKind::LBracket);
                self.bump();
                self.parse_expr();
                self.close_delimiter(
                    SyntaxKind::RBracket,
                    DiagnosticKind::UnclosedBracket,
                    "index",
                );
            }
            SyntaxKind::CallArgs => self.parse_delimited(&CALL_ARGS, |p| p.parse_expr()),
            _ => self.bump(),
        }
        self.finish_node();
    }

    /// Any identifier name, keywords included.
    fn parse_member_name(&mut self, after: &str) {
        if self.currently_is_one_of(IDENTIFIER_NAMES) {
            self.bump();
        } else {
            self.error_expected(
                DiagnosticKind::ExpectedIdentifier,
                &format!("a member name after {after}"),
            );
        }
    }
}
