use super::DelimitedList;
use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::TokenSet;
use crate::parser::cst::token_sets::{
    ITEM_SYNC, STMT_FIRST, STRING_LITERALS, TYPE_MEMBER_FIRST, TYPE_MEMBER_SYNC,
};

const PARAMS: DelimitedList = DelimitedList {
    open: SyntaxKind::LParen,
    close: SyntaxKind::RParen,
    first: TokenSet::single(SyntaxKind::Identifier),
    expected_kind: DiagnosticKind::ExpectedIdentifier,
    expected: "a parameter name",
    unclosed: DiagnosticKind::UnclosedParen,
    construct: "parameter list",
};

impl Parser<'_> {
    /// `import* (item ;?)*`
    pub(crate) fn parse_root(&mut self) {
        self.start_node(SyntaxKind::Program);

        while !self.should_stop() && self.currently_is(SyntaxKind::KwImport) {
            self.parse_import();
        }

        while !self.should_stop() {
            if self.currently_is(SyntaxKind::SemiColon) {
                self.warn_and_bump(DiagnosticKind::RedundantSemicolon);
                continue;
            }
            self.parse_item();
            // one extra terminator is allowed after any item
            self.eat_token(SyntaxKind::SemiColon);
        }

        self.eat_trivia();
        self.finish_node();
    }

    fn parse_item(&mut self) {
        match self.current() {
            SyntaxKind::KwFunction => self.parse_fn_decl(),
            SyntaxKind::KwOpen | SyntaxKind::KwType => self.parse_type_decl(),
            SyntaxKind::KwImport => {
                self.error_msg(
                    DiagnosticKind::UnexpectedToken,
                    "imports must precede all other items",
                );
                self.parse_import();
            }
            kind if STMT_FIRST.contains(kind) => self.parse_statement(),
            _ => self.recover_item(),
        }
    }

    /// Skips junk at top level, always consuming at least the offending token.
    fn recover_item(&mut self) {
        self.start_node(SyntaxKind::Error);
        self.error_expected(
            DiagnosticKind::ExpectedStatement,
            "a declaration or statement",
        );
        self.bump();
        while !self.should_stop() && !self.currently_is_one_of(ITEM_SYNC) {
            self.bump();
        }
        self.finish_node();
    }

    /// `import "path" ;?`
    pub(super) fn parse_import(&mut self) {
        self.assert_current(SyntaxKind::KwImport);
        self.start_node(SyntaxKind::Import);
        self.bump();
        if self.currently_is_one_of(STRING_LITERALS) {
            self.bump();
        } else {
            self.error_expected(DiagnosticKind::ExpectedImportPath, "a string literal");
        }
        self.eat_token(SyntaxKind::SemiColon);
        self.finish_node();
    }

    /// `function name ( params ) (: types)? { ... }`
    pub(super) fn parse_fn_decl(&mut self) {
        self.assert_current(SyntaxKind::KwFunction);
        self.start_node(SyntaxKind::FnDecl);
        self.bump();
        self.expect_identifier("a function name");
        self.parse_fn_tail();
        self.finish_node();
    }

    /// Parameters, optional return type and body. Shared by declarations and literals.
    pub(super) fn parse_fn_tail(&mut self) {
        if self.currently_is(SyntaxKind::LParen) {
            self.start_node(SyntaxKind::ParamList);
            self.parse_delimited(&PARAMS, |p| p.parse_param());
            self.finish_node();
        } else {
            self.expect(SyntaxKind::LParen, "`(` to start the parameter list");
        }

        if self.eat_token(SyntaxKind::Colon) {
            self.parse_type_list();
        }

        self.parse_block(SyntaxKind::LogicBlock);
    }

    /// `name : types`
    fn parse_param(&mut self) {
        self.start_node(SyntaxKind::Param);
        self.bump();
        let has_colon = self.expect(SyntaxKind::Colon, "`:` after the parameter name");
        if has_colon || self.currently_is(SyntaxKind::Identifier) {
            self.parse_type_list();
        }
        self.finish_node();
    }

    /// `open? type Name { member* }`
    pub(super) fn parse_type_decl(&mut self) {
        self.start_node(SyntaxKind::TypeDecl);
        self.eat_token(SyntaxKind::KwOpen);
        self.expect(SyntaxKind::KwType, "`type`");
        self.expect_identifier("a type name");

        if !self.currently_is(SyntaxKind::LCurly) {
            self.expect(SyntaxKind::LCurly, "`{` to start the type body");
            self.finish_node();
            return;
        }

        self.push_delimiter(SyntaxKind::LCurly);
        self.bump();
        loop {
            if self.should_stop() {
                break;
            }
            match self.current() {
                SyntaxKind::RCurly => break,
                SyntaxKind::SemiColon => self.warn_and_bump(DiagnosticKind::RedundantSemicolon),
                kind if TYPE_MEMBER_FIRST.contains(kind) => self.parse_type_member(),
                _ => self.recover_type_member(),
            }
        }
        self.close_delimiter(
            SyntaxKind::RCurly,
            DiagnosticKind::UnclosedBlock,
            "type body",
        );
        self.finish_node();
    }

    /// `(private static? | static private?)? (function ... | attribute) ;?`
    fn parse_type_member(&mut self) {
        self.start_node(SyntaxKind::TypeMember);

        match self.current() {
            SyntaxKind::KwPrivate => {
                self.bump();
                self.eat_token(SyntaxKind::KwStatic);
            }
            SyntaxKind::KwStatic => {
                self.bump();
                self.eat_token(SyntaxKind::KwPrivate);
            }
            _ => {}
        }

        match self.current() {
            SyntaxKind::KwFunction => self.parse_fn_decl(),
            SyntaxKind::Identifier => self.parse_attr_decl(),
            _ => self.error_expected(
                DiagnosticKind::ExpectedIdentifier,
                "an attribute or function declaration",
            ),
        }

        self.eat_token(SyntaxKind::SemiColon);
        self.finish_node();
    }

    /// `name : types (= expr)?`
    fn parse_attr_decl(&mut self) {
        self.start_node(SyntaxKind::AttrDecl);
        self.bump();
        let has_colon = self.expect(SyntaxKind::Colon, "`:` after the attribute name");
        if has_colon || self.currently_is(SyntaxKind::Identifier) {
            self.parse_type_list();
        }
        if self.currently_is(SyntaxKind::Eq) {
            self.parse_initializer();
        }
        self.finish_node();
    }

    fn recover_type_member(&mut self) {
        self.start_node(SyntaxKind::Error);
        self.error_expected(
            DiagnosticKind::UnexpectedToken,
            "an attribute or function declaration",
        );
        self.bump();
        while !self.should_stop() && !self.currently_is_one_of(TYPE_MEMBER_SYNC) {
            self.bump();
        }
        self.eat_token(SyntaxKind::SemiColon);
        self.finish_node();
    }
}
