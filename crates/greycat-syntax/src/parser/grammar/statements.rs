use rowan::TextRange;

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::{EXPR_FIRST, STMT_FIRST, STMT_SYNC, VAR_NAME_RECOVERY};

impl Parser<'_> {
    /// One statement, including its optional trailing `;`.
    pub(super) fn parse_statement(&mut self) {
        if !self.enter_recursion() {
            return;
        }
        match self.current() {
            SyntaxKind::LCurly if self.at_record_body() => self.parse_expr_stmt(true),
            SyntaxKind::LCurly => self.parse_block(SyntaxKind::Block),
            SyntaxKind::KwIf => self.parse_if_stmt(true),
            SyntaxKind::KwWhile => self.parse_while_stmt(),
            SyntaxKind::KwFor => self.parse_for_stmt(),
            SyntaxKind::KwVar => self.parse_var_stmt(),
            SyntaxKind::KwReturn => self.parse_return_stmt(),
            kind if EXPR_FIRST.contains(kind) => self.parse_expr_stmt(true),
            _ => self.recover_statement(),
        }
        self.exit_recursion();
    }

    /// `{ stmt+ }` for `Block`, `{ stmt* }` for `LogicBlock`.
    ///
    /// A block used as a statement also owns the `;` that follows it.
    pub(super) fn parse_block(&mut self, kind: SyntaxKind) {
        self.start_node(kind);

        if !self.currently_is(SyntaxKind::LCurly) {
            self.expect(SyntaxKind::LCurly, "`{` to start a block");
            self.finish_node();
            return;
        }

        let open = self.current_span();
        self.push_delimiter(SyntaxKind::LCurly);
        self.bump();
        let count = self.parse_statement_list();
        self.close_delimiter(SyntaxKind::RCurly, DiagnosticKind::UnclosedBlock, "block");

        if kind == SyntaxKind::Block {
            if count == 0 {
                let end = self.last_non_trivia_end().unwrap_or(open.end());
                self.error_at(DiagnosticKind::EmptyBlock, TextRange::new(open.start(), end));
            }
            self.eat_token(SyntaxKind::SemiColon);
        }

        self.finish_node();
    }

    /// Statements up to (not including) the closing `}`. Returns how many were parsed.
    fn parse_statement_list(&mut self) -> usize {
        let mut count = 0;
        loop {
            if self.should_stop() {
                break;
            }
            match self.current() {
                SyntaxKind::RCurly => break,
                SyntaxKind::SemiColon => self.warn_and_bump(DiagnosticKind::RedundantSemicolon),
                SyntaxKind::KwFunction => {
                    self.error_msg(
                        DiagnosticKind::UnexpectedToken,
                        "functions can only be declared at top level or in a type body",
                    );
                    self.parse_fn_decl();
                    count += 1;
                }
                SyntaxKind::KwOpen | SyntaxKind::KwType => {
                    self.error_msg(
                        DiagnosticKind::UnexpectedToken,
                        "types can only be declared at top level",
                    );
                    self.parse_type_decl();
                    count += 1;
                }
                SyntaxKind::KwImport => {
                    self.error_msg(
                        DiagnosticKind::UnexpectedToken,
                        "imports must precede all other items",
                    );
                    self.parse_import();
                }
                kind if STMT_FIRST.contains(kind) => {
                    self.parse_statement();
                    count += 1;
                }
                _ => self.recover_statement(),
            }
        }
        count
    }

    /// Wraps the offending token and everything up to the next statement boundary
    /// in an `Error` node. A `;` at the boundary is consumed.
    fn recover_statement(&mut self) {
        self.start_node(SyntaxKind::Error);
        self.error_expected(DiagnosticKind::ExpectedStatement, "a statement");
        self.bump();
        while !self.should_stop() && !self.currently_is_one_of(STMT_SYNC) {
            self.bump();
        }
        self.eat_token(SyntaxKind::SemiColon);
        self.finish_node();
    }

    /// `if ( expr ) { ... } (else (if ... | { ... }))?`
    ///
    /// Only the outermost `if` of an else-if chain owns the trailing `;`.
    fn parse_if_stmt(&mut self, terminated: bool) {
        self.assert_current(SyntaxKind::KwIf);
        self.start_node(SyntaxKind::IfStmt);
        self.bump();
        self.parse_condition("if");
        self.parse_block(SyntaxKind::LogicBlock);

        if self.currently_is(SyntaxKind::KwElse) {
            self.start_node(SyntaxKind::ElseClause);
            self.bump();
            if self.currently_is(SyntaxKind::KwIf) {
                if self.enter_recursion() {
                    self.parse_if_stmt(false);
                    self.exit_recursion();
                }
            } else {
                self.parse_block(SyntaxKind::LogicBlock);
            }
            self.finish_node();
        }

        if terminated {
            self.eat_token(SyntaxKind::SemiColon);
        }
        self.finish_node();
    }

    /// `while ( expr ) { ... }`
    fn parse_while_stmt(&mut self) {
        self.start_node(SyntaxKind::WhileStmt);
        self.bump();
        self.parse_condition("while");
        self.parse_block(SyntaxKind::LogicBlock);
        self.eat_token(SyntaxKind::SemiColon);
        self.finish_node();
    }

    fn parse_condition(&mut self, keyword: &str) {
        self.expect(SyntaxKind::LParen, &format!("`(` after `{keyword}`"));
        self.parse_expr();
        self.expect(SyntaxKind::RParen, "`)` after the condition");
    }

    /// `for ( name = expr ; expr ; expr ) { ... }`
    fn parse_for_stmt(&mut self) {
        self.start_node(SyntaxKind::ForStmt);
        self.bump();
        self.expect(SyntaxKind::LParen, "`(` after `for`");
        self.expect_identifier("a loop variable");
        self.expect(SyntaxKind::Eq, "`=` after the loop variable");
        self.parse_expr();
        self.expect(SyntaxKind::SemiColon, "`;` after the loop initializer");
        self.parse_expr();
        self.expect(SyntaxKind::SemiColon, "`;` after the loop condition");
        if self.currently_is_one_of(EXPR_FIRST) {
            self.parse_expr_stmt(false);
        } else {
            self.error_expected(DiagnosticKind::ExpectedExpression, "a loop update");
        }
        self.expect(SyntaxKind::RParen, "`)` to close the loop header");
        self.parse_block(SyntaxKind::LogicBlock);
        self.eat_token(SyntaxKind::SemiColon);
        self.finish_node();
    }

    /// `var name (: types)? (= expr)?`
    fn parse_var_stmt(&mut self) {
        self.start_node(SyntaxKind::VarStmt);
        self.bump();
        if !self.eat_token(SyntaxKind::Identifier) {
            self.error_recover(
                DiagnosticKind::ExpectedIdentifier,
                "a variable name",
                VAR_NAME_RECOVERY,
            );
        }
        if self.eat_token(SyntaxKind::Colon) {
            self.parse_type_list();
        }
        if self.currently_is(SyntaxKind::Eq) {
            self.parse_initializer();
        }
        self.eat_token(SyntaxKind::SemiColon);
        self.finish_node();
    }

    /// `= expr`
    pub(super) fn parse_initializer(&mut self) {
        self.assert_current(SyntaxKind::Eq);
        self.start_node(SyntaxKind::Initializer);
        self.bump();
        self.parse_expr();
        self.finish_node();
    }

    /// `return expr`
    fn parse_return_stmt(&mut self) {
        self.start_node(SyntaxKind::ReturnStmt);
        self.bump();
        self.parse_expr();
        self.eat_token(SyntaxKind::SemiColon);
        self.finish_node();
    }

    fn parse_expr_stmt(&mut self, terminated: bool) {
        self.start_node(SyntaxKind::ExprStmt);
        self.parse_expr();
        if terminated {
            self.eat_token(SyntaxKind::SemiColon);
        }
        self.finish_node();
    }
}
