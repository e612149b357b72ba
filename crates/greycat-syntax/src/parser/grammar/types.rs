use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;

impl Parser<'_> {
    /// `type (| type)*`
    pub(super) fn parse_type_list(&mut self) {
        self.start_node(SyntaxKind::TypeList);
        self.parse_type_name();
        while self.eat_token(SyntaxKind::Pipe) {
            self.parse_type_name();
        }
        self.finish_node();
    }

    /// `Name (< types (, types)* >)?`
    fn parse_type_name(&mut self) {
        if !self.currently_is(SyntaxKind::Identifier) {
            self.error_expected(DiagnosticKind::ExpectedTypeName, "a type name");
            return;
        }
        if !self.enter_recursion() {
            return;
        }

        self.start_node(SyntaxKind::TypeName);
        self.bump();
        if self.currently_is(SyntaxKind::Less) {
            self.parse_type_args();
        }
        self.finish_node();

        self.exit_recursion();
    }

    fn parse_type_args(&mut self) {
        self.start_node(SyntaxKind::TypeArgs);
        self.bump();
        self.parse_type_list();
        while self.eat_token(SyntaxKind::Comma) {
            self.parse_type_list();
        }
        self.expect(SyntaxKind::Greater, "`>` to close the type arguments");
        self.finish_node();
    }
}
