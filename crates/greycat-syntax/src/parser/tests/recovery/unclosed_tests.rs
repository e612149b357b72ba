use crate::parser::tests::{expect_invalid, expect_recovered};
use indoc::indoc;

#[test]
fn missing_brace_at_eof() {
    insta::assert_snapshot!(expect_recovered("{ a;"), @r#"
    Program
      Block
        LCurly "{"
        ExprStmt
          NameRef
            Identifier "a"
          SemiColon ";"
    ---
    error at 0..4: missing closing `}`, found end of file (related: block started here at 0..1)
    "#);
}

#[test]
fn missing_paren_in_call() {
    insta::assert_snapshot!(expect_recovered("f(1, 2"), @r#"
    Program
      ExprStmt
        MemberExpr
          NameRef
            Identifier "f"
          CallArgs
            LParen "("
            Literal
              Number "1"
            Comma ","
            Literal
              Number "2"
    ---
    error at 1..6: missing closing `)`, found end of file (related: argument list started here at 1..2)
    "#);
}

#[test]
fn missing_brace_in_function_body() {
    let input = indoc! {r#"
    function f() {
      var x = 1;
    "#};

    insta::assert_snapshot!(expect_invalid(input), @"error at 13..28: missing closing `}`, found end of file (related: block started here at 13..14)");
}

#[test]
fn missing_bracket() {
    insta::assert_snapshot!(expect_invalid("[1, 2"), @"error at 0..5: missing closing `]`, found end of file (related: array literal started here at 0..1)");
}

#[test]
fn missing_paren_in_group() {
    insta::assert_snapshot!(expect_invalid("(a + b"), @"error at 0..6: missing closing `)`, found end of file (related: parenthesized expression started here at 0..1)");
}

#[test]
fn missing_closer_before_terminator() {
    insta::assert_snapshot!(expect_recovered("f(1; var y"), @r#"
    Program
      ExprStmt
        MemberExpr
          NameRef
            Identifier "f"
          CallArgs
            LParen "("
            Literal
              Number "1"
        SemiColon ";"
      VarStmt
        KwVar "var"
        Identifier "y"
    ---
    error at 3..4: expected `)` to close the argument list, found `;`
    "#);
}

#[test]
fn nested_unclosed_reports_innermost_once() {
    insta::assert_snapshot!(expect_invalid("{ if (a) { b"), @"error at 9..12: missing closing `}`, found end of file (related: block started here at 9..10)");
}

#[test]
fn unclosed_type_body() {
    insta::assert_snapshot!(expect_invalid("type T { x: int"), @"error at 7..15: missing closing `}`, found end of file (related: type body started here at 7..8)");
}
