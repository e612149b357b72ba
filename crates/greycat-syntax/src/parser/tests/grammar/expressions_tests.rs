use crate::parser::tests::expect_valid;

#[test]
fn assignment_chains_to_the_right() {
    insta::assert_snapshot!(expect_valid("a = b = c"), @r#"
    Program
      ExprStmt
        BinaryExpr
          NameRef
            Identifier "a"
          Eq "="
          BinaryExpr
            NameRef
              Identifier "b"
            Eq "="
            NameRef
              Identifier "c"
    "#);
}

#[test]
fn operators_have_no_precedence() {
    insta::assert_snapshot!(expect_valid("a * b + c"), @r#"
    Program
      ExprStmt
        BinaryExpr
          NameRef
            Identifier "a"
          Asterisk "*"
          BinaryExpr
            NameRef
              Identifier "b"
            Plus "+"
            NameRef
              Identifier "c"
    "#);
}

#[test]
fn mixed_families_nest_right() {
    insta::assert_snapshot!(expect_valid("a - b * c = d"), @r#"
    Program
      ExprStmt
        BinaryExpr
          NameRef
            Identifier "a"
          Minus "-"
          BinaryExpr
            NameRef
              Identifier "b"
            Asterisk "*"
            BinaryExpr
              NameRef
                Identifier "c"
              Eq "="
              NameRef
                Identifier "d"
    "#);
}

#[test]
fn logical_operators() {
    insta::assert_snapshot!(expect_valid("a && b || !c"), @r#"
    Program
      ExprStmt
        BinaryExpr
          NameRef
            Identifier "a"
          AmpAmp "&&"
          BinaryExpr
            NameRef
              Identifier "b"
            PipePipe "||"
            PrefixExpr
              ExclMark "!"
              NameRef
                Identifier "c"
    "#);
}

#[test]
fn is_check() {
    insta::assert_snapshot!(expect_valid("x is Foo"), @r#"
    Program
      ExprStmt
        IsExpr
          NameRef
            Identifier "x"
          KwIs "is"
          Identifier "Foo"
    "#);
}

#[test]
fn is_check_ends_binary_chain() {
    insta::assert_snapshot!(expect_valid("a == b is T"), @r#"
    Program
      ExprStmt
        BinaryExpr
          NameRef
            Identifier "a"
          EqEq "=="
          IsExpr
            NameRef
              Identifier "b"
            KwIs "is"
            Identifier "T"
    "#);
}

#[test]
fn prefix_applies_to_member_chain() {
    insta::assert_snapshot!(expect_valid("!a.b()"), @r#"
    Program
      ExprStmt
        PrefixExpr
          ExclMark "!"
          MemberExpr
            NameRef
              Identifier "a"
            FieldAccess
              Dot "."
              Identifier "b"
            CallArgs
              LParen "("
              RParen ")"
    "#);
}

#[test]
fn negation_of_name() {
    insta::assert_snapshot!(expect_valid("-x"), @r#"
    Program
      ExprStmt
        PrefixExpr
          Minus "-"
          NameRef
            Identifier "x"
    "#);
}

#[test]
fn postfix_decrement() {
    insta::assert_snapshot!(expect_valid("i--"), @r#"
    Program
      ExprStmt
        PostfixExpr
          NameRef
            Identifier "i"
          MinusMinus "--"
    "#);
}

#[test]
fn member_accessors_in_any_order() {
    insta::assert_snapshot!(expect_valid("new Foo::bar(1, 2)[0].baz!"), @r#"
    Program
      ExprStmt
        MemberExpr
          KwNew "new"
          NameRef
            Identifier "Foo"
          StaticAccess
            Colon ":"
            Colon ":"
            Identifier "bar"
          CallArgs
            LParen "("
            Literal
              Number "1"
            Comma ","
            Literal
              Number "2"
            RParen ")"
          IndexAccess
            LBracket "["
            Literal
              Number "0"
            RBracket "]"
          FieldAccess
            Dot "."
            Identifier "baz"
          NonNullAssert
            ExclMark "!"
    "#);
}

#[test]
fn keywords_as_member_names() {
    insta::assert_snapshot!(expect_valid("a.type.null"), @r#"
    Program
      ExprStmt
        MemberExpr
          NameRef
            Identifier "a"
          FieldAccess
            Dot "."
            KwType "type"
          FieldAccess
            Dot "."
            KwNull "null"
    "#);
}

#[test]
fn call_with_trailing_comma() {
    insta::assert_snapshot!(expect_valid("f(a,)"), @r#"
    Program
      ExprStmt
        MemberExpr
          NameRef
            Identifier "f"
          CallArgs
            LParen "("
            NameRef
              Identifier "a"
            Comma ","
            RParen ")"
    "#);
}

#[test]
fn parenthesized_group() {
    insta::assert_snapshot!(expect_valid("(a + b) * c"), @r#"
    Program
      ExprStmt
        BinaryExpr
          ParenExpr
            LParen "("
            BinaryExpr
              NameRef
                Identifier "a"
              Plus "+"
              NameRef
                Identifier "b"
            RParen ")"
          Asterisk "*"
          NameRef
            Identifier "c"
    "#);
}

#[test]
fn signed_literal_at_start() {
    insta::assert_snapshot!(expect_valid("-1 + x"), @r#"
    Program
      ExprStmt
        BinaryExpr
          Literal
            Number "-1"
          Plus "+"
          NameRef
            Identifier "x"
    "#);
}

#[test]
fn subtraction_without_spaces() {
    insta::assert_snapshot!(expect_valid("a-1"), @r#"
    Program
      ExprStmt
        BinaryExpr
          NameRef
            Identifier "a"
          Minus "-"
          Literal
            Number "1"
    "#);
}

#[test]
fn long_chain_within_default_depth() {
    let input = vec!["x"; 200].join(" + ");
    let (parse, diagnostics) = crate::parser::parse(&input).unwrap();
    assert!(diagnostics.is_empty());
    assert_eq!(parse.syntax().text().to_string(), input);
}
