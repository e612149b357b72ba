use crate::parser::tests::expect_valid;
use indoc::indoc;

#[test]
fn if_else_if_else() {
    let input = indoc! {r#"
    if (a) { b; } else if (c) { d; } else { e; }
    "#};

    insta::assert_snapshot!(expect_valid(input), @r#"
    Program
      IfStmt
        KwIf "if"
        LParen "("
        NameRef
          Identifier "a"
        RParen ")"
        LogicBlock
          LCurly "{"
          ExprStmt
            NameRef
              Identifier "b"
            SemiColon ";"
          RCurly "}"
        ElseClause
          KwElse "else"
          IfStmt
            KwIf "if"
            LParen "("
            NameRef
              Identifier "c"
            RParen ")"
            LogicBlock
              LCurly "{"
              ExprStmt
                NameRef
                  Identifier "d"
                SemiColon ";"
              RCurly "}"
            ElseClause
              KwElse "else"
              LogicBlock
                LCurly "{"
                ExprStmt
                  NameRef
                    Identifier "e"
                  SemiColon ";"
                RCurly "}"
    "#);
}

#[test]
fn outermost_if_owns_semicolon() {
    insta::assert_snapshot!(expect_valid("if (a) {} else if (b) {};"), @r#"
    Program
      IfStmt
        KwIf "if"
        LParen "("
        NameRef
          Identifier "a"
        RParen ")"
        LogicBlock
          LCurly "{"
          RCurly "}"
        ElseClause
          KwElse "else"
          IfStmt
            KwIf "if"
            LParen "("
            NameRef
              Identifier "b"
            RParen ")"
            LogicBlock
              LCurly "{"
              RCurly "}"
        SemiColon ";"
    "#);
}

#[test]
fn if_body_is_logic_block_not_record() {
    insta::assert_snapshot!(expect_valid("if (p) { x = 1; y = 2; }"), @r#"
    Program
      IfStmt
        KwIf "if"
        LParen "("
        NameRef
          Identifier "p"
        RParen ")"
        LogicBlock
          LCurly "{"
          ExprStmt
            BinaryExpr
              NameRef
                Identifier "x"
              Eq "="
              Literal
                Number "1"
            SemiColon ";"
          ExprStmt
            BinaryExpr
              NameRef
                Identifier "y"
              Eq "="
              Literal
                Number "2"
            SemiColon ";"
          RCurly "}"
    "#);
}

#[test]
fn while_loop() {
    insta::assert_snapshot!(expect_valid("while (i < 10) { i++; }"), @r#"
    Program
      WhileStmt
        KwWhile "while"
        LParen "("
        BinaryExpr
          NameRef
            Identifier "i"
          Less "<"
          Literal
            Number "10"
        RParen ")"
        LogicBlock
          LCurly "{"
          ExprStmt
            PostfixExpr
              NameRef
                Identifier "i"
              PlusPlus "++"
            SemiColon ";"
          RCurly "}"
    "#);
}

#[test]
fn for_loop() {
    insta::assert_snapshot!(expect_valid("for (i = 0; i < n; i++) { sum += i; }"), @r#"
    Program
      ForStmt
        KwFor "for"
        LParen "("
        Identifier "i"
        Eq "="
        Literal
          Number "0"
        SemiColon ";"
        BinaryExpr
          NameRef
            Identifier "i"
          Less "<"
          NameRef
            Identifier "n"
        SemiColon ";"
        ExprStmt
          PostfixExpr
            NameRef
              Identifier "i"
            PlusPlus "++"
        RParen ")"
        LogicBlock
          LCurly "{"
          ExprStmt
            BinaryExpr
              NameRef
                Identifier "sum"
              PlusEq "+="
              NameRef
                Identifier "i"
            SemiColon ";"
          RCurly "}"
    "#);
}

#[test]
fn nested_blocks() {
    insta::assert_snapshot!(expect_valid("{ a; { b; }; }"), @r#"
    Program
      Block
        LCurly "{"
        ExprStmt
          NameRef
            Identifier "a"
          SemiColon ";"
        Block
          LCurly "{"
          ExprStmt
            NameRef
              Identifier "b"
            SemiColon ";"
          RCurly "}"
          SemiColon ";"
        RCurly "}"
    "#);
}

#[test]
fn record_at_statement_start() {
    insta::assert_snapshot!(expect_valid(r#"{ name: "x" };"#), @r#"
    Program
      ExprStmt
        RecordLiteral
          LCurly "{"
          RecordProp
            Identifier "name"
            Colon ":"
            Literal
              DoubleQuoted "\"x\""
          RCurly "}"
        SemiColon ";"
    "#);
}

#[test]
fn static_access_at_block_start_is_block() {
    insta::assert_snapshot!(expect_valid("{ Kind::value; }"), @r#"
    Program
      Block
        LCurly "{"
        ExprStmt
          MemberExpr
            NameRef
              Identifier "Kind"
            StaticAccess
              Colon ":"
              Colon ":"
              Identifier "value"
          SemiColon ";"
        RCurly "}"
    "#);
}

#[test]
fn var_forms() {
    let input = indoc! {r#"
    var a;
    var b: int;
    var c = 2;
    "#};

    insta::assert_snapshot!(expect_valid(input), @r#"
    Program
      VarStmt
        KwVar "var"
        Identifier "a"
        SemiColon ";"
      VarStmt
        KwVar "var"
        Identifier "b"
        Colon ":"
        TypeList
          TypeName
            Identifier "int"
        SemiColon ";"
      VarStmt
        KwVar "var"
        Identifier "c"
        Initializer
          Eq "="
          Literal
            Number "2"
        SemiColon ";"
    "#);
}

#[test]
fn return_in_function() {
    insta::assert_snapshot!(expect_valid("function f() { return null }"), @r#"
    Program
      FnDecl
        KwFunction "function"
        Identifier "f"
        ParamList
          LParen "("
          RParen ")"
        LogicBlock
          LCurly "{"
          ReturnStmt
            KwReturn "return"
            Literal
              KwNull "null"
          RCurly "}"
    "#);
}
