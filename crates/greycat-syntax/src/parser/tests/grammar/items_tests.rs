use crate::parser::tests::expect_valid;
use indoc::indoc;

#[test]
fn empty_input() {
    insta::assert_snapshot!(expect_valid(""), @"Program");
}

#[test]
fn imports_then_items() {
    let input = indoc! {r#"
    import "std/core";
    import 'lib'
    var x = 1;
    "#};

    insta::assert_snapshot!(expect_valid(input), @r#"
    Program
      Import
        KwImport "import"
        DoubleQuoted "\"std/core\""
        SemiColon ";"
      Import
        KwImport "import"
        SingleQuoted "'lib'"
      VarStmt
        KwVar "var"
        Identifier "x"
        Initializer
          Eq "="
          Literal
            Number "1"
        SemiColon ";"
    "#);
}

#[test]
fn function_declaration() {
    let input = indoc! {r#"
    function add(a: int, b: int): int { return a + b; }
    "#};

    insta::assert_snapshot!(expect_valid(input), @r#"
    Program
      FnDecl
        KwFunction "function"
        Identifier "add"
        ParamList
          LParen "("
          Param
            Identifier "a"
            Colon ":"
            TypeList
              TypeName
                Identifier "int"
          Comma ","
          Param
            Identifier "b"
            Colon ":"
            TypeList
              TypeName
                Identifier "int"
          RParen ")"
        Colon ":"
        TypeList
          TypeName
            Identifier "int"
        LogicBlock
          LCurly "{"
          ReturnStmt
            KwReturn "return"
            BinaryExpr
              NameRef
                Identifier "a"
              Plus "+"
              NameRef
                Identifier "b"
            SemiColon ";"
          RCurly "}"
    "#);
}

#[test]
fn function_with_trailing_comma_and_empty_body() {
    insta::assert_snapshot!(expect_valid("function f(a: int,) {}"), @r#"
    Program
      FnDecl
        KwFunction "function"
        Identifier "f"
        ParamList
          LParen "("
          Param
            Identifier "a"
            Colon ":"
            TypeList
              TypeName
                Identifier "int"
          Comma ","
          RParen ")"
        LogicBlock
          LCurly "{"
          RCurly "}"
    "#);
}

#[test]
fn type_declaration() {
    let input = indoc! {r#"
    open type Point {
      x: int;
      private static y: float = 0.0;
      static private function norm(): float { return 1.0; }
    }
    "#};

    insta::assert_snapshot!(expect_valid(input), @r#"
    Program
      TypeDecl
        KwOpen "open"
        KwType "type"
        Identifier "Point"
        LCurly "{"
        TypeMember
          AttrDecl
            Identifier "x"
            Colon ":"
            TypeList
              TypeName
                Identifier "int"
          SemiColon ";"
        TypeMember
          KwPrivate "private"
          KwStatic "static"
          AttrDecl
            Identifier "y"
            Colon ":"
            TypeList
              TypeName
                Identifier "float"
            Initializer
              Eq "="
              Literal
                Number "0.0"
          SemiColon ";"
        TypeMember
          KwStatic "static"
          KwPrivate "private"
          FnDecl
            KwFunction "function"
            Identifier "norm"
            ParamList
              LParen "("
              RParen ")"
            Colon ":"
            TypeList
              TypeName
                Identifier "float"
            LogicBlock
              LCurly "{"
              ReturnStmt
                KwReturn "return"
                Literal
                  Number "1.0"
                SemiColon ";"
              RCurly "}"
        RCurly "}"
    "#);
}

#[test]
fn empty_type_body() {
    insta::assert_snapshot!(expect_valid("type Empty {}"), @r#"
    Program
      TypeDecl
        KwType "type"
        Identifier "Empty"
        LCurly "{"
        RCurly "}"
    "#);
}

#[test]
fn one_extra_semicolon_after_item() {
    insta::assert_snapshot!(expect_valid("x = 1;;"), @r#"
    Program
      ExprStmt
        BinaryExpr
          NameRef
            Identifier "x"
          Eq "="
          Literal
            Number "1"
        SemiColon ";"
      SemiColon ";"
    "#);
}

#[test]
fn items_without_semicolons() {
    let input = indoc! {r#"
    var a = 1
    a++
    function f() {}
    "#};

    insta::assert_snapshot!(expect_valid(input), @r#"
    Program
      VarStmt
        KwVar "var"
        Identifier "a"
        Initializer
          Eq "="
          Literal
            Number "1"
      ExprStmt
        PostfixExpr
          NameRef
            Identifier "a"
          PlusPlus "++"
      FnDecl
        KwFunction "function"
        Identifier "f"
        ParamList
          LParen "("
          RParen ")"
        LogicBlock
          LCurly "{"
          RCurly "}"
    "#);
}
