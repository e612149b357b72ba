use crate::parser::tests::expect_valid;

#[test]
fn scalar_name_opens_typed_array() {
    insta::assert_snapshot!(expect_valid("int[1,2,3]"), @r#"
    Program
      ExprStmt
        ArrayLiteral
          Identifier "int"
          LBracket "["
          Literal
            Number "1"
          Comma ","
          Literal
            Number "2"
          Comma ","
          Literal
            Number "3"
          RBracket "]"
    "#);
}

#[test]
fn other_name_opens_index_access() {
    insta::assert_snapshot!(expect_valid("foo[1]"), @r#"
    Program
      ExprStmt
        MemberExpr
          NameRef
            Identifier "foo"
          IndexAccess
            LBracket "["
            Literal
              Number "1"
            RBracket "]"
    "#);
}

#[test]
fn array_gate_is_exact_match() {
    insta::assert_snapshot!(expect_valid("integer[0]"), @r#"
    Program
      ExprStmt
        MemberExpr
          NameRef
            Identifier "integer"
          IndexAccess
            LBracket "["
            Literal
              Number "0"
            RBracket "]"
    "#);
}

#[test]
fn typed_record() {
    insta::assert_snapshot!(expect_valid("var p = Point {x: 1, y: 2};"), @r#"
    Program
      VarStmt
        KwVar "var"
        Identifier "p"
        Initializer
          Eq "="
          RecordLiteral
            Identifier "Point"
            LCurly "{"
            RecordProp
              Identifier "x"
              Colon ":"
              Literal
                Number "1"
            Comma ","
            RecordProp
              Identifier "y"
              Colon ":"
              Literal
                Number "2"
            RCurly "}"
        SemiColon ";"
    "#);
}

#[test]
fn anonymous_record_argument() {
    insta::assert_snapshot!(expect_valid("f({a: 1})"), @r#"
    Program
      ExprStmt
        MemberExpr
          NameRef
            Identifier "f"
          CallArgs
            LParen "("
            RecordLiteral
              LCurly "{"
              RecordProp
                Identifier "a"
                Colon ":"
                Literal
                  Number "1"
              RCurly "}"
            RParen ")"
    "#);
}

#[test]
fn keyword_property_name() {
    insta::assert_snapshot!(expect_valid("{type: 1}"), @r#"
    Program
      ExprStmt
        RecordLiteral
          LCurly "{"
          RecordProp
            KwType "type"
            Colon ":"
            Literal
              Number "1"
          RCurly "}"
    "#);
}

#[test]
fn untyped_array_with_trailing_comma() {
    insta::assert_snapshot!(expect_valid(r#"[1, "a", null,]"#), @r#"
    Program
      ExprStmt
        ArrayLiteral
          LBracket "["
          Literal
            Number "1"
          Comma ","
          Literal
            DoubleQuoted "\"a\""
          Comma ","
          Literal
            KwNull "null"
          Comma ","
          RBracket "]"
    "#);
}

#[test]
fn literal_forms() {
    insta::assert_snapshot!(expect_valid("[true, this, `raw`, 2.5e3]"), @r#"
    Program
      ExprStmt
        ArrayLiteral
          LBracket "["
          Literal
            KwTrue "true"
          Comma ","
          Literal
            KwThis "this"
          Comma ","
          Literal
            BackQuoted "`raw`"
          Comma ","
          Literal
            Number "2.5e3"
          RBracket "]"
    "#);
}

#[test]
fn reference_literal() {
    insta::assert_snapshot!(expect_valid("#node"), @r##"
    Program
      ExprStmt
        RefLiteral
          Hash "#"
          Identifier "node"
    "##);
}

#[test]
fn function_literal() {
    insta::assert_snapshot!(expect_valid("var f = (a: int): int { return a; };"), @r#"
    Program
      VarStmt
        KwVar "var"
        Identifier "f"
        Initializer
          Eq "="
          FnLiteral
            ParamList
              LParen "("
              Param
                Identifier "a"
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
                NameRef
                  Identifier "a"
                SemiColon ";"
              RCurly "}"
        SemiColon ";"
    "#);
}

#[test]
fn function_literal_without_params() {
    insta::assert_snapshot!(expect_valid("g = () {}"), @r#"
    Program
      ExprStmt
        BinaryExpr
          NameRef
            Identifier "g"
          Eq "="
          FnLiteral
            ParamList
              LParen "("
              RParen ")"
            LogicBlock
              LCurly "{"
              RCurly "}"
    "#);
}

#[test]
fn paren_with_static_access_is_not_function() {
    insta::assert_snapshot!(expect_valid("(a::b)"), @r#"
    Program
      ExprStmt
        ParenExpr
          LParen "("
          MemberExpr
            NameRef
              Identifier "a"
            StaticAccess
              Colon ":"
              Colon ":"
              Identifier "b"
          RParen ")"
    "#);
}
