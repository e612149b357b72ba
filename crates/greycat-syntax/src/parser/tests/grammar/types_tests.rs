use crate::parser::tests::expect_valid;

#[test]
fn generic_and_union_types() {
    insta::assert_snapshot!(expect_valid("var m: Map<String, Array<int>> | float;"), @r#"
    Program
      VarStmt
        KwVar "var"
        Identifier "m"
        Colon ":"
        TypeList
          TypeName
            Identifier "Map"
            TypeArgs
              Less "<"
              TypeList
                TypeName
                  Identifier "String"
              Comma ","
              TypeList
                TypeName
                  Identifier "Array"
                  TypeArgs
                    Less "<"
                    TypeList
                      TypeName
                        Identifier "int"
                    Greater ">"
              Greater ">"
          Pipe "|"
          TypeName
            Identifier "float"
        SemiColon ";"
    "#);
}

#[test]
fn union_parameter_type() {
    insta::assert_snapshot!(expect_valid("function f(x: int | float) {}"), @r#"
    Program
      FnDecl
        KwFunction "function"
        Identifier "f"
        ParamList
          LParen "("
          Param
            Identifier "x"
            Colon ":"
            TypeList
              TypeName
                Identifier "int"
              Pipe "|"
              TypeName
                Identifier "float"
          RParen ")"
        LogicBlock
          LCurly "{"
          RCurly "}"
    "#);
}

#[test]
fn union_return_type() {
    insta::assert_snapshot!(expect_valid("function f(): A | B<C> {}"), @r#"
    Program
      FnDecl
        KwFunction "function"
        Identifier "f"
        ParamList
          LParen "("
          RParen ")"
        Colon ":"
        TypeList
          TypeName
            Identifier "A"
          Pipe "|"
          TypeName
            Identifier "B"
            TypeArgs
              Less "<"
              TypeList
                TypeName
                  Identifier "C"
              Greater ">"
        LogicBlock
          LCurly "{"
          RCurly "}"
    "#);
}
