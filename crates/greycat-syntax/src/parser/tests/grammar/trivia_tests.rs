use crate::parser::{CstPrinter, parse};
use indoc::indoc;

fn dump_with_trivia(src: &str) -> String {
    let (parse, diagnostics) = parse(src).unwrap();
    assert!(diagnostics.is_empty(), "{diagnostics}");
    let root = parse.syntax();
    assert_eq!(root.text().to_string(), src);
    CstPrinter::new(&root).with_trivia(true).dump()
}

#[test]
fn trailing_comment_attaches_to_program() {
    insta::assert_snapshot!(dump_with_trivia("var x = 1; // done\n"), @r#"
    Program
      VarStmt
        KwVar "var"
        Whitespace " "
        Identifier "x"
        Whitespace " "
        Initializer
          Eq "="
          Whitespace " "
          Literal
            Number "1"
        SemiColon ";"
      Whitespace " "
      LineComment "// done"
      Whitespace "\n"
    "#);
}

#[test]
fn leading_comment_precedes_item() {
    insta::assert_snapshot!(dump_with_trivia("// c\nx"), @r#"
    Program
      LineComment "// c"
      Whitespace "\n"
      ExprStmt
        NameRef
          Identifier "x"
    "#);
}

#[test]
fn doc_and_block_comments_are_trivia() {
    let input = indoc! {r#"
    /// Adds.
    function f() { /* nothing */ }
    "#};

    let (parse, diagnostics) = parse(input).unwrap();
    assert!(diagnostics.is_empty());
    insta::assert_snapshot!(parse.dump(), @r#"
    Program
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

#[test]
fn spans() {
    let (parse, _) = parse("a = 1").unwrap();
    let root = parse.syntax();
    insta::assert_snapshot!(CstPrinter::new(&root).with_spans(true).dump(), @r#"
    Program [0..5]
      ExprStmt [0..5]
        BinaryExpr [0..5]
          NameRef [0..1]
            Identifier [0..1] "a"
          Eq [2..3] "="
          Literal [4..5]
            Number [4..5] "1"
    "#);
}

#[test]
fn tree_text_is_source() {
    let input = indoc! {r#"
    import "a";
    /* header */ type T { x: int; }
    function main() {
      var t = T { x: -1 }; // init
      while (t.x < 10) { t.x++; }
    }
    "#};

    let (parse, _) = parse(input).unwrap();
    assert_eq!(parse.syntax().text().to_string(), input);
}
