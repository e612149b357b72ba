use std::fmt::Write;

use rowan::{NodeOrToken, TextRange};

use super::cst::SyntaxNode;

/// Indented text dump of a concrete syntax tree, one element per line.
pub struct CstPrinter<'n> {
    root: &'n SyntaxNode,
    trivia: bool,
    spans: bool,
}

impl<'n> CstPrinter<'n> {
    pub fn new(root: &'n SyntaxNode) -> Self {
        Self {
            root,
            trivia: false,
            spans: false,
        }
    }

    /// Also print whitespace and comment tokens.
    pub fn with_trivia(mut self, value: bool) -> Self {
        self.trivia = value;
        self
    }

    /// Suffix every line with its byte range.
    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        self.format_node(self.root, 0, w)
    }

    fn format_node(&self, node: &SyntaxNode, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        writeln!(w, "{}{:?}{}", prefix, node.kind(), self.span_str(node.text_range()))?;

        for child in node.children_with_tokens() {
            match child {
                NodeOrToken::Node(n) => self.format_node(&n, indent + 1, w)?,
                NodeOrToken::Token(t) => {
                    if !self.trivia && t.kind().is_trivia() {
                        continue;
                    }
                    writeln!(
                        w,
                        "{}  {:?}{} {:?}",
                        prefix,
                        t.kind(),
                        self.span_str(t.text_range()),
                        t.text()
                    )?;
                }
            }
        }
        Ok(())
    }

    fn span_str(&self, range: TextRange) -> String {
        if !self.spans {
            return String::new();
        }
        format!(" [{}..{}]", u32::from(range.start()), u32::from(range.end()))
    }
}
