//! Typed AST wrappers over CST nodes.
//!
//! Each struct wraps a `SyntaxNode` and provides typed accessors.
//! Accessors return `None` where recovery left a piece out; the CST stays the
//! source of truth.

use super::cst::token_sets::{BINARY_OPS, IDENTIFIER_NAMES, POSTFIX_OPS, PREFIX_OPS};
use super::cst::{SyntaxKind, SyntaxNode, SyntaxToken, TokenSet};

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl $name {
            pub fn cast(node: SyntaxNode) -> Option<Self> {
                (node.kind() == SyntaxKind::$kind).then(|| Self(node))
            }

            pub fn as_cst(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

/// Sum type over several node kinds, one variant per wrapper of the same name.
macro_rules! ast_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant($variant),)+
        }

        impl $name {
            pub fn cast(node: SyntaxNode) -> Option<Self> {
                match node.kind() {
                    $(SyntaxKind::$variant => $variant::cast(node).map($name::$variant),)+
                    _ => None,
                }
            }

            pub fn as_cst(&self) -> &SyntaxNode {
                match self {
                    $($name::$variant(n) => n.as_cst(),)+
                }
            }
        }
    };
}

ast_node!(Program, Program);
ast_node!(Import, Import);
ast_node!(FnDecl, FnDecl);
ast_node!(ParamList, ParamList);
ast_node!(Param, Param);
ast_node!(TypeDecl, TypeDecl);
ast_node!(TypeMember, TypeMember);
ast_node!(AttrDecl, AttrDecl);
ast_node!(TypeList, TypeList);
ast_node!(TypeName, TypeName);
ast_node!(TypeArgs, TypeArgs);
ast_node!(Block, Block);
ast_node!(LogicBlock, LogicBlock);
ast_node!(IfStmt, IfStmt);
ast_node!(ElseClause, ElseClause);
ast_node!(WhileStmt, WhileStmt);
ast_node!(ForStmt, ForStmt);
ast_node!(VarStmt, VarStmt);
ast_node!(Initializer, Initializer);
ast_node!(ExprStmt, ExprStmt);
ast_node!(ReturnStmt, ReturnStmt);
ast_node!(BinaryExpr, BinaryExpr);
ast_node!(IsExpr, IsExpr);
ast_node!(PrefixExpr, PrefixExpr);
ast_node!(PostfixExpr, PostfixExpr);
ast_node!(MemberExpr, MemberExpr);
ast_node!(FieldAccess, FieldAccess);
ast_node!(StaticAccess, StaticAccess);
ast_node!(IndexAccess, IndexAccess);
ast_node!(CallArgs, CallArgs);
ast_node!(NonNullAssert, NonNullAssert);
ast_node!(NameRef, NameRef);
ast_node!(RefLiteral, RefLiteral);
ast_node!(Literal, Literal);
ast_node!(RecordLiteral, RecordLiteral);
ast_node!(RecordProp, RecordProp);
ast_node!(ArrayLiteral, ArrayLiteral);
ast_node!(FnLiteral, FnLiteral);
ast_node!(ParenExpr, ParenExpr);

ast_enum! {
    /// Top-level declaration or statement.
    Item { FnDecl, TypeDecl, Block, IfStmt, WhileStmt, ForStmt, VarStmt, ExprStmt, ReturnStmt }
}

ast_enum! {
    /// Anything allowed inside a block.
    Stmt { Block, IfStmt, WhileStmt, ForStmt, VarStmt, ExprStmt, ReturnStmt }
}

ast_enum! {
    /// Expression node. Operands of operators are always nodes, never bare tokens.
    Expr {
        BinaryExpr,
        IsExpr,
        PrefixExpr,
        PostfixExpr,
        MemberExpr,
        NameRef,
        RefLiteral,
        Literal,
        RecordLiteral,
        ArrayLiteral,
        FnLiteral,
        ParenExpr,
    }
}

ast_enum! {
    /// One trailing accessor of a member expression.
    Accessor { FieldAccess, StaticAccess, IndexAccess, CallArgs, NonNullAssert }
}

fn token(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    token_in(node, TokenSet::single(kind))
}

fn token_in(node: &SyntaxNode, set: TokenSet) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|it| it.into_token())
        .find(|t| set.contains(t.kind()))
}

fn child<N>(node: &SyntaxNode, cast: fn(SyntaxNode) -> Option<N>) -> Option<N> {
    node.children().find_map(cast)
}

impl Program {
    pub fn imports(&self) -> impl Iterator<Item = Import> + '_ {
        self.0.children().filter_map(Import::cast)
    }

    pub fn items(&self) -> impl Iterator<Item = Item> + '_ {
        self.0.children().filter_map(Item::cast)
    }
}

impl Import {
    /// The quoted path, quotes included.
    pub fn path(&self) -> Option<SyntaxToken> {
        token_in(
            &self.0,
            TokenSet::new(&[SyntaxKind::SingleQuoted, SyntaxKind::DoubleQuoted]),
        )
    }
}

impl FnDecl {
    pub fn name(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Identifier)
    }

    pub fn params(&self) -> Option<ParamList> {
        child(&self.0, ParamList::cast)
    }

    pub fn return_type(&self) -> Option<TypeList> {
        child(&self.0, TypeList::cast)
    }

    pub fn body(&self) -> Option<LogicBlock> {
        child(&self.0, LogicBlock::cast)
    }
}

impl FnLiteral {
    pub fn params(&self) -> Option<ParamList> {
        child(&self.0, ParamList::cast)
    }

    pub fn return_type(&self) -> Option<TypeList> {
        child(&self.0, TypeList::cast)
    }

    pub fn body(&self) -> Option<LogicBlock> {
        child(&self.0, LogicBlock::cast)
    }
}

impl ParamList {
    pub fn params(&self) -> impl Iterator<Item = Param> + '_ {
        self.0.children().filter_map(Param::cast)
    }
}

impl Param {
    pub fn name(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Identifier)
    }

    pub fn type_list(&self) -> Option<TypeList> {
        child(&self.0, TypeList::cast)
    }
}

impl TypeDecl {
    pub fn is_open(&self) -> bool {
        token(&self.0, SyntaxKind::KwOpen).is_some()
    }

    pub fn name(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Identifier)
    }

    pub fn members(&self) -> impl Iterator<Item = TypeMember> + '_ {
        self.0.children().filter_map(TypeMember::cast)
    }
}

impl TypeMember {
    pub fn is_private(&self) -> bool {
        token(&self.0, SyntaxKind::KwPrivate).is_some()
    }

    pub fn is_static(&self) -> bool {
        token(&self.0, SyntaxKind::KwStatic).is_some()
    }

    pub fn function(&self) -> Option<FnDecl> {
        child(&self.0, FnDecl::cast)
    }

    pub fn attribute(&self) -> Option<AttrDecl> {
        child(&self.0, AttrDecl::cast)
    }
}

impl AttrDecl {
    pub fn name(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Identifier)
    }

    pub fn type_list(&self) -> Option<TypeList> {
        child(&self.0, TypeList::cast)
    }

    pub fn initializer(&self) -> Option<Initializer> {
        child(&self.0, Initializer::cast)
    }
}

impl TypeList {
    /// Union members in source order.
    pub fn types(&self) -> impl Iterator<Item = TypeName> + '_ {
        self.0.children().filter_map(TypeName::cast)
    }
}

impl TypeName {
    pub fn name(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Identifier)
    }

    pub fn args(&self) -> Option<TypeArgs> {
        child(&self.0, TypeArgs::cast)
    }
}

impl TypeArgs {
    pub fn lists(&self) -> impl Iterator<Item = TypeList> + '_ {
        self.0.children().filter_map(TypeList::cast)
    }
}

impl Block {
    pub fn statements(&self) -> impl Iterator<Item = Stmt> + '_ {
        self.0.children().filter_map(Stmt::cast)
    }
}

impl LogicBlock {
    pub fn statements(&self) -> impl Iterator<Item = Stmt> + '_ {
        self.0.children().filter_map(Stmt::cast)
    }
}

impl IfStmt {
    pub fn condition(&self) -> Option<Expr> {
        child(&self.0, Expr::cast)
    }

    pub fn then_block(&self) -> Option<LogicBlock> {
        child(&self.0, LogicBlock::cast)
    }

    pub fn else_clause(&self) -> Option<ElseClause> {
        child(&self.0, ElseClause::cast)
    }
}

impl ElseClause {
    pub fn block(&self) -> Option<LogicBlock> {
        child(&self.0, LogicBlock::cast)
    }

    /// The chained `if` of an `else if`.
    pub fn if_stmt(&self) -> Option<IfStmt> {
        child(&self.0, IfStmt::cast)
    }
}

impl WhileStmt {
    pub fn condition(&self) -> Option<Expr> {
        child(&self.0, Expr::cast)
    }

    pub fn body(&self) -> Option<LogicBlock> {
        child(&self.0, LogicBlock::cast)
    }
}

impl ForStmt {
    pub fn variable(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Identifier)
    }

    /// Header expressions are positional; a missing initializer shifts the condition into its slot.
    pub fn init(&self) -> Option<Expr> {
        self.0.children().filter_map(Expr::cast).next()
    }

    pub fn condition(&self) -> Option<Expr> {
        self.0.children().filter_map(Expr::cast).nth(1)
    }

    pub fn update(&self) -> Option<ExprStmt> {
        child(&self.0, ExprStmt::cast)
    }

    pub fn body(&self) -> Option<LogicBlock> {
        child(&self.0, LogicBlock::cast)
    }
}

impl VarStmt {
    pub fn name(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Identifier)
    }

    pub fn type_list(&self) -> Option<TypeList> {
        child(&self.0, TypeList::cast)
    }

    pub fn initializer(&self) -> Option<Initializer> {
        child(&self.0, Initializer::cast)
    }
}

impl Initializer {
    pub fn value(&self) -> Option<Expr> {
        child(&self.0, Expr::cast)
    }
}

impl ExprStmt {
    pub fn expr(&self) -> Option<Expr> {
        child(&self.0, Expr::cast)
    }

    pub fn has_semicolon(&self) -> bool {
        token(&self.0, SyntaxKind::SemiColon).is_some()
    }
}

impl ReturnStmt {
    pub fn value(&self) -> Option<Expr> {
        child(&self.0, Expr::cast)
    }
}

impl BinaryExpr {
    pub fn lhs(&self) -> Option<Expr> {
        child(&self.0, Expr::cast)
    }

    pub fn operator(&self) -> Option<SyntaxToken> {
        token_in(&self.0, BINARY_OPS)
    }

    /// Right operand. Chains nest here: `a = b = c` has `b = c` as rhs.
    pub fn rhs(&self) -> Option<Expr> {
        self.0.children().filter_map(Expr::cast).nth(1)
    }
}

impl IsExpr {
    pub fn operand(&self) -> Option<Expr> {
        child(&self.0, Expr::cast)
    }

    pub fn type_name(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Identifier)
    }
}

impl PrefixExpr {
    pub fn operator(&self) -> Option<SyntaxToken> {
        token_in(&self.0, PREFIX_OPS)
    }

    pub fn operand(&self) -> Option<Expr> {
        child(&self.0, Expr::cast)
    }
}

impl PostfixExpr {
    pub fn operand(&self) -> Option<Expr> {
        child(&self.0, Expr::cast)
    }

    pub fn operator(&self) -> Option<SyntaxToken> {
        token_in(&self.0, POSTFIX_OPS)
    }
}

impl MemberExpr {
    pub fn is_new(&self) -> bool {
        token(&self.0, SyntaxKind::KwNew).is_some()
    }

    pub fn base(&self) -> Option<Expr> {
        child(&self.0, Expr::cast)
    }

    pub fn accessors(&self) -> impl Iterator<Item = Accessor> + '_ {
        self.0.children().filter_map(Accessor::cast)
    }
}

impl FieldAccess {
    pub fn name(&self) -> Option<SyntaxToken> {
        token_in(&self.0, IDENTIFIER_NAMES)
    }
}

impl StaticAccess {
    pub fn name(&self) -> Option<SyntaxToken> {
        token_in(&self.0, IDENTIFIER_NAMES)
    }
}

impl IndexAccess {
    pub fn index(&self) -> Option<Expr> {
        child(&self.0, Expr::cast)
    }
}

impl CallArgs {
    pub fn args(&self) -> impl Iterator<Item = Expr> + '_ {
        self.0.children().filter_map(Expr::cast)
    }
}

impl NameRef {
    pub fn name(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Identifier)
    }
}

impl RefLiteral {
    pub fn name(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Identifier)
    }
}

impl Literal {
    pub fn token(&self) -> Option<SyntaxToken> {
        self.0.first_token().filter(|t| !t.kind().is_trivia())
    }
}

impl RecordLiteral {
    /// `Point` in `Point { x: 1 }`; `None` for an anonymous record.
    pub fn type_name(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Identifier)
    }

    pub fn props(&self) -> impl Iterator<Item = RecordProp> + '_ {
        self.0.children().filter_map(RecordProp::cast)
    }
}

impl RecordProp {
    pub fn name(&self) -> Option<SyntaxToken> {
        token_in(&self.0, IDENTIFIER_NAMES)
    }

    pub fn value(&self) -> Option<Expr> {
        child(&self.0, Expr::cast)
    }
}

impl ArrayLiteral {
    /// `int` in `int[1, 2]`; `None` for an untyped array.
    pub fn element_type(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Identifier)
    }

    pub fn elements(&self) -> impl Iterator<Item = Expr> + '_ {
        self.0.children().filter_map(Expr::cast)
    }
}

impl ParenExpr {
    pub fn inner(&self) -> Option<Expr> {
        child(&self.0, Expr::cast)
    }
}
