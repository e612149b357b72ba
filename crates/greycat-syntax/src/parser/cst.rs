//! Syntax kinds for GreyCat.
//!
//! `SyntaxKind` serves dual roles: token kinds (from lexer) and node kinds (from parser).
//! Logos derives token recognition; node kinds lack token/regex attributes.
//! `GreyCatLang` implements Rowan's `Language` trait for tree construction.
//!
//! Token kinds also form a category lattice (`TokenCategory`): a kind can satisfy
//! several abstract groups, e.g. `PlusEq` is an assignment operator and a punctuator.
//! Categories are plain `const` token sets, so grammar rules test membership instead
//! of enumerating concrete kinds.

use logos::Logos;
use rowan::Language;
use serde::Serialize;

/// All token and node kinds. Tokens first, then nodes, then `__LAST` sentinel.
/// `#[repr(u16)]` enables safe transmute in `kind_from_raw`.
#[derive(Logos, Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    #[token("{")]
    LCurly = 0,

    #[token("}")]
    RCurly,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token(".")]
    Dot,

    /// Reference literal prefix: `#name`
    #[token("#")]
    Hash,

    #[token(",")]
    Comma,

    /// Also used twice in a row for static member access: `Type::member`
    #[token(":")]
    Colon,

    #[token(";")]
    SemiColon,

    /// Logical not as prefix, non-null assertion as postfix.
    #[token("!")]
    ExclMark,

    #[token("++")]
    PlusPlus,

    #[token("--")]
    MinusMinus,

    #[token("*")]
    Asterisk,

    #[token("/")]
    Slash,

    #[token("%")]
    Percent,

    #[token("^")]
    Caret,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    /// Also opens generic type arguments: `Array<int>`
    #[token("<")]
    Less,

    /// Also closes generic type arguments.
    #[token(">")]
    Greater,

    #[token("<=")]
    LessEq,

    #[token(">=")]
    GreaterEq,

    #[token("&&")]
    AmpAmp,

    /// Also separates union members in type lists: `int | null`
    #[token("|")]
    Pipe,

    #[token("||")]
    PipePipe,

    #[token("==")]
    EqEq,

    #[token("!=")]
    ExclMarkEq,

    #[token("=")]
    Eq,

    #[token("+=")]
    PlusEq,

    #[token("-=")]
    MinusEq,

    #[token("*=")]
    AsteriskEq,

    #[token("%=")]
    PercentEq,

    #[token("/=")]
    SlashEq,

    #[token("var")]
    KwVar,

    #[token("static")]
    KwStatic,

    #[token("function")]
    KwFunction,

    #[token("open")]
    KwOpen,

    #[token("type")]
    KwType,

    #[token("new")]
    KwNew,

    #[token("return")]
    KwReturn,

    #[token("private")]
    KwPrivate,

    #[token("if")]
    KwIf,

    #[token("is")]
    KwIs,

    #[token("else")]
    KwElse,

    #[token("while")]
    KwWhile,

    #[token("for")]
    KwFor,

    #[token("import")]
    KwImport,

    #[token("null")]
    KwNull,

    #[token("this")]
    KwThis,

    #[token("true")]
    KwTrue,

    #[token("false")]
    KwFalse,

    /// Optional sign, optional fraction, then an exponent or a type suffix.
    /// The lexer splits the sign off when it directly follows an operand.
    #[regex(r"-?[0-9]+\.?[0-9]*(?:[eE]-?[0-9]+|[dDlL])?")]
    Number,

    #[regex(
        r#"'(?:[^'\\\n\r]|\\(?:[bfnrtv'\\/]|u[0-9a-fA-F]{4}))*'"#,
        priority = 10,
        allow_greedy = true
    )]
    SingleQuoted,

    #[regex(
        r#""(?:[^"\\\n\r]|\\(?:[bfnrtv"\\/]|u[0-9a-fA-F]{4}))*""#,
        priority = 10,
        allow_greedy = true
    )]
    DoubleQuoted,

    /// Back-quoted literal. Unlike the quoted forms it may span lines.
    #[regex(
        r#"`(?:[^`\\]|\\(?:[bfnrtv`\\/]|u[0-9a-fA-F]{4}))*`"#,
        priority = 10,
        allow_greedy = true
    )]
    BackQuoted,

    /// Identifier. Defined after keywords so they take precedence on equal length;
    /// longest match turns `variable` into one identifier.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Identifier,

    #[regex(r"\s+")]
    Whitespace,

    #[regex(r"//[^\n]*", allow_greedy = true)]
    LineComment,

    #[regex(r"///[^\n]*", priority = 10, allow_greedy = true)]
    DocComment,

    #[regex(r"/\*[^*]*\*+(?:[^/*][^*]*\*+)*/", allow_greedy = true)]
    BlockComment,

    /// Unterminated string or invalid escape sequence.
    #[regex(r#"'(?:[^'\\\n\r]|\\[^\n\r])*'?"#, priority = 1, allow_greedy = true)]
    #[regex(r#""(?:[^"\\\n\r]|\\[^\n\r])*"?"#, priority = 1, allow_greedy = true)]
    #[regex(r#"`(?:[^`\\]|\\[^\n\r])*`?"#, priority = 1, allow_greedy = true)]
    MalformedString,

    /// Block comment that runs to end of input.
    #[regex(r"/\*(?:[^*]|\*+[^*/])*\**", priority = 1, allow_greedy = true)]
    UnterminatedComment,

    /// Coalesced unrecognized characters
    Garbage,
    Error,

    // --- Node kinds (non-terminals) ---
    Program,
    Import,
    FnDecl,
    ParamList,
    Param,
    TypeDecl,
    TypeMember,
    AttrDecl,
    TypeList,
    TypeName,
    TypeArgs,
    Block,
    LogicBlock,
    IfStmt,
    ElseClause,
    WhileStmt,
    ForStmt,
    VarStmt,
    Initializer,
    ExprStmt,
    ReturnStmt,
    BinaryExpr,
    IsExpr,
    PrefixExpr,
    PostfixExpr,
    MemberExpr,
    FieldAccess,
    StaticAccess,
    IndexAccess,
    CallArgs,
    NonNullAssert,
    NameRef,
    RefLiteral,
    Literal,
    RecordLiteral,
    RecordProp,
    ArrayLiteral,
    FnLiteral,
    ParenExpr,

    // Must be last - used for bounds checking in `kind_from_raw`
    #[doc(hidden)]
    __LAST,
}

use SyntaxKind::*;

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Whitespace | LineComment | DocComment | BlockComment)
    }

    /// Tokens the lexer could not make sense of. They stay in the tree but the
    /// grammar never sees them.
    #[inline]
    pub fn is_lex_error(self) -> bool {
        matches!(self, Garbage | MalformedString | UnterminatedComment)
    }

    #[inline]
    pub fn is_error(self) -> bool {
        self == Error || self.is_lex_error()
    }

    /// Not visible to grammar rules: trivia and lexical errors.
    #[inline]
    pub fn is_skipped(self) -> bool {
        self.is_trivia() || self.is_lex_error()
    }

    #[inline]
    pub fn is_token(self) -> bool {
        (self as u16) < (Program as u16)
    }

    #[inline]
    pub const fn is_in(self, category: TokenCategory) -> bool {
        category.tokens().contains(self)
    }

    /// Every abstract group this kind satisfies, most specific first.
    pub fn categories(self) -> impl Iterator<Item = TokenCategory> {
        TokenCategory::ALL
            .into_iter()
            .filter(move |category| self.is_in(*category))
    }

    /// Human-readable form used in diagnostics.
    pub fn describe(self) -> &'static str {
        match self {
            LCurly => "`{`",
            RCurly => "`}`",
            LParen => "`(`",
            RParen => "`)`",
            LBracket => "`[`",
            RBracket => "`]`",
            Dot => "`.`",
            Hash => "`#`",
            Comma => "`,`",
            Colon => "`:`",
            SemiColon => "`;`",
            ExclMark => "`!`",
            Eq => "`=`",
            Less => "`<`",
            Greater => "`>`",
            Identifier => "identifier",
            Number => "number",
            SingleQuoted | DoubleQuoted => "string literal",
            BackQuoted => "back-quoted literal",
            _ if self.is_in(TokenCategory::Keyword) => "keyword",
            _ if self.is_in(TokenCategory::Punctuator) => "operator",
            _ => "token",
        }
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    #[inline]
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language tag for Rowan's tree types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GreyCatLang {}

impl Language for GreyCatLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 < __LAST as u16);
        // SAFETY: We've verified the value is in bounds, and SyntaxKind is repr(u16)
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for Rowan types parameterized by our language.
pub type SyntaxNode = rowan::SyntaxNode<GreyCatLang>;
pub type SyntaxToken = rowan::SyntaxToken<GreyCatLang>;
pub type SyntaxElement = rowan::NodeOrToken<SyntaxNode, SyntaxToken>;

/// 128-bit bitset of token `SyntaxKind`s for O(1) membership testing.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet(u128);

impl TokenSet {
    /// Creates an empty token set.
    pub const EMPTY: TokenSet = TokenSet(0);

    /// Panics at compile time if any kind's discriminant >= 128.
    #[inline]
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut bits = 0u128;
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            assert!(kind < 128, "SyntaxKind value exceeds TokenSet capacity");
            bits |= 1 << kind;
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn single(kind: SyntaxKind) -> Self {
        let kind = kind as u16;
        assert!(kind < 128, "SyntaxKind value exceeds TokenSet capacity");
        TokenSet(1 << kind)
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let kind = kind as u16;
        if kind >= 128 {
            return false;
        }
        self.0 & (1 << kind) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet(self.0 | other.0)
    }

    pub fn iter(self) -> impl Iterator<Item = SyntaxKind> {
        (0..(__LAST as u16).min(128))
            .filter(move |i| self.0 & (1 << i) != 0)
            // SAFETY: bounded by `__LAST`, and SyntaxKind is repr(u16)
            .map(|i| unsafe { std::mem::transmute::<u16, SyntaxKind>(i) })
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Abstract token groups. A kind may belong to several of them.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    AssignmentOperator,
    EqualityOperator,
    RelationalOperator,
    MultiplicativeOperator,
    AdditiveOperator,
    Punctuator,
    BooleanLiteral,
    StringLiteral,
    Literal,
    Keyword,
    IdentifierName,
    Comment,
}

impl TokenCategory {
    pub const ALL: [TokenCategory; 12] = [
        TokenCategory::AssignmentOperator,
        TokenCategory::EqualityOperator,
        TokenCategory::RelationalOperator,
        TokenCategory::MultiplicativeOperator,
        TokenCategory::AdditiveOperator,
        TokenCategory::Punctuator,
        TokenCategory::BooleanLiteral,
        TokenCategory::StringLiteral,
        TokenCategory::Literal,
        TokenCategory::Keyword,
        TokenCategory::IdentifierName,
        TokenCategory::Comment,
    ];

    pub const fn tokens(self) -> TokenSet {
        use token_sets::*;
        match self {
            TokenCategory::AssignmentOperator => ASSIGNMENT_OPS,
            TokenCategory::EqualityOperator => EQUALITY_OPS,
            TokenCategory::RelationalOperator => RELATIONAL_OPS,
            TokenCategory::MultiplicativeOperator => MULTIPLICATIVE_OPS,
            TokenCategory::AdditiveOperator => ADDITIVE_OPS,
            TokenCategory::Punctuator => PUNCTUATORS,
            TokenCategory::BooleanLiteral => BOOLEAN_LITERALS,
            TokenCategory::StringLiteral => STRING_LITERALS,
            TokenCategory::Literal => LITERALS,
            TokenCategory::Keyword => KEYWORDS,
            TokenCategory::IdentifierName => IDENTIFIER_NAMES,
            TokenCategory::Comment => COMMENTS,
        }
    }
}

/// Pre-defined token sets for the lexer and parser.
pub mod token_sets {
    use super::*;

    pub const ASSIGNMENT_OPS: TokenSet =
        TokenSet::new(&[Eq, PlusEq, MinusEq, AsteriskEq, PercentEq, SlashEq]);

    pub const EQUALITY_OPS: TokenSet = TokenSet::new(&[EqEq, ExclMarkEq]);

    pub const RELATIONAL_OPS: TokenSet =
        TokenSet::new(&[Less, Greater, LessEq, GreaterEq, AmpAmp, Pipe, PipePipe]);

    pub const MULTIPLICATIVE_OPS: TokenSet = TokenSet::new(&[Asterisk, Slash, Percent, Caret]);

    pub const ADDITIVE_OPS: TokenSet = TokenSet::new(&[Plus, Minus]);

    /// Every operator accepted between two operands of a binary expression.
    pub const BINARY_OPS: TokenSet = ASSIGNMENT_OPS
        .union(EQUALITY_OPS)
        .union(RELATIONAL_OPS)
        .union(MULTIPLICATIVE_OPS)
        .union(ADDITIVE_OPS);

    pub const PUNCTUATORS: TokenSet = TokenSet::new(&[
        LCurly, RCurly, LParen, RParen, LBracket, RBracket, Dot, Hash, Comma, Colon, SemiColon,
        ExclMark, PlusPlus, MinusMinus,
    ])
    .union(BINARY_OPS);

    pub const PREFIX_OPS: TokenSet = TokenSet::new(&[ExclMark, Plus, Minus]);

    pub const POSTFIX_OPS: TokenSet = TokenSet::new(&[PlusPlus, MinusMinus]);

    pub const BOOLEAN_LITERALS: TokenSet = TokenSet::new(&[KwTrue, KwFalse]);

    pub const STRING_LITERALS: TokenSet = TokenSet::new(&[SingleQuoted, DoubleQuoted]);

    pub const LITERALS: TokenSet = TokenSet::new(&[KwNull, KwThis, Number, BackQuoted])
        .union(BOOLEAN_LITERALS)
        .union(STRING_LITERALS);

    pub const KEYWORDS: TokenSet = TokenSet::new(&[
        KwVar, KwStatic, KwFunction, KwOpen, KwType, KwNew, KwReturn, KwPrivate, KwIf, KwIs,
        KwElse, KwWhile, KwFor, KwImport,
    ]);

    /// Any word usable as a member or property name, reserved or not.
    pub const IDENTIFIER_NAMES: TokenSet = TokenSet::new(&[Identifier, KwNull, KwThis])
        .union(KEYWORDS)
        .union(BOOLEAN_LITERALS);

    pub const COMMENTS: TokenSet = TokenSet::new(&[LineComment, DocComment, BlockComment]);

    /// Tokens after which a `-` is a binary operator rather than a sign.
    pub const OPERAND_END: TokenSet = TokenSet::new(&[
        Identifier, Number, SingleQuoted, DoubleQuoted, BackQuoted, KwNull, KwThis, KwTrue,
        KwFalse, RParen, RBracket, RCurly, PlusPlus, MinusMinus, ExclMark,
    ]);

    /// FIRST set of a primary expression.
    pub const PRIMARY_FIRST: TokenSet = TokenSet::new(&[
        Identifier, Hash, LCurly, LBracket, LParen, KwNew,
    ])
    .union(LITERALS);

    /// FIRST set of an expression.
    pub const EXPR_FIRST: TokenSet = PRIMARY_FIRST.union(PREFIX_OPS);

    /// FIRST set of a statement.
    pub const STMT_FIRST: TokenSet =
        TokenSet::new(&[LCurly, KwIf, KwWhile, KwFor, KwVar, KwReturn]).union(EXPR_FIRST);

    /// FIRST set of a top-level item.
    pub const ITEM_FIRST: TokenSet =
        TokenSet::new(&[KwFunction, KwOpen, KwType]).union(STMT_FIRST);

    /// FIRST set of a type body member.
    pub const TYPE_MEMBER_FIRST: TokenSet =
        TokenSet::new(&[KwPrivate, KwStatic, KwFunction, Identifier]);

    /// Keywords that can only start a statement or declaration. Skipping stops here.
    pub const STMT_KEYWORDS: TokenSet = TokenSet::new(&[
        KwIf, KwWhile, KwFor, KwVar, KwReturn, KwFunction, KwOpen, KwType, KwImport,
    ]);

    /// Synchronization points after a malformed statement.
    pub const STMT_RECOVERY: TokenSet = TokenSet::new(&[SemiColon, RCurly]).union(STMT_KEYWORDS);

    /// Where skipping stops inside a statement list.
    pub const STMT_SYNC: TokenSet = STMT_RECOVERY.union(STMT_FIRST);

    /// Where skipping stops at top level. `}` is junk here, so it is skipped too.
    pub const ITEM_SYNC: TokenSet = ITEM_FIRST.union(TokenSet::new(&[SemiColon, KwImport]));

    /// A `var` missing its name resumes at the type annotation or the initializer.
    pub const VAR_NAME_RECOVERY: TokenSet = TokenSet::new(&[Colon, Eq]).union(STMT_RECOVERY);

    /// Synchronization points after a malformed type member.
    pub const TYPE_MEMBER_SYNC: TokenSet =
        TokenSet::new(&[SemiColon, RCurly, KwPrivate, KwStatic, KwFunction, Identifier]);

    /// Tokens that end a comma-separated list even when they are not its closer.
    pub const LIST_STOP: TokenSet =
        TokenSet::new(&[SemiColon, RCurly, RParen, RBracket]).union(STMT_KEYWORDS);

    /// Scalar type names that turn `name[` into a typed array literal.
    pub const ARRAY_TYPE_NAMES: [&str; 5] = ["int", "long", "ulong", "double", "bool"];
}
