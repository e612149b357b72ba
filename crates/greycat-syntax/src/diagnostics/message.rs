use rowan::TextRange;
use serde::Serialize;

use crate::line_index::serialize_range;

/// Diagnostic kinds ordered by priority (highest priority first).
///
/// When two diagnostics have overlapping spans, the higher-priority one
/// suppresses the lower-priority one. This prevents cascading error noise.
///
/// Priority rationale:
/// - Unclosed delimiters cause massive cascading errors downstream
/// - Expected token errors are root causes the user should fix first
/// - Invalid syntax usage is a specific mistake at a location
/// - Lexical errors never overlap parser errors (the grammar skips those tokens)
/// - Warnings come last
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // These cause cascading errors throughout the rest of the file
    UnclosedBlock,
    UnclosedParen,
    UnclosedBracket,

    // User omitted something required - root cause errors
    ExpectedExpression,
    ExpectedIdentifier,
    ExpectedTypeName,
    ExpectedStatement,
    ExpectedImportPath,
    ExpectedToken,

    // User wrote something that doesn't belong
    EmptyBlock,
    ChainedPrefixOperator,
    UnexpectedToken,

    // Lexical errors
    UnrecognizedCharacter,
    MalformedString,
    UnterminatedComment,

    // Harmless but noisy
    RedundantSemicolon,
}

impl DiagnosticKind {
    /// Default severity for this kind.
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::RedundantSemicolon => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Whether this kind suppresses `other` when spans overlap.
    ///
    /// Uses enum discriminant ordering: lower position = higher priority.
    pub fn suppresses(&self, other: &DiagnosticKind) -> bool {
        self < other
    }

    /// Structural errors are Unclosed* - they cause cascading errors but
    /// should be suppressed by root-cause errors at the same position.
    pub fn is_structural_error(&self) -> bool {
        matches!(
            self,
            Self::UnclosedBlock | Self::UnclosedParen | Self::UnclosedBracket
        )
    }

    /// Root cause errors - user omitted something required.
    pub fn is_root_cause_error(&self) -> bool {
        matches!(
            self,
            Self::ExpectedExpression
                | Self::ExpectedIdentifier
                | Self::ExpectedTypeName
                | Self::ExpectedStatement
                | Self::ExpectedImportPath
                | Self::ExpectedToken
        )
    }

    /// Reported by the tokenizer rather than the grammar.
    pub fn is_lexical(&self) -> bool {
        matches!(
            self,
            Self::UnrecognizedCharacter | Self::MalformedString | Self::UnterminatedComment
        )
    }

    /// Base message for this diagnostic kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnclosedBlock => "missing closing `}`",
            Self::UnclosedParen => "missing closing `)`",
            Self::UnclosedBracket => "missing closing `]`",

            Self::ExpectedExpression => "expected an expression",
            Self::ExpectedIdentifier => "expected an identifier",
            Self::ExpectedTypeName => "expected a type name",
            Self::ExpectedStatement => "expected a statement",
            Self::ExpectedImportPath => "expected a string literal after `import`",
            Self::ExpectedToken => "missing token",

            Self::EmptyBlock => "block must contain at least one statement",
            Self::ChainedPrefixOperator => "prefix operators cannot be chained",
            Self::UnexpectedToken => "unexpected token",

            Self::UnrecognizedCharacter => "unrecognized character",
            Self::MalformedString => "unterminated or malformed string literal",
            Self::UnterminatedComment => "unterminated block comment",

            Self::RedundantSemicolon => "redundant `;`",
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::UnclosedBlock | Self::UnclosedParen | Self::UnclosedBracket => {
                format!("{}; {{}}", self.fallback_message())
            }
            Self::ExpectedToken => "expected {}".to_string(),
            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, msg: Option<&str>) -> String {
        match msg {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    #[serde(serialize_with = "serialize_range")]
    pub(crate) range: TextRange,
    pub(crate) message: String,
}

impl RelatedInfo {
    pub fn new(range: TextRange, message: impl Into<String>) -> Self {
        Self {
            range,
            message: message.into(),
        }
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A single lexical or syntax problem.
///
/// `expected` describes what the grammar wanted at `range`; `found` describes
/// the token that was there instead (`end of file` past the last token).
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub(crate) kind: DiagnosticKind,
    pub(crate) severity: Severity,
    /// The range shown to the user (underlined in output).
    #[serde(serialize_with = "serialize_range")]
    pub(crate) range: TextRange,
    /// The range used for suppression logic. Errors within another error's
    /// suppression_range may be suppressed. Defaults to `range` but can be
    /// set to the enclosing delimiter for better cascading error suppression.
    #[serde(skip)]
    pub(crate) suppression_range: TextRange,
    pub(crate) message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) expected: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) found: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) related: Vec<RelatedInfo>,
}

impl Diagnostic {
    pub(crate) fn new(kind: DiagnosticKind, range: TextRange, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: kind.default_severity(),
            range,
            suppression_range: range,
            message: message.into(),
            expected: None,
            found: None,
            related: Vec::new(),
        }
    }

    pub(crate) fn with_default_message(kind: DiagnosticKind, range: TextRange) -> Self {
        Self::new(kind, range, kind.fallback_message())
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn expected(&self) -> Option<&str> {
        self.expected.as_deref()
    }

    pub fn found(&self) -> Option<&str> {
        self.found.as_deref()
    }

    pub fn related(&self) -> &[RelatedInfo] {
        &self.related
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}..{}: {}",
            self.severity,
            u32::from(self.range.start()),
            u32::from(self.range.end()),
            self.message
        )?;
        if let Some(found) = &self.found {
            write!(f, ", found {}", found)?;
        }
        for related in &self.related {
            write!(
                f,
                " (related: {} at {}..{})",
                related.message,
                u32::from(related.range.start()),
                u32::from(related.range.end())
            )?;
        }
        Ok(())
    }
}
