//! Diagnostic message types and related structures.

use rowan::TextRange;
use serde::{Serialize, Serializer};

fn serialize_text_range<S: Serializer>(range: &TextRange, s: S) -> Result<S::Ok, S::Error> {
    use serde::ser::SerializeStruct;
    let mut state = s.serialize_struct("TextRange", 2)?;
    state.serialize_field("start", &u32::from(range.start()))?;
    state.serialize_field("end", &u32::from(range.end()))?;
    state.end()
}

/// Severity level of a diagnostic. Diagnostics are partitioned by severity
/// into errors, warnings, and notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Severity {
    #[default]
    Error,
    Warning,
    Note,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Note => write!(f, "note"),
        }
    }
}

/// Category of a diagnostic, independent of its rendered message text.
///
/// Lets callers match on the kind of problem (e.g. to count unresolved
/// forward references) without scraping the message string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiagnosticKind {
    /// The parser expected a specific token and found something else.
    UnexpectedToken,
    /// A delimiter (`{`, `(`, `<`) was opened but never closed.
    UnclosedDelimiter,
    /// A declaration was missing its `;` or `{` terminator.
    MissingDeclarationEnd,
    /// A protocol reference, ivar, or property entry was malformed and skipped during recovery.
    SkippedMalformedEntry,
    /// A `@implementation`/`@interface` had no matching counterpart in the paired file.
    UnresolvedForwardReference,
    /// An ownership qualifier conflicts with the declared type's natural ownership.
    MismatchedOwnership,
    /// A property's declared type could not be mapped to a Swift type.
    UnmappableType,
    /// A method implementation had no corresponding declaration in the interface.
    UndeclaredMethodImplementation,
}

impl DiagnosticKind {
    pub fn default_message(self) -> &'static str {
        match self {
            DiagnosticKind::UnexpectedToken => "unexpected token",
            DiagnosticKind::UnclosedDelimiter => "unclosed delimiter",
            DiagnosticKind::MissingDeclarationEnd => "expected `;` or `{` to end declaration",
            DiagnosticKind::SkippedMalformedEntry => "skipped malformed entry during recovery",
            DiagnosticKind::UnresolvedForwardReference => {
                "no implementation or interface found for this forward declaration"
            }
            DiagnosticKind::MismatchedOwnership => {
                "ownership qualifier does not match the declared type"
            }
            DiagnosticKind::UnmappableType => "no Swift equivalent for this Objective-C type",
            DiagnosticKind::UndeclaredMethodImplementation => {
                "method implementation has no matching declaration"
            }
        }
    }
}

/// A suggested fix for a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fix {
    pub(crate) replacement: String,
    pub(crate) description: String,
}

impl Fix {
    pub fn new(replacement: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            replacement: replacement.into(),
            description: description.into(),
        }
    }
}

/// Related location information for a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedInfo {
    #[serde(serialize_with = "serialize_text_range")]
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
}

/// A diagnostic message with location, message, severity, and optional fix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticMessage {
    pub(crate) severity: Severity,
    pub(crate) kind: Option<DiagnosticKind>,
    #[serde(serialize_with = "serialize_text_range")]
    pub(crate) range: TextRange,
    pub(crate) message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) fix: Option<Fix>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) related: Vec<RelatedInfo>,
}

impl DiagnosticMessage {
    pub(crate) fn new(severity: Severity, range: TextRange, message: impl Into<String>) -> Self {
        Self {
            severity,
            kind: None,
            range,
            message: message.into(),
            fix: None,
            related: Vec::new(),
        }
    }

    pub(crate) fn error(range: TextRange, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, range, message)
    }

    pub(crate) fn warning(range: TextRange, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, range, message)
    }

    pub(crate) fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub(crate) fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }

    pub(crate) fn is_note(&self) -> bool {
        self.severity == Severity::Note
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn kind(&self) -> Option<DiagnosticKind> {
        self.kind
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}..{}: {}",
            self.severity,
            u32::from(self.range.start()),
            u32::from(self.range.end()),
            self.message
        )?;
        if let Some(fix) = &self.fix {
            write!(f, " (fix: {})", fix.description)?;
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
