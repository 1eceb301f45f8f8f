//! Lexical analysis error types.

use crate::token::Span;

/// The kind of failure that terminated lexing of the current translation
/// unit. Mirrors spec.md §7's `lex-error` kind, narrowed to the specific
/// failure modes the algorithm in §4.1 can hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    UnterminatedString,
    UnterminatedComment,
    InvalidIdentifier,
    UnexpectedEndOfStream,
}

/// An error that occurred during lexical analysis, fatal to the current
/// translation unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub message: String,
    pub span: Span,
}

impl LexError {
    pub fn unterminated_string(span: Span) -> Self {
        LexError {
            kind: LexErrorKind::UnterminatedString,
            message: "unterminated string constant".to_string(),
            span,
        }
    }

    pub fn unterminated_comment(span: Span) -> Self {
        LexError {
            kind: LexErrorKind::UnterminatedComment,
            message: "unterminated block comment".to_string(),
            span,
        }
    }

    pub fn invalid_identifier(found: char, span: Span) -> Self {
        LexError {
            kind: LexErrorKind::InvalidIdentifier,
            message: format!("unexpected character '{}'", found),
            span,
        }
    }

    pub fn unexpected_end_of_stream(span: Span) -> Self {
        LexError {
            kind: LexErrorKind::UnexpectedEndOfStream,
            message: "unexpected end of input".to_string(),
            span,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {}",
            self.span.line, self.span.column, self.message
        )
    }
}

impl std::error::Error for LexError {}
