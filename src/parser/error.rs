//! Parse-error and semantic-error types.

use crate::token::Span;

/// A grammar violation: missing keyword/delimiter, unexpected token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub span: Span,
}

impl ParseError {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        ParseError {
            message: message.into(),
            span,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {}",
            self.span.line, self.span.column, self.message
        )
    }
}

impl std::error::Error for ParseError {}

/// A reference to an undeclared identifier in a `let` target, a
/// redeclaration within the same scope, or another violation that
/// requires more than grammar shape to detect.
///
/// Per spec.md §9, a lookup failure on a subroutine-call qualifier is
/// *not* a semantic error at this stage — it is reinterpreted as a class
/// name — so `SemanticError` is only ever raised for `let` targets and
/// symbol redeclaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticError {
    pub message: String,
    pub span: Span,
}

impl SemanticError {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        SemanticError {
            message: message.into(),
            span,
        }
    }

    pub fn undeclared_identifier(name: &str, span: Span) -> Self {
        SemanticError::new(format!("undeclared identifier '{}'", name), span)
    }
}

impl std::fmt::Display for SemanticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {}",
            self.span.line, self.span.column, self.message
        )
    }
}

impl std::error::Error for SemanticError {}
