//! Errors raised while lowering VM instructions to Hack assembly.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsmGenError {
    pub message: String,
    pub line: usize,
}

impl AsmGenError {
    pub fn new(message: impl Into<String>, line: usize) -> Self {
        AsmGenError {
            message: message.into(),
            line,
        }
    }
}

impl std::fmt::Display for AsmGenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for AsmGenError {}
