//! Errors raised while assembling Hack assembly text into machine code.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsmError {
    pub message: String,
    pub line: usize,
}

impl AsmError {
    pub fn new(message: impl Into<String>, line: usize) -> Self {
        AsmError {
            message: message.into(),
            line,
        }
    }
}

impl std::fmt::Display for AsmError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for AsmError {}
