//! Trivia skipping and single-token recognition.
//!
//! Implements the algorithm of spec.md §4.1: skip whitespace and comments,
//! then dispatch on the first remaining character.

use super::error::LexError;
use super::Lexer;
use crate::token::{Keyword, Span, Token, TokenKind, SYMBOLS};

impl<'a> Lexer<'a> {
    /// Discards whitespace and comments until a token-starting character
    /// (or end of input) is under the cursor.
    pub(super) fn skip_trivia(&mut self) -> Result<(), LexError> {
        loop {
            match self.peek_char() {
                Some(c) if c.is_whitespace() => {
                    self.bump();
                }
                Some('/') if self.peek_char_at(1) == Some('/') => {
                    self.bump();
                    self.bump();
                    while let Some(c) = self.peek_char() {
                        if c == '\n' {
                            break;
                        }
                        self.bump();
                    }
                }
                Some('/') if self.peek_char_at(1) == Some('*') => {
                    let start = Span::new(self.pos, self.pos, self.line, self.column);
                    self.bump();
                    self.bump();
                    loop {
                        if self.peek_char() == Some('*') && self.peek_char_at(1) == Some('/') {
                            self.bump();
                            self.bump();
                            break;
                        }
                        if self.is_eof() {
                            return Err(LexError::unterminated_comment(start));
                        }
                        self.bump();
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    /// Reads exactly one token starting at the current cursor position.
    /// The caller must have already skipped trivia and confirmed the
    /// input is not exhausted.
    pub(super) fn scan_token(&mut self) -> Result<Token, LexError> {
        let start_pos = self.pos;
        let start_line = self.line;
        let start_col = self.column;
        let c = self.peek_char().expect("scan_token called at end of input");

        let kind = if c == '"' {
            self.scan_string(start_line, start_col)?
        } else if c.is_ascii_digit() {
            self.scan_int_const()
        } else if c.is_ascii_alphabetic() {
            self.scan_word()
        } else if SYMBOLS.contains(&c) {
            self.bump();
            TokenKind::Symbol(c)
        } else {
            let span = Span::new(self.pos, self.pos + c.len_utf8(), self.line, self.column);
            return Err(LexError::invalid_identifier(c, span));
        };

        let span = Span::new(start_pos, self.pos, start_line, start_col);
        Ok(Token::new(kind, span))
    }

    fn scan_string(&mut self, start_line: usize, start_col: usize) -> Result<TokenKind, LexError> {
        let open_span = Span::new(self.pos, self.pos + 1, start_line, start_col);
        self.bump(); // opening quote
        let mut value = String::new();
        loop {
            match self.peek_char() {
                None => return Err(LexError::unterminated_string(open_span)),
                Some('\n') => return Err(LexError::unterminated_string(open_span)),
                Some('"') => {
                    self.bump();
                    break;
                }
                Some(c) => {
                    value.push(c);
                    self.bump();
                }
            }
        }
        Ok(TokenKind::StringConst(value))
    }

    fn scan_int_const(&mut self) -> TokenKind {
        let start = self.pos;
        while matches!(self.peek_char(), Some(c) if c.is_ascii_digit()) {
            self.bump();
        }
        let digits = &self.input[start..self.pos];
        // Jack integer constants address a 15-bit unsigned word (0..32767);
        // values outside that range saturate rather than erroring, since
        // spec.md's closed lex-error set has no "literal out of range" kind.
        let value: u32 = digits.parse().unwrap_or(u32::MAX);
        TokenKind::IntConst(value.min(32767) as u16)
    }

    fn scan_word(&mut self) -> TokenKind {
        let start = self.pos;
        while matches!(self.peek_char(), Some(c) if c.is_ascii_alphanumeric() || c == '_') {
            self.bump();
        }
        let text = &self.input[start..self.pos];
        match Keyword::from_str(text) {
            Some(kw) => TokenKind::Keyword(kw),
            None => TokenKind::Identifier(text.to_string()),
        }
    }
}
