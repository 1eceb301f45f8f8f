//! Lexical analyzer for the Jack language.
//!
//! Converts a character stream into a token stream with a one-token
//! look-behind: the parser reads [`Lexer::current_token_kind`], can
//! [`Lexer::peek`] one token ahead without consuming it, and can
//! [`Lexer::step_back`] to undo the most recent [`Lexer::advance`].
//!
//! # Module Structure
//!
//! - [`error`] — [`LexError`] and its kinds
//! - `cursor` — raw character-position bookkeeping (byte offset, line, column)
//! - `scan` — trivia skipping and single-token recognition
//! - `tests` — unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::token`] — the token types this module produces
//! * [`crate::parser`] — the sole consumer of this module's output

mod cursor;
mod error;
mod scan;


pub use error::{LexError, LexErrorKind};

use crate::token::{Keyword, Span, Token, TokenKind};

/// A lexical analyzer over Jack source text.
///
/// Tied to the input's lifetime (`'a`) so that string and identifier
/// tokens can reference slices of the original source without copying,
/// except where Jack's grammar already requires an owned `String`
/// (string constants, identifiers).
pub struct Lexer<'a> {
    input: &'a str,
    /// Cursor: byte offset of the next unscanned character.
    pos: usize,
    line: usize,
    column: usize,
    /// The token most recently returned by `advance`. Starts as a
    /// zero-width `Eof` sentinel so `current_token_kind` is always valid,
    /// even before the first `advance`.
    current: Token,
    /// Cursor state captured immediately before `current` was scanned;
    /// `step_back` rewinds to this point.
    before_current: (usize, usize, usize),
    /// A token already scanned by `peek` but not yet consumed by `advance`.
    queued: Option<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            pos: 0,
            line: 1,
            column: 1,
            current: Token::new(TokenKind::Eof, Span::start_of_file()),
            before_current: (0, 1, 1),
            queued: None,
        }
    }

    /// Produces the next token and makes it the current one.
    ///
    /// Returns `Ok(true)` if a new token was produced, `Ok(false)` if the
    /// lexer had already delivered `Eof` and there is nothing left to
    /// advance to.
    pub fn advance(&mut self) -> Result<bool, LexError> {
        if matches!(self.current.kind, TokenKind::Eof) && self.queued.is_none() && self.is_eof() {
            return Ok(false);
        }

        self.before_current = (self.pos, self.line, self.column);

        let token = match self.queued.take() {
            Some(t) => t,
            None => self.next_raw_token()?,
        };
        self.current = token;
        Ok(true)
    }

    /// Returns the kind of the next token without consuming it.
    pub fn peek(&mut self) -> Result<&TokenKind, LexError> {
        if self.queued.is_none() {
            let tok = self.next_raw_token()?;
            self.queued = Some(tok);
        }
        Ok(&self.queued.as_ref().unwrap().kind)
    }

    /// Rewinds the lexer so that the next [`Lexer::advance`] re-delivers
    /// the current token. Only one step of rewind is supported (and
    /// needed — the parser never backtracks further), matching spec.md
    /// §4.1's look-behind contract.
    pub fn step_back(&mut self) {
        let (pos, line, column) = self.before_current;
        self.pos = pos;
        self.line = line;
        self.column = column;
        self.queued = None;
        self.current = Token::new(TokenKind::Eof, Span::start_of_file());
    }

    /// The kind of the current token (the last one delivered by `advance`).
    pub fn current_token_kind(&self) -> &TokenKind {
        &self.current.kind
    }

    /// The span of the current token.
    pub fn current_span(&self) -> Span {
        self.current.span
    }

    /// The literal text of the current token, with string-constant quotes
    /// stripped (per spec.md §3's Token data model).
    pub fn current_token_text(&self) -> String {
        match &self.current.kind {
            TokenKind::Keyword(k) => k.as_str().to_string(),
            TokenKind::Symbol(c) => c.to_string(),
            TokenKind::Identifier(s) => s.clone(),
            TokenKind::IntConst(n) => n.to_string(),
            TokenKind::StringConst(s) => s.clone(),
            TokenKind::Eof => String::new(),
        }
    }

    /// Reinitializes the lexer to scan `self.input` from the beginning.
    pub fn reset(&mut self) {
        self.pos = 0;
        self.line = 1;
        self.column = 1;
        self.current = Token::new(TokenKind::Eof, Span::start_of_file());
        self.before_current = (0, 1, 1);
        self.queued = None;
    }

    /// Advances repeatedly, discarding tokens, until the current token is
    /// `keyword` or end of input is reached.
    pub fn advance_until(&mut self, keyword: Keyword) -> Result<(), LexError> {
        loop {
            if matches!(self.current.kind, TokenKind::Keyword(k) if k == keyword) {
                return Ok(());
            }
            if !self.advance()? {
                return Ok(());
            }
        }
    }

    /// Tokenizes the entire input in one pass, for the token-XML dump and
    /// round-trip tests. Always ends with `Eof`.
    pub fn tokenize_all(mut self) -> Result<Vec<Token>, LexError> {
        let mut out = Vec::new();
        loop {
            let produced = self.advance()?;
            let is_eof = matches!(self.current.kind, TokenKind::Eof);
            // An empty input never "produces" a fresh token (the sentinel
            // already reads as Eof), but the output must still end with
            // one Eof entry.
            if produced || out.is_empty() {
                out.push(self.current.clone());
            }
            if is_eof {
                break;
            }
        }
        Ok(out)
    }

    fn next_raw_token(&mut self) -> Result<Token, LexError> {
        self.skip_trivia()?;
        if self.is_eof() {
            let span = Span::new(self.pos, self.pos, self.line, self.column);
            return Ok(Token::new(TokenKind::Eof, span));
        }
        self.scan_token()
    }
}
