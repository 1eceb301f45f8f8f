//! Token navigation and basic parsing operations.

use super::Parser;
use crate::error::CompileError;
use crate::parser::error::ParseError;
use crate::token::{Keyword, Span, TokenKind};

impl<'a> Parser<'a> {
    pub(super) fn current_kind(&self) -> TokenKind {
        self.lexer.current_token_kind().clone()
    }

    pub(super) fn current_span(&self) -> Span {
        self.lexer.current_span()
    }

    /// Advances the underlying lexer by one token, converting a lex
    /// failure into the unified [`CompileError`].
    pub(super) fn advance(&mut self) -> Result<(), CompileError> {
        self.lexer.advance()?;
        Ok(())
    }

    pub(super) fn peek_kind(&mut self) -> Result<TokenKind, CompileError> {
        Ok(self.lexer.peek()?.clone())
    }

    pub(super) fn is_symbol(&self, c: char) -> bool {
        matches!(self.current_kind(), TokenKind::Symbol(s) if s == c)
    }

    pub(super) fn is_keyword(&self, k: Keyword) -> bool {
        matches!(self.current_kind(), TokenKind::Keyword(kw) if kw == k)
    }

    pub(super) fn tree_open(&mut self, tag: &'static str) {
        if let Some(tree) = &mut self.tree {
            tree.open(tag);
        }
    }

    pub(super) fn tree_close(&mut self) {
        if let Some(tree) = &mut self.tree {
            tree.close();
        }
    }

    /// If the tree dump is enabled, appends the current token to the
    /// innermost open parse-tree scope.
    pub(super) fn record_leaf(&mut self) {
        if let Some(tree) = &mut self.tree {
            let kind = self.lexer.current_token_kind();
            let tag = match kind {
                TokenKind::Keyword(_) => "keyword",
                TokenKind::Symbol(_) => "symbol",
                TokenKind::Identifier(_) => "identifier",
                TokenKind::IntConst(_) => "integerConstant",
                TokenKind::StringConst(_) => "stringConstant",
                TokenKind::Eof => "eof",
            };
            let text = self.lexer.current_token_text();
            tree.leaf(tag, text);
        }
    }

    pub(super) fn expect_symbol(&mut self, c: char) -> Result<(), CompileError> {
        if self.is_symbol(c) {
            self.record_leaf();
            self.advance()
        } else {
            Err(ParseError::new(
                format!("expected '{}', found {}", c, self.current_kind().describe()),
                self.current_span(),
            )
            .into())
        }
    }

    pub(super) fn expect_keyword(&mut self, k: Keyword) -> Result<(), CompileError> {
        if self.is_keyword(k) {
            self.record_leaf();
            self.advance()
        } else {
            Err(ParseError::new(
                format!(
                    "expected '{}', found {}",
                    k.as_str(),
                    self.current_kind().describe()
                ),
                self.current_span(),
            )
            .into())
        }
    }

    pub(super) fn expect_identifier(&mut self) -> Result<String, CompileError> {
        if let TokenKind::Identifier(name) = self.current_kind() {
            self.record_leaf();
            self.advance()?;
            Ok(name)
        } else {
            Err(ParseError::new(
                format!("expected identifier, found {}", self.current_kind().describe()),
                self.current_span(),
            )
            .into())
        }
    }

    /// Parses a `type` production: `int | char | boolean | ID`.
    pub(super) fn expect_type(&mut self) -> Result<String, CompileError> {
        match self.current_kind() {
            TokenKind::Keyword(Keyword::Int) => {
                self.record_leaf();
                self.advance()?;
                Ok("int".to_string())
            }
            TokenKind::Keyword(Keyword::Char) => {
                self.record_leaf();
                self.advance()?;
                Ok("char".to_string())
            }
            TokenKind::Keyword(Keyword::Boolean) => {
                self.record_leaf();
                self.advance()?;
                Ok("boolean".to_string())
            }
            TokenKind::Identifier(name) => {
                self.record_leaf();
                self.advance()?;
                Ok(name)
            }
            other => Err(ParseError::new(
                format!("expected a type, found {}", other.describe()),
                self.current_span(),
            )
            .into()),
        }
    }

    /// Parses a subroutine return type: `type | void`.
    pub(super) fn expect_return_type(&mut self) -> Result<String, CompileError> {
        if self.is_keyword(Keyword::Void) {
            self.record_leaf();
            self.advance()?;
            return Ok("void".to_string());
        }
        self.expect_type()
    }
}
