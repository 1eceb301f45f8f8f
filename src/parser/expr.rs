//! Expression, term, and subroutine-call parsing.

use super::Parser;
use crate::error::CompileError;
use crate::parser::error::ParseError;
use crate::symbol_table::Kind;
use crate::token::{Keyword, TokenKind};
use crate::vmcode::{ArithOp, Segment};

impl<'a> Parser<'a> {
    /// Maps a resolved symbol's kind to the VM segment that stores it.
    /// Fields live in the current object, so they are addressed through
    /// `this` rather than through a segment of their own.
    pub(super) fn segment_of(&self, name: &str) -> Segment {
        match self.scopes.kind_of(name) {
            Some(Kind::Static) => Segment::Static,
            Some(Kind::Field) => Segment::This,
            Some(Kind::Argument) => Segment::Argument,
            Some(Kind::Local) => Segment::Local,
            None => unreachable!("caller already checked scopes.contains"),
        }
    }

    pub(super) fn index_of(&self, name: &str) -> u16 {
        self.scopes
            .index_of(name)
            .expect("caller already checked scopes.contains")
    }

    fn binop(c: char) -> Option<ArithOp> {
        match c {
            '+' => Some(ArithOp::Add),
            '-' => Some(ArithOp::Sub),
            '&' => Some(ArithOp::And),
            '|' => Some(ArithOp::Or),
            '<' => Some(ArithOp::Lt),
            '>' => Some(ArithOp::Gt),
            '=' => Some(ArithOp::Eq),
            _ => None,
        }
    }

    /// `expr := term (binop term)*`. Left-to-right, no precedence.
    pub(super) fn compile_expr(&mut self) -> Result<(), CompileError> {
        self.tree_open("expression");
        self.compile_term()?;
        loop {
            let op = match self.current_kind() {
                TokenKind::Symbol('*') => Some('*'),
                TokenKind::Symbol('/') => Some('/'),
                TokenKind::Symbol(c) if Self::binop(c).is_some() => Some(c),
                _ => None,
            };
            let Some(c) = op else { break };
            self.expect_symbol(c)?;
            self.compile_term()?;
            match c {
                '*' => self.writer.write_call("Math.multiply", 2),
                '/' => self.writer.write_call("Math.divide", 2),
                c => self.writer.write_arithmetic(Self::binop(c).unwrap()),
            }
        }
        self.tree_close();
        Ok(())
    }

    /// `term := INT | STR | keywordLit | ID | ID '[' expr ']' | subroutineCall
    /// | '(' expr ')' | unaryOp term`
    fn compile_term(&mut self) -> Result<(), CompileError> {
        self.tree_open("term");
        match self.current_kind() {
            TokenKind::IntConst(n) => {
                self.record_leaf();
                self.advance()?;
                self.writer.write_push(Segment::Constant, n);
            }
            TokenKind::StringConst(s) => {
                self.record_leaf();
                self.advance()?;
                self.writer.write_push(Segment::Constant, s.chars().count() as u16);
                self.writer.write_call("String.new", 1);
                for c in s.chars() {
                    self.writer.write_push(Segment::Constant, c as u16);
                    self.writer.write_call("String.appendChar", 2);
                }
            }
            TokenKind::Keyword(Keyword::True) => {
                self.expect_keyword(Keyword::True)?;
                self.writer.write_push(Segment::Constant, 0);
                self.writer.write_arithmetic(ArithOp::Not);
            }
            TokenKind::Keyword(Keyword::False) => {
                self.expect_keyword(Keyword::False)?;
                self.writer.write_push(Segment::Constant, 0);
            }
            TokenKind::Keyword(Keyword::Null) => {
                self.expect_keyword(Keyword::Null)?;
                self.writer.write_push(Segment::Constant, 0);
            }
            TokenKind::Keyword(Keyword::This) => {
                self.expect_keyword(Keyword::This)?;
                self.writer.write_push(Segment::Pointer, 0);
            }
            TokenKind::Symbol('(') => {
                self.expect_symbol('(')?;
                self.compile_expr()?;
                self.expect_symbol(')')?;
            }
            TokenKind::Symbol('-') => {
                self.expect_symbol('-')?;
                self.compile_term()?;
                self.writer.write_arithmetic(ArithOp::Neg);
            }
            TokenKind::Symbol('~') => {
                self.expect_symbol('~')?;
                self.compile_term()?;
                self.writer.write_arithmetic(ArithOp::Not);
            }
            TokenKind::Identifier(_) => self.compile_identifier_term()?,
            other => {
                return Err(ParseError::new(
                    format!("expected a term, found {}", other.describe()),
                    self.current_span(),
                )
                .into())
            }
        }
        self.tree_close();
        Ok(())
    }

    /// Disambiguates the four identifier-led term forms by looking one
    /// token ahead: `ID`, `ID '[' expr ']'`, `ID '(' ...`, `ID '.' ID '('
    /// ...`.
    fn compile_identifier_term(&mut self) -> Result<(), CompileError> {
        let next = self.peek_kind()?;
        match next {
            TokenKind::Symbol('[') => {
                let span = self.current_span();
                let name = self.expect_identifier()?;
                if !self.scopes.contains(&name) {
                    return Err(crate::parser::error::SemanticError::undeclared_identifier(
                        &name, span,
                    )
                    .into());
                }
                self.writer.write_push(self.segment_of(&name), self.index_of(&name));
                self.expect_symbol('[')?;
                self.compile_expr()?;
                self.expect_symbol(']')?;
                self.writer.write_arithmetic(ArithOp::Add);
                self.writer.write_pop(Segment::Pointer, 1);
                self.writer.write_push(Segment::That, 0);
            }
            TokenKind::Symbol('(') | TokenKind::Symbol('.') => {
                self.compile_subroutine_call()?;
            }
            _ => {
                let span = self.current_span();
                let name = self.expect_identifier()?;
                if !self.scopes.contains(&name) {
                    return Err(crate::parser::error::SemanticError::undeclared_identifier(
                        &name, span,
                    )
                    .into());
                }
                self.writer.write_push(self.segment_of(&name), self.index_of(&name));
            }
        }
        Ok(())
    }

    /// `subroutineCall := ID '(' exprList ')' | ID '.' ID '(' exprList ')'`
    ///
    /// Resolution of the qualified form follows spec.md §4.2: a qualifier
    /// that resolves as a local/field/argument name is an instance; any
    /// other identifier is reinterpreted as a class name rather than
    /// treated as an undeclared-identifier error (§9).
    pub(super) fn compile_subroutine_call(&mut self) -> Result<(), CompileError> {
        let first = self.expect_identifier()?;

        if self.is_symbol('(') {
            self.writer.write_push(Segment::Pointer, 0);
            self.expect_symbol('(')?;
            let n = self.compile_expr_list()?;
            self.expect_symbol(')')?;
            self.writer
                .write_call(format!("{}.{}", self.class_name, first), n + 1);
            return Ok(());
        }

        self.expect_symbol('.')?;
        let method = self.expect_identifier()?;
        self.expect_symbol('(')?;

        if self.scopes.contains(&first) {
            let ty = self.scopes.type_of(&first).unwrap().to_string();
            self.writer.write_push(self.segment_of(&first), self.index_of(&first));
            let n = self.compile_expr_list()?;
            self.expect_symbol(')')?;
            self.writer.write_call(format!("{}.{}", ty, method), n + 1);
        } else {
            let n = self.compile_expr_list()?;
            self.expect_symbol(')')?;
            self.writer.write_call(format!("{}.{}", first, method), n);
        }
        Ok(())
    }

    /// `exprList := (expr (',' expr)*)?`. Returns the argument count.
    fn compile_expr_list(&mut self) -> Result<u16, CompileError> {
        self.tree_open("expressionList");
        let mut n = 0u16;
        if !self.is_symbol(')') {
            self.compile_expr()?;
            n += 1;
            while self.is_symbol(',') {
                self.expect_symbol(',')?;
                self.compile_expr()?;
                n += 1;
            }
        }
        self.tree_close();
        Ok(n)
    }
}
