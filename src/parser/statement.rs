//! Statement parsing: `let`, `if`, `while`, `do`, `return`.

use super::Parser;
use crate::error::CompileError;
use crate::parser::error::SemanticError;
use crate::token::{Keyword, TokenKind};
use crate::vmcode::Segment;

impl<'a> Parser<'a> {
    /// `statement*`, stopping at the first token that cannot start one.
    pub(super) fn compile_statements(&mut self) -> Result<(), CompileError> {
        loop {
            match self.current_kind() {
                TokenKind::Keyword(Keyword::Let) => self.compile_let()?,
                TokenKind::Keyword(Keyword::If) => self.compile_if()?,
                TokenKind::Keyword(Keyword::While) => self.compile_while()?,
                TokenKind::Keyword(Keyword::Do) => self.compile_do()?,
                TokenKind::Keyword(Keyword::Return) => self.compile_return()?,
                _ => break,
            }
        }
        Ok(())
    }

    /// `letStmt := 'let' ID ('[' expr ']')? '=' expr ';'`
    fn compile_let(&mut self) -> Result<(), CompileError> {
        self.tree_open("letStatement");
        self.expect_keyword(Keyword::Let)?;

        let span = self.current_span();
        let name = self.expect_identifier()?;
        if !self.scopes.contains(&name) {
            return Err(SemanticError::undeclared_identifier(&name, span).into());
        }

        let indexed = self.is_symbol('[');
        if indexed {
            self.writer.write_push(self.segment_of(&name), self.index_of(&name));
            self.expect_symbol('[')?;
            self.compile_expr()?;
            self.expect_symbol(']')?;
            self.writer.write_arithmetic(crate::vmcode::ArithOp::Add);
        }

        self.expect_symbol('=')?;
        self.compile_expr()?;
        self.expect_symbol(';')?;

        if indexed {
            self.writer.write_pop(Segment::Temp, 0);
            self.writer.write_pop(Segment::Pointer, 1);
            self.writer.write_push(Segment::Temp, 0);
            self.writer.write_pop(Segment::That, 0);
        } else {
            self.writer.write_pop(self.segment_of(&name), self.index_of(&name));
        }

        self.tree_close();
        Ok(())
    }

    /// `ifStmt := 'if' '(' expr ')' '{' statements '}' ('else' '{' statements '}')?`
    fn compile_if(&mut self) -> Result<(), CompileError> {
        self.tree_open("ifStatement");
        self.expect_keyword(Keyword::If)?;
        let (label_true, label_false, label_end) = self.next_if_labels();

        self.expect_symbol('(')?;
        self.compile_expr()?;
        self.expect_symbol(')')?;

        self.writer.write_if(&label_true);
        self.writer.write_goto(&label_false);
        self.writer.write_label(&label_true);

        self.expect_symbol('{')?;
        self.compile_statements()?;
        self.expect_symbol('}')?;

        if self.is_keyword(Keyword::Else) {
            self.writer.write_goto(&label_end);
            self.writer.write_label(&label_false);
            self.expect_keyword(Keyword::Else)?;
            self.expect_symbol('{')?;
            self.compile_statements()?;
            self.expect_symbol('}')?;
            self.writer.write_label(&label_end);
        } else {
            self.writer.write_label(&label_false);
        }

        self.tree_close();
        Ok(())
    }

    /// `whileStmt := 'while' '(' expr ')' '{' statements '}'`
    fn compile_while(&mut self) -> Result<(), CompileError> {
        self.tree_open("whileStatement");
        self.expect_keyword(Keyword::While)?;
        let (label_exp, label_end) = self.next_while_labels();

        self.writer.write_label(&label_exp);
        self.expect_symbol('(')?;
        self.compile_expr()?;
        self.expect_symbol(')')?;
        self.writer.write_arithmetic(crate::vmcode::ArithOp::Not);
        self.writer.write_if(&label_end);

        self.expect_symbol('{')?;
        self.compile_statements()?;
        self.expect_symbol('}')?;
        self.writer.write_goto(&label_exp);
        self.writer.write_label(&label_end);

        self.tree_close();
        Ok(())
    }

    /// `doStmt := 'do' subroutineCall ';'`
    fn compile_do(&mut self) -> Result<(), CompileError> {
        self.tree_open("doStatement");
        self.expect_keyword(Keyword::Do)?;
        self.compile_subroutine_call()?;
        self.expect_symbol(';')?;
        self.writer.write_pop(Segment::Temp, 0);
        self.tree_close();
        Ok(())
    }

    /// `returnStmt := 'return' expr? ';'`
    fn compile_return(&mut self) -> Result<(), CompileError> {
        self.tree_open("returnStatement");
        self.expect_keyword(Keyword::Return)?;
        if self.is_symbol(';') {
            self.writer.write_push(Segment::Constant, 0);
        } else {
            self.compile_expr()?;
        }
        self.expect_symbol(';')?;
        self.writer.write_return();
        self.tree_close();
        Ok(())
    }
}
