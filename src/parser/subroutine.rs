//! Subroutine declarations, parameter lists, and subroutine bodies.

use super::Parser;
use crate::error::CompileError;
use crate::symbol_table::Kind;
use crate::token::Keyword;
use crate::vmcode::Segment;

impl<'a> Parser<'a> {
    /// `subroutineDec := ('constructor'|'function'|'method') (type|'void') ID
    /// '(' paramList ')' '{' varDec* statement* '}'`
    pub(super) fn compile_subroutine_dec(&mut self) -> Result<(), CompileError> {
        self.tree_open("subroutineDec");
        self.scopes.subroutine.reset();

        let is_method = self.is_keyword(Keyword::Method);
        let is_constructor = self.is_keyword(Keyword::Constructor);
        if is_constructor {
            self.expect_keyword(Keyword::Constructor)?;
        } else if is_method {
            self.expect_keyword(Keyword::Method)?;
        } else {
            self.expect_keyword(Keyword::Function)?;
        }

        if is_method {
            // Slot 0 is reserved for the implicit receiver; it never
            // appears as a token, so it leaves no parse-tree leaf.
            self.scopes
                .subroutine
                .define("this", &self.class_name.clone(), Kind::Argument)
                .expect("subroutine scope was just reset");
        }

        self.expect_return_type()?;
        let name = self.expect_identifier()?;

        self.expect_symbol('(')?;
        self.tree_open("parameterList");
        self.compile_parameter_list()?;
        self.tree_close();
        self.expect_symbol(')')?;

        self.tree_open("subroutineBody");
        self.expect_symbol('{')?;
        while self.is_keyword(Keyword::Var) {
            self.compile_var_dec()?;
        }

        let n_locals = self.scopes.subroutine.count(Kind::Local);
        self.writer
            .write_function(&format!("{}.{}", self.class_name, name), n_locals);

        if is_method {
            self.writer.write_push(Segment::Argument, 0);
            self.writer.write_pop(Segment::Pointer, 0);
        } else if is_constructor {
            let field_count = self.scopes.class.count(Kind::Field);
            self.writer.write_push(Segment::Constant, field_count);
            self.writer.write_call("Memory.alloc", 1);
            self.writer.write_pop(Segment::Pointer, 0);
        }

        self.tree_open("statements");
        self.compile_statements()?;
        self.tree_close();
        self.expect_symbol('}')?;
        self.tree_close(); // subroutineBody

        self.tree_close(); // subroutineDec
        Ok(())
    }

    /// `paramList := (type ID (',' type ID)*)?`
    fn compile_parameter_list(&mut self) -> Result<(), CompileError> {
        if self.is_symbol(')') {
            return Ok(());
        }
        self.compile_one_parameter()?;
        while self.is_symbol(',') {
            self.expect_symbol(',')?;
            self.compile_one_parameter()?;
        }
        Ok(())
    }

    fn compile_one_parameter(&mut self) -> Result<(), CompileError> {
        let ty = self.expect_type()?;
        let name = self.expect_identifier()?;
        self.scopes
            .subroutine
            .define(&name, &ty, Kind::Argument)
            .map_err(|e| {
                crate::parser::error::SemanticError::new(e.to_string(), self.current_span())
            })?;
        Ok(())
    }

    /// `varDec := 'var' type ID (',' ID)* ';'`
    fn compile_var_dec(&mut self) -> Result<(), CompileError> {
        self.tree_open("varDec");
        self.expect_keyword(Keyword::Var)?;
        let ty = self.expect_type()?;

        let span = self.current_span();
        let name = self.expect_identifier()?;
        self.scopes
            .subroutine
            .define(&name, &ty, Kind::Local)
            .map_err(|e| crate::parser::error::SemanticError::new(e.to_string(), span))?;

        while self.is_symbol(',') {
            self.expect_symbol(',')?;
            let span = self.current_span();
            let name = self.expect_identifier()?;
            self.scopes
                .subroutine
                .define(&name, &ty, Kind::Local)
                .map_err(|e| crate::parser::error::SemanticError::new(e.to_string(), span))?;
        }
        self.expect_symbol(';')?;
        self.tree_close();
        Ok(())
    }
}
