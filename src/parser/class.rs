//! Class and class-variable-declaration parsing.

use super::error::SemanticError;
use super::Parser;
use crate::error::CompileError;
use crate::symbol_table::Kind;
use crate::token::Keyword;

impl<'a> Parser<'a> {
    /// `class := 'class' ID '{' classVarDec* subroutineDec* '}'`
    ///
    /// Resets the class-scope table and records the class name before
    /// parsing any member, since subroutine code generation needs both
    /// (to qualify emitted labels and subroutine names) even while the
    /// body is still being walked.
    pub(super) fn compile_class(&mut self) -> Result<(), CompileError> {
        self.tree_open("class");
        self.expect_keyword(Keyword::Class)?;
        self.scopes.class.reset();
        self.class_name = self.expect_identifier()?;
        self.expect_symbol('{')?;

        while self.is_keyword(Keyword::Static) || self.is_keyword(Keyword::Field) {
            self.compile_class_var_dec()?;
        }
        while self.starts_subroutine_dec() {
            self.compile_subroutine_dec()?;
        }

        self.expect_symbol('}')?;
        self.tree_close();
        Ok(())
    }

    pub(super) fn starts_subroutine_dec(&self) -> bool {
        self.is_keyword(Keyword::Constructor)
            || self.is_keyword(Keyword::Function)
            || self.is_keyword(Keyword::Method)
    }

    /// `classVarDec := ('static'|'field') type ID (',' ID)* ';'`
    fn compile_class_var_dec(&mut self) -> Result<(), CompileError> {
        self.tree_open("classVarDec");
        let kind = if self.is_keyword(Keyword::Static) {
            self.expect_keyword(Keyword::Static)?;
            Kind::Static
        } else {
            self.expect_keyword(Keyword::Field)?;
            Kind::Field
        };
        let ty = self.expect_type()?;

        let span = self.current_span();
        let name = self.expect_identifier()?;
        self.scopes
            .class
            .define(&name, &ty, kind)
            .map_err(|e| SemanticError::new(e.to_string(), span))?;

        while self.is_symbol(',') {
            self.expect_symbol(',')?;
            let span = self.current_span();
            let name = self.expect_identifier()?;
            self.scopes
                .class
                .define(&name, &ty, kind)
                .map_err(|e| SemanticError::new(e.to_string(), span))?;
        }
        self.expect_symbol(';')?;
        self.tree_close();
        Ok(())
    }
}
