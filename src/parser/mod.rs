//! Recursive-descent parser and VM code generator for the Jack language.
//!
//! This is the only emitter of VM code in the toolchain; the lexer and
//! symbol table are side-effect-free with respect to VM output (spec.md
//! §4.2). The parser walks the grammar with one token of look-ahead,
//! provided by [`crate::lexer::Lexer::peek`]/`step_back`, and maintains
//! the two-scope symbol table ([`crate::symbol_table::Scopes`]) plus the
//! class-level `if`/`while` label counters described in spec.md §4.2 and
//! §9.
//!
//! # Grammar
//!
//! ```text
//! class          := 'class' ID '{' classVarDec* subroutineDec* '}'
//! classVarDec    := ('static'|'field') type ID (',' ID)* ';'
//! subroutineDec  := ('constructor'|'function'|'method') (type|'void') ID
//!                   '(' paramList ')' '{' varDec* statement* '}'
//! paramList      := (type ID (',' type ID)*)?
//! varDec         := 'var' type ID (',' ID)* ';'
//! statement      := letStmt | ifStmt | whileStmt | doStmt | returnStmt
//! expr           := term (binop term)*
//! term           := INT | STR | keywordLit | ID | ID '[' expr ']'
//!                 | subroutineCall | '(' expr ')' | unaryOp term
//! subroutineCall := ID '(' exprList ')' | ID '.' ID '(' exprList ')'
//! ```
//!
//! # Module Structure
//!
//! - [`error`] — [`ParseError`] and [`SemanticError`]
//! - `helpers` — token navigation and basic parsing operations
//! - `class` — class and class-variable-declaration parsing
//! - `subroutine` — subroutine declarations, parameter lists, bodies
//! - `statement` — statement parsing
//! - `expr` — expression, term, and subroutine-call parsing
//!
//! # See Also
//!
//! * [`crate::lexer`] — produces the token stream this module consumes
//! * [`crate::symbol_table`] — the two-scope table this module maintains
//! * [`crate::vmcode`] — the VM instruction model this module emits

mod class;
mod error;
mod expr;
mod helpers;
mod statement;
mod subroutine;

#[cfg(test)]
mod tests;

pub use error::{ParseError, SemanticError};

use crate::ast::TreeBuilder;
use crate::error::CompileError;
use crate::lexer::Lexer;
use crate::symbol_table::Scopes;
use crate::vmcode::VmWriter;

/// A recursive-descent parser and code generator for one Jack class.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    scopes: Scopes,
    /// Set while parsing the enclosing `class`, used to qualify every
    /// emitted subroutine name and to resolve bare subroutine calls.
    class_name: String,
    writer: VmWriter,
    /// Class-scoped `if` counter (spec.md §3 invariant 3 and §9).
    if_counter: u16,
    /// Class-scoped `while` counter.
    while_counter: u16,
    /// Present only when a parse-tree dump was requested.
    tree: Option<TreeBuilder>,
}

/// The result of compiling one Jack class: the emitted VM code and,
/// optionally, the parse tree.
pub struct CompiledClass {
    pub vm_code: String,
    pub tree: Option<crate::ast::Node>,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Self {
        Parser {
            lexer: Lexer::new(source),
            scopes: Scopes::new(),
            class_name: String::new(),
            writer: VmWriter::new(),
            if_counter: 0,
            while_counter: 0,
            tree: None,
        }
    }

    /// Enables parse-tree construction alongside code generation.
    pub fn with_tree(mut self) -> Self {
        self.tree = Some(TreeBuilder::new());
        self
    }

    /// Parses and compiles one Jack translation unit, starting from the
    /// `class` keyword.
    pub fn compile(mut self) -> Result<CompiledClass, CompileError> {
        self.advance()?;
        self.compile_class()?;
        Ok(CompiledClass {
            vm_code: self.writer.render(),
            tree: self.tree.and_then(|t| t.finish()),
        })
    }

    /// Mints the next class-scoped `if` label triple.
    pub(crate) fn next_if_labels(&mut self) -> (String, String, String) {
        let i = self.if_counter;
        self.if_counter += 1;
        (
            format!("IF_TRUE{}", i),
            format!("IF_FALSE{}", i),
            format!("IF_END{}", i),
        )
    }

    /// Mints the next class-scoped `while` label pair.
    pub(crate) fn next_while_labels(&mut self) -> (String, String) {
        let i = self.while_counter;
        self.while_counter += 1;
        (format!("WHILE_EXP{}", i), format!("WHILE_END{}", i))
    }
}
