//! The Hack platform translation toolchain.
//!
//! This crate implements the three translation stages of the Nand2Tetris
//! toolchain:
//!
//! - [`lexer`] + [`symbol_table`] + [`parser`] — compiles Jack source into
//!   VM instructions ([`vmcode`]).
//! - [`vm`] + [`asmgen`] — translates a stream of VM instructions into Hack
//!   assembly.
//! - [`assembler`] — assembles Hack assembly into 16-bit machine code.
//!
//! # Pipeline
//!
//! ```text
//! .jack --lexer--> tokens --parser--> .vm --vm::parse--> commands --asmgen--> .asm --assembler--> .hack
//! ```
//!
//! Each stage is independent and single-threaded; translation units share
//! no mutable state. See [`token`] for the Jack lexical model and
//! [`vmcode`] for the VM instruction model that bridges the Jack and VM
//! stages.

pub mod ast;
pub mod asmgen;
pub mod assembler;
pub mod diagnostics;
pub mod driver;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod symbol_table;
pub mod token;
pub mod vm;
pub mod vmcode;
pub mod xml;
