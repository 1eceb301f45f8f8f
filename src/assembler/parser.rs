//! Line-oriented recognizer for Hack assembly text (spec.md §6's "line-
//! based, optional label `(NAME)`, optional A-instruction `@value`,
//! optional C-instruction `dest=comp;jump`" grammar).
//!
//! Grounded in `examples/original_source/hack-assembler/Parser.{h,cc}`'s
//! `HackAsmParser`, collapsed from its five-variant `InstructionType`
//! enum (which separately tags `COMMENT`/`EMPTY`/`INVALID_INSTRUCTION`)
//! down to the three real instruction kinds, since comments and blank
//! lines are simply skipped rather than surfaced to the assembler.

use super::AsmError;

/// One recognized line of Hack assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// `@value` — `value` is either a decimal literal or a symbol to be
    /// resolved by the symbol table.
    Address(String),
    /// `(NAME)` — a label declaration, not itself an instruction.
    Label(String),
    /// `dest=comp;jump`, with `dest` and `jump` defaulting to empty when
    /// omitted.
    Compute {
        dest: String,
        comp: String,
        jump: String,
    },
}

fn strip_comment(line: &str) -> &str {
    match line.find("//") {
        Some(idx) => &line[..idx],
        None => line,
    }
}

/// Parses one already-trimmed, non-empty line of assembly.
fn parse_nonblank(line: usize, text: &str) -> Result<Instruction, AsmError> {
    if let Some(inner) = text.strip_prefix('(') {
        let name = inner
            .strip_suffix(')')
            .ok_or_else(|| AsmError::new(format!("unterminated label '{}'", text), line))?;
        if name.is_empty() {
            return Err(AsmError::new("empty label", line));
        }
        return Ok(Instruction::Label(name.to_string()));
    }

    if let Some(value) = text.strip_prefix('@') {
        if value.is_empty() {
            return Err(AsmError::new("empty A-instruction", line));
        }
        return Ok(Instruction::Address(value.to_string()));
    }

    // C-instruction: `dest=comp;jump`, `dest` and `jump` both optional.
    let (dest, rest) = match text.split_once('=') {
        Some((d, rest)) => (d.to_string(), rest),
        None => (String::new(), text),
    };
    let (comp, jump) = match rest.split_once(';') {
        Some((c, j)) => (c.to_string(), j.to_string()),
        None => (rest.to_string(), String::new()),
    };
    if comp.is_empty() {
        return Err(AsmError::new(format!("missing comp in '{}'", text), line));
    }
    Ok(Instruction::Compute { dest, comp, jump })
}

/// Recognizes every non-comment, non-blank line of `source` in order.
pub fn parse(source: &str) -> Result<Vec<(usize, Instruction)>, AsmError> {
    let mut instructions = Vec::new();
    for (idx, raw_line) in source.lines().enumerate() {
        let line = idx + 1;
        let trimmed = strip_comment(raw_line).trim();
        if trimmed.is_empty() {
            continue;
        }
        instructions.push((line, parse_nonblank(line, trimmed)?));
    }
    Ok(instructions)
}
