//! Line-oriented VM instruction parser (spec.md §4.4).
//!
//! One line of VM source is one instruction. [`VmParser`] strips inline
//! comments and whitespace, discards blank lines, and recognizes each of
//! the nine instruction kinds onto the [`Command`] model shared with the
//! Jack compiler's emitter ([`crate::vmcode`]).
//!
//! Beyond recognition, the parser tracks the two pieces of state spec.md
//! §4.4 says must be "surfaced to the emitter" but that the VM grammar
//! itself doesn't carry:
//!
//! - the name of the *enclosing function*, updated every time a
//!   `function` instruction is read, so `label`/`goto`/`if-goto` can be
//!   qualified by it;
//! - a *return-site counter*, keyed by the name of the function being
//!   called (not the caller), incremented every time that function is
//!   called anywhere in the translation unit. Keying by callee is what
//!   keeps the assembly emitter's minted return labels
//!   (`unit.F$ret.k` — spec.md §4.5) unique: two call sites to the same
//!   `F`, whether from the same or different callers, must not collide.


mod error;

pub use error::VmParseError;

use std::collections::HashMap;

use crate::vmcode::{ArithOp, Command, Segment};

/// One recognized VM instruction, its 1-indexed source line, and — only
/// for `call` — the return-site index minted for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub command: Command,
    pub line: usize,
    pub return_index: Option<u32>,
}

/// Recognizes VM instruction text one line at a time.
pub struct VmParser<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
    current_function: Option<String>,
    return_counters: HashMap<String, u32>,
}

impl<'a> VmParser<'a> {
    pub fn new(source: &'a str) -> Self {
        VmParser {
            lines: source.lines().enumerate(),
            current_function: None,
            return_counters: HashMap::new(),
        }
    }

    /// The function the most recently parsed instruction is inside, or
    /// `None` if no `function` instruction has been seen yet (e.g. for
    /// bootstrap code emitted before the first function declaration).
    pub fn current_function(&self) -> Option<&str> {
        self.current_function.as_deref()
    }

    /// Mints the next return-site index for a call to `function`, keyed
    /// the same way calls parsed from source are (per callee, across
    /// every caller). Exposed so a driver can synthesize a `call` that
    /// never appears literally in the `.vm` source, such as the
    /// bootstrap's `call Sys.init 0`.
    pub fn mint_return_index(&mut self, function: &str) -> u32 {
        let counter = self.return_counters.entry(function.to_string()).or_insert(0);
        let index = *counter;
        *counter += 1;
        index
    }

    fn strip_comment(line: &str) -> &str {
        match line.find("//") {
            Some(idx) => &line[..idx],
            None => line,
        }
    }

    fn require_token<'b>(
        parts: &mut std::str::SplitWhitespace<'b>,
        what: &str,
        head: &str,
        line: usize,
    ) -> Result<&'b str, VmParseError> {
        parts
            .next()
            .ok_or_else(|| VmParseError::new(format!("'{}' expects {}", head, what), line))
    }

    fn parse_line(
        &mut self,
        line: usize,
        text: &str,
    ) -> Result<Option<Instruction>, VmParseError> {
        let stripped = Self::strip_comment(text).trim();
        if stripped.is_empty() {
            return Ok(None);
        }

        let mut parts = stripped.split_whitespace();
        let head = parts.next().expect("non-empty line has at least one token");

        let command = match head {
            "push" | "pop" => {
                let segment_name = Self::require_token(&mut parts, "a segment", head, line)?;
                let index_text = Self::require_token(&mut parts, "an index", head, line)?;
                let segment = Segment::from_str(segment_name).ok_or_else(|| {
                    VmParseError::new(format!("unknown segment '{}'", segment_name), line)
                })?;
                let index: u16 = index_text.parse().map_err(|_| {
                    VmParseError::new(format!("invalid index '{}'", index_text), line)
                })?;
                if head == "push" {
                    Command::Push { segment, index }
                } else {
                    Command::Pop { segment, index }
                }
            }
            "add" | "sub" | "neg" | "eq" | "gt" | "lt" | "and" | "or" | "not" => {
                Command::Arithmetic(ArithOp::from_str(head).expect("head matched an ArithOp"))
            }
            "label" => {
                let name = Self::require_token(&mut parts, "a label name", head, line)?;
                Command::Label(name.to_string())
            }
            "goto" => {
                let name = Self::require_token(&mut parts, "a label name", head, line)?;
                Command::Goto(name.to_string())
            }
            "if-goto" => {
                let name = Self::require_token(&mut parts, "a label name", head, line)?;
                Command::IfGoto(name.to_string())
            }
            "function" => {
                let name = Self::require_token(&mut parts, "a function name", head, line)?;
                let n_text = Self::require_token(&mut parts, "a local count", head, line)?;
                let n_locals: u16 = n_text.parse().map_err(|_| {
                    VmParseError::new(format!("invalid local count '{}'", n_text), line)
                })?;
                Command::Function {
                    name: name.to_string(),
                    n_locals,
                }
            }
            "call" => {
                let name = Self::require_token(&mut parts, "a function name", head, line)?;
                let n_text = Self::require_token(&mut parts, "an argument count", head, line)?;
                let n_args: u16 = n_text.parse().map_err(|_| {
                    VmParseError::new(format!("invalid argument count '{}'", n_text), line)
                })?;
                Command::Call {
                    name: name.to_string(),
                    n_args,
                }
            }
            "return" => Command::Return,
            other => {
                return Err(VmParseError::new(
                    format!("unrecognized instruction '{}'", other),
                    line,
                ));
            }
        };

        if parts.next().is_some() {
            return Err(VmParseError::new(
                format!("unexpected trailing tokens after '{}'", stripped),
                line,
            ));
        }

        if let Command::Function { name, .. } = &command {
            self.current_function = Some(name.clone());
        }

        let return_index = if let Command::Call { name, .. } = &command {
            Some(self.mint_return_index(name))
        } else {
            None
        };

        Ok(Some(Instruction {
            command,
            line,
            return_index,
        }))
    }
}

impl<'a> Iterator for VmParser<'a> {
    type Item = Result<Instruction, VmParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (idx, text) = self.lines.next()?;
            match self.parse_line(idx + 1, text) {
                Ok(Some(instruction)) => return Some(Ok(instruction)),
                Ok(None) => continue,
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
