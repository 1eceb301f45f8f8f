//! VM → Hack assembly emitter (spec.md §4.5).
//!
//! Lowers the stack machine onto the Hack platform's two-register
//! (`A`, `D`) load/store model, synthesizing the full calling convention
//! from scratch: frame save/restore, argument repositioning, and
//! return-address threading. [`AsmEmitter::emit`] is a morphism, not an
//! optimizer (spec.md §5) — every VM instruction expands to a fixed
//! assembly macro, in order, with nothing dropped, reordered, or merged
//! across instructions.
//!
//! Grounded in `examples/original_source/vm-translator/AsmMapper.cc`:
//! the binary-op / unary-op / comparison-op shapes of `write_arithmetic`,
//! the push/pop segment dispatch of `write_push`/`write_pop`, and the
//! frame-save-then-jump / frame-restore-then-jump shapes of
//! `write_call`/`write_return` are carried over; the comparison-op and
//! return-site label counters are renamed `comp_counter` and sourced
//! from [`crate::vm::Instruction::return_index`] respectively.

mod error;

pub use error::AsmGenError;

use crate::vm::{Instruction, VmParser};
use crate::vmcode::{ArithOp, Command, Segment};

const TEMP_BASE: u16 = 5;

/// Lowers one translation unit's worth of VM instructions into Hack
/// assembly text. One emitter owns one `.asm` output and the
/// translation-unit-scoped `COMP_k` counter spec.md §4.5 and §9
/// describe (comparisons need a unique label per comparison performed
/// anywhere in the unit, not per function).
pub struct AsmEmitter<'a> {
    unit_name: &'a str,
    comp_counter: u32,
    out: String,
}

impl<'a> AsmEmitter<'a> {
    pub fn new(unit_name: &'a str) -> Self {
        AsmEmitter {
            unit_name,
            comp_counter: 0,
            out: String::new(),
        }
    }

    /// `SP = 256`, the stack-pointer initialization the driver may
    /// prepend once per program (spec.md §4.5 "Program bookending").
    pub fn emit_bootstrap_sp_init(&mut self) {
        self.out.push_str("@256\nD=A\n@SP\nM=D\n");
    }

    /// `call Sys.init 0`, emitted right after `emit_bootstrap_sp_init`
    /// when the driver bootstraps a whole-program build (spec.md §9's
    /// "bootstrap iff translating a directory" heuristic, carried in
    /// SPEC_FULL.md §3).
    pub fn emit_bootstrap_call(&mut self, return_index: u32) {
        self.emit_call("Sys.init", 0, return_index);
    }

    /// The trailing infinite loop every program ends with so the CPU
    /// halts cleanly (spec.md §4.5 "Program bookending").
    pub fn emit_infinite_loop(&mut self) {
        self.out.push_str("(END_INF)\n@END_INF\n0;JMP\n");
    }

    pub fn render(self) -> String {
        self.out
    }

    /// Translates one parsed VM [`Instruction`]. `current_function` is
    /// the enclosing function at the point this instruction occurs
    /// (`None` outside any function, e.g. bootstrap code) — only
    /// `label`/`goto`/`if-goto` need it, since `call`'s return label is
    /// qualified by the *callee*, not the caller (spec.md §4.5).
    pub fn emit(
        &mut self,
        instr: &Instruction,
        current_function: Option<&str>,
    ) -> Result<(), AsmGenError> {
        match &instr.command {
            Command::Arithmetic(op) => self.emit_arithmetic(*op),
            Command::Push { segment, index } => self.emit_push(*segment, *index, instr.line)?,
            Command::Pop { segment, index } => self.emit_pop(*segment, *index, instr.line)?,
            Command::Label(name) => {
                let label = self.qualify(current_function, name);
                self.out.push_str(&format!("({})\n", label));
            }
            Command::Goto(name) => {
                let label = self.qualify(current_function, name);
                self.out.push_str(&format!("@{}\n0;JMP\n", label));
            }
            Command::IfGoto(name) => {
                let label = self.qualify(current_function, name);
                self.pop_d();
                self.out.push_str(&format!("@{}\nD;JNE\n", label));
            }
            Command::Function { name, n_locals } => self.emit_function(name, *n_locals),
            Command::Call { name, n_args } => {
                let return_index = instr.return_index.ok_or_else(|| {
                    AsmGenError::new("call instruction carries no return-site index", instr.line)
                })?;
                self.emit_call(name, *n_args, return_index);
            }
            Command::Return => self.emit_return(),
        }
        Ok(())
    }

    fn qualify(&self, current_function: Option<&str>, label: &str) -> String {
        match current_function {
            Some(f) => format!("{}.{}${}", self.unit_name, f, label),
            None => format!("{}.{}", self.unit_name, label),
        }
    }

    fn segment_register(segment: Segment) -> Option<&'static str> {
        match segment {
            Segment::Local => Some("LCL"),
            Segment::Argument => Some("ARG"),
            Segment::This => Some("THIS"),
            Segment::That => Some("THAT"),
            _ => None,
        }
    }

    /// `D` <- top of stack, `SP` decremented.
    fn pop_d(&mut self) {
        self.out.push_str("@SP\nM=M-1\nA=M\nD=M\n");
    }

    /// top of stack <- `D`, `SP` incremented.
    fn push_d(&mut self) {
        self.out.push_str("@SP\nM=M+1\nA=M-1\nM=D\n");
    }

    fn emit_arithmetic(&mut self, op: ArithOp) {
        if op.is_comparison() {
            let jump = match op {
                ArithOp::Eq => "JEQ",
                ArithOp::Gt => "JGT",
                ArithOp::Lt => "JLT",
                _ => unreachable!("is_comparison only holds for eq/gt/lt"),
            };
            let label = format!("{}.COMP_{}", self.unit_name, self.comp_counter);
            self.comp_counter += 1;
            self.pop_d();
            self.out.push_str("A=A-1\nD=M-D\nM=-1\n");
            self.out
                .push_str(&format!("@{}\nD;{}\n", label, jump));
            self.out.push_str("@SP\nA=M-1\nM=0\n");
            self.out.push_str(&format!("({})\n", label));
        } else if op.is_binary() {
            let symbol = match op {
                ArithOp::Add => "+",
                ArithOp::Sub => "-",
                ArithOp::And => "&",
                ArithOp::Or => "|",
                _ => unreachable!("is_binary covers add/sub/and/or here"),
            };
            self.pop_d();
            self.out.push_str(&format!("A=A-1\nM=M{}D\n", symbol));
        } else {
            let symbol = match op {
                ArithOp::Neg => "-",
                ArithOp::Not => "!",
                _ => unreachable!("remaining case is neg/not"),
            };
            self.out.push_str(&format!("@SP\nA=M-1\nM={}M\n", symbol));
        }
    }

    fn emit_push(&mut self, segment: Segment, index: u16, line: usize) -> Result<(), AsmGenError> {
        match segment {
            Segment::Constant => {
                self.out.push_str(&format!("@{}\nD=A\n", index));
            }
            Segment::Static => {
                self.out
                    .push_str(&format!("@{}.{}\nD=M\n", self.unit_name, index));
            }
            Segment::Temp => {
                self.out.push_str(&format!("@{}\nD=M\n", TEMP_BASE + index));
            }
            Segment::Pointer => {
                let reg = if index == 0 { "THIS" } else { "THAT" };
                self.out.push_str(&format!("@{}\nD=M\n", reg));
            }
            Segment::Local | Segment::Argument | Segment::This | Segment::That => {
                let reg = Self::segment_register(segment)
                    .expect("local/argument/this/that always have a base register");
                self.out
                    .push_str(&format!("@{}\nD=M\n@{}\nA=D+A\nD=M\n", reg, index));
            }
        }
        let _ = line;
        self.push_d();
        Ok(())
    }

    fn emit_pop(&mut self, segment: Segment, index: u16, line: usize) -> Result<(), AsmGenError> {
        match segment {
            Segment::Constant => {
                return Err(AsmGenError::new(
                    "cannot pop into the constant segment",
                    line,
                ));
            }
            Segment::Static => {
                self.pop_d();
                self.out
                    .push_str(&format!("@{}.{}\nM=D\n", self.unit_name, index));
            }
            Segment::Temp => {
                self.pop_d();
                self.out.push_str(&format!("@{}\nM=D\n", TEMP_BASE + index));
            }
            Segment::Pointer => {
                let reg = if index == 0 { "THIS" } else { "THAT" };
                self.pop_d();
                self.out.push_str(&format!("@{}\nM=D\n", reg));
            }
            Segment::Local | Segment::Argument | Segment::This | Segment::That => {
                let reg = Self::segment_register(segment)
                    .expect("local/argument/this/that always have a base register");
                self.out
                    .push_str(&format!("@{}\nD=M\n@{}\nD=D+A\n@R13\nM=D\n", reg, index));
                self.pop_d();
                self.out.push_str("@R13\nA=M\nM=D\n");
            }
        }
        Ok(())
    }

    fn emit_function(&mut self, name: &str, n_locals: u16) {
        self.out.push_str(&format!("({})\n", name));
        for _ in 0..n_locals {
            self.out.push_str("@0\nD=A\n");
            self.push_d();
        }
    }

    /// `return_index` is the per-callee counter [`VmParser`] mints for
    /// every `call` to `name`; it's what keeps `unit.name$ret.k` unique
    /// when `name` is called from more than one site.
    fn emit_call(&mut self, name: &str, n_args: u16, return_index: u32) {
        let return_label = format!("{}.{}$ret.{}", self.unit_name, name, return_index);

        self.out.push_str(&format!("@{}\nD=A\n", return_label));
        self.push_d();
        for reg in ["LCL", "ARG", "THIS", "THAT"] {
            self.out.push_str(&format!("@{}\nD=M\n", reg));
            self.push_d();
        }

        // ARG = SP - 5 - n_args
        self.out
            .push_str(&format!("@SP\nD=M\n@{}\nD=D-A\n@ARG\nM=D\n", 5 + n_args));
        // LCL = SP
        self.out.push_str("@SP\nD=M\n@LCL\nM=D\n");

        self.out.push_str(&format!("@{}\n0;JMP\n", name));
        self.out.push_str(&format!("({})\n", return_label));
    }

    fn emit_return(&mut self) {
        // R13 = frame = LCL
        self.out.push_str("@LCL\nD=M\n@R13\nM=D\n");
        // R14 = retAddr = *(frame - 5)
        self.out.push_str("@R13\nD=M\n@5\nA=D-A\nD=M\n@R14\nM=D\n");
        // *ARG = pop()
        self.pop_d();
        self.out.push_str("@ARG\nA=M\nM=D\n");
        // SP = ARG + 1
        self.out.push_str("@ARG\nD=M+1\n@SP\nM=D\n");
        // Restore THAT, THIS, ARG, LCL from frame - 1 .. frame - 4, in
        // that order (spec.md §4.5's return sequence steps 5).
        for (offset, reg) in [(1, "THAT"), (2, "THIS"), (3, "ARG"), (4, "LCL")] {
            self.out.push_str(&format!(
                "@R13\nD=M\n@{}\nA=D-A\nD=M\n@{}\nM=D\n",
                offset, reg
            ));
        }
        self.out.push_str("@R14\nA=M\n0;JMP\n");
    }
}

/// Translates one whole `.vm` translation unit into Hack assembly text,
/// wiring a [`VmParser`] to an [`AsmEmitter`]. `unit_name` qualifies
/// every minted label; `bootstrap` controls whether `SP = 256; call
/// Sys.init 0` is prepended (SPEC_FULL.md §3/§5: only when the driver is
/// combining a whole directory into one `.asm`, matching the original's
/// "bootstrap iff translating a directory" heuristic); `infinite_loop`
/// controls whether the trailing halt loop (spec.md §4.5's "Program
/// bookending") is appended — a directory-combining driver wants this
/// only once, after the last file.
pub fn translate(
    source: &str,
    unit_name: &str,
    bootstrap: bool,
    infinite_loop: bool,
) -> Result<String, AsmGenError> {
    let mut parser = VmParser::new(source);
    let mut emitter = AsmEmitter::new(unit_name);

    if bootstrap {
        emitter.emit_bootstrap_sp_init();
        let return_index = parser.mint_return_index("Sys.init");
        emitter.emit_bootstrap_call(return_index);
    }

    while let Some(instruction) = parser.next() {
        let instruction = instruction.map_err(|e| AsmGenError::new(e.message, e.line))?;
        let current_function = parser.current_function().map(str::to_string);
        emitter.emit(&instruction, current_function.as_deref())?;
    }

    if infinite_loop {
        emitter.emit_infinite_loop();
    }

    Ok(emitter.render())
}
