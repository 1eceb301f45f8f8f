//! A thin, stateless helper the Jack parser uses to append VM
//! instructions to its output buffer, mirroring the original
//! `VMWriter`'s one-method-per-instruction-kind shape.

use super::{ArithOp, Command, Segment};

/// Accumulates [`Command`]s emitted by the parser. Kept separate from the
/// parser itself so code generation concerns (what instruction to emit)
/// stay distinct from grammar-walking concerns (when to emit it).
#[derive(Debug, Default)]
pub struct VmWriter {
    commands: Vec<Command>,
}

impl VmWriter {
    pub fn new() -> Self {
        VmWriter::default()
    }

    pub fn write_push(&mut self, segment: Segment, index: u16) {
        self.commands.push(Command::Push { segment, index });
    }

    pub fn write_pop(&mut self, segment: Segment, index: u16) {
        self.commands.push(Command::Pop { segment, index });
    }

    pub fn write_arithmetic(&mut self, op: ArithOp) {
        self.commands.push(Command::Arithmetic(op));
    }

    pub fn write_label(&mut self, name: impl Into<String>) {
        self.commands.push(Command::Label(name.into()));
    }

    pub fn write_goto(&mut self, name: impl Into<String>) {
        self.commands.push(Command::Goto(name.into()));
    }

    pub fn write_if(&mut self, name: impl Into<String>) {
        self.commands.push(Command::IfGoto(name.into()));
    }

    pub fn write_function(&mut self, name: impl Into<String>, n_locals: u16) {
        self.commands.push(Command::Function {
            name: name.into(),
            n_locals,
        });
    }

    pub fn write_call(&mut self, name: impl Into<String>, n_args: u16) {
        self.commands.push(Command::Call {
            name: name.into(),
            n_args,
        });
    }

    pub fn write_return(&mut self) {
        self.commands.push(Command::Return);
    }

    /// Renders every accumulated instruction as one line of VM text per
    /// instruction, in emission order.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for command in &self.commands {
            out.push_str(&command.to_string());
            out.push('\n');
        }
        out
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<Command> {
        self.commands
    }
}
