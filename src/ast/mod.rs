//! The optional parse-tree representation.
//!
//! spec.md §3 describes the parse tree as "a nested, indented, tag/content
//! representation mirroring Jack grammar productions" rather than a set of
//! strongly-typed node structs — the parser already carries the typed
//! information it needs (via the symbol tables and the VM writer) and
//! only builds this tree when a caller asks for the `.xml` dump. [`Node`]
//! is therefore a generic tagged tree, and [`TreeBuilder`] is the
//! open/leaf/close API the parser drives while walking the grammar,
//! mirroring the original `CompilationEngine`'s nested
//! `<tag>...</tag>` writes.

#[cfg(test)]
mod tests;

/// One node of the optional parse tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A grammar production, e.g. `letStatement` or `expression`.
    NonTerminal {
        tag: &'static str,
        children: Vec<Node>,
    },
    /// A single token, tagged by its kind (`keyword`, `symbol`,
    /// `identifier`, `integerConstant`, `stringConstant`).
    Leaf { tag: &'static str, text: String },
}

/// Builds a [`Node`] tree incrementally as the parser enters and leaves
/// grammar productions.
///
/// `open` begins a new non-terminal scope, `leaf` appends a token to the
/// innermost open scope, and `close` finishes the innermost scope and
/// attaches it to its parent (or, for the outermost `class` production,
/// stores it as the finished root).
#[derive(Debug, Default)]
pub struct TreeBuilder {
    stack: Vec<(&'static str, Vec<Node>)>,
    root: Option<Node>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        TreeBuilder::default()
    }

    pub fn open(&mut self, tag: &'static str) {
        self.stack.push((tag, Vec::new()));
    }

    pub fn leaf(&mut self, tag: &'static str, text: impl Into<String>) {
        let (_, children) = self
            .stack
            .last_mut()
            .expect("leaf() called with no open node");
        children.push(Node::Leaf {
            tag,
            text: text.into(),
        });
    }

    pub fn close(&mut self) {
        let (tag, children) = self.stack.pop().expect("close() called with no open node");
        let node = Node::NonTerminal { tag, children };
        match self.stack.last_mut() {
            Some((_, parent_children)) => parent_children.push(node),
            None => self.root = Some(node),
        }
    }

    /// Consumes the builder, returning the completed tree if every scope
    /// was closed.
    pub fn finish(self) -> Option<Node> {
        self.root
    }
}
