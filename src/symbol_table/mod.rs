//! Two-scope symbol table for the Jack compiler.
//!
//! A class-scope table holds statics and fields and survives for the
//! whole class; a subroutine-scope table holds arguments and locals and
//! is reset at the start of every subroutine. [`Scopes`] bundles one of
//! each and implements the "subroutine first, then class" lookup rule
//! from spec.md §3.
//!
//! Scopes are kept as distinct [`SymbolTable`] objects rather than one
//! table with a scope column, so `reset` only has to clear the table it
//! is called on — see spec.md §9's design note on this point.

mod error;


pub use error::SymbolError;

use std::collections::HashMap;

/// The four symbol kinds recognized by the Jack compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Static,
    Field,
    Argument,
    Local,
}

/// A declared name together with its type, kind, and slot index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    pub ty: String,
    pub kind: Kind,
    pub index: u16,
}

/// A single symbol-table scope: a name → (type, kind, index) map with a
/// per-kind monotone slot counter.
#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: HashMap<String, Symbol>,
    counters: HashMap<Kind, u16>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable::default()
    }

    /// Declares `name` with the given `ty` and `kind`, assigning it the
    /// next slot index for that kind. Fails if `name` is already declared
    /// in this table.
    pub fn define(&mut self, name: &str, ty: &str, kind: Kind) -> Result<u16, SymbolError> {
        if self.symbols.contains_key(name) {
            return Err(SymbolError::duplicate(name));
        }
        let index = *self.counters.get(&kind).unwrap_or(&0);
        self.symbols.insert(
            name.to_string(),
            Symbol {
                name: name.to_string(),
                ty: ty.to_string(),
                kind,
                index,
            },
        );
        self.counters.insert(kind, index + 1);
        Ok(index)
    }

    /// The number of names declared with the given kind.
    pub fn count(&self, kind: Kind) -> u16 {
        *self.counters.get(&kind).unwrap_or(&0)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    pub fn kind_of(&self, name: &str) -> Option<Kind> {
        self.symbols.get(name).map(|s| s.kind)
    }

    pub fn type_of(&self, name: &str) -> Option<&str> {
        self.symbols.get(name).map(|s| s.ty.as_str())
    }

    pub fn index_of(&self, name: &str) -> Option<u16> {
        self.symbols.get(name).map(|s| s.index)
    }

    /// Wipes all declared names and resets every kind counter to zero.
    pub fn reset(&mut self) {
        self.symbols.clear();
        self.counters.clear();
    }
}

/// The class-scope and subroutine-scope tables live together, since every
/// lookup the parser performs consults both (subroutine first, then
/// class) and every subroutine declaration resets only the subroutine
/// table.
#[derive(Debug, Default)]
pub struct Scopes {
    pub class: SymbolTable,
    pub subroutine: SymbolTable,
}

impl Scopes {
    pub fn new() -> Self {
        Scopes::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.subroutine.contains(name) || self.class.contains(name)
    }

    pub fn kind_of(&self, name: &str) -> Option<Kind> {
        self.subroutine
            .kind_of(name)
            .or_else(|| self.class.kind_of(name))
    }

    pub fn type_of(&self, name: &str) -> Option<&str> {
        if self.subroutine.contains(name) {
            self.subroutine.type_of(name)
        } else {
            self.class.type_of(name)
        }
    }

    pub fn index_of(&self, name: &str) -> Option<u16> {
        if self.subroutine.contains(name) {
            self.subroutine.index_of(name)
        } else {
            self.class.index_of(name)
        }
    }
}
