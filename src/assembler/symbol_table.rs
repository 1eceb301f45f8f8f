//! The assembler's symbol table: predefined registers/pointers plus
//! whatever labels and variables the two-pass scan discovers.
//!
//! Grounded in `examples/original_source/hack-assembler/SymbolTable.{h,cc}`,
//! generalized from a bare `unordered_map<string,int>` wrapper to also
//! seed the predefined-symbol set spec.md §6 names (`SP, LCL, ARG, THIS,
//! THAT, R0..R15, SCREEN, KBD`) — the original's `SymbolTable` left
//! seeding those to its caller, which `_INDEX.md`'s file list shows was
//! never completed.

use std::collections::HashMap;

const SCREEN_ADDRESS: u16 = 16384;
const KBD_ADDRESS: u16 = 24576;

/// Name → RAM/ROM address map, seeded with the Hack platform's
/// predefined symbols.
#[derive(Debug)]
pub struct SymbolTable {
    addresses: HashMap<String, u16>,
}

impl SymbolTable {
    pub fn new() -> Self {
        let mut addresses = HashMap::new();
        addresses.insert("SP".to_string(), 0);
        addresses.insert("LCL".to_string(), 1);
        addresses.insert("ARG".to_string(), 2);
        addresses.insert("THIS".to_string(), 3);
        addresses.insert("THAT".to_string(), 4);
        for i in 0..16u16 {
            addresses.insert(format!("R{}", i), i);
        }
        addresses.insert("SCREEN".to_string(), SCREEN_ADDRESS);
        addresses.insert("KBD".to_string(), KBD_ADDRESS);
        SymbolTable { addresses }
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.addresses.contains_key(symbol)
    }

    pub fn add_entry(&mut self, symbol: &str, address: u16) {
        self.addresses.insert(symbol.to_string(), address);
    }

    pub fn address_of(&self, symbol: &str) -> Option<u16> {
        self.addresses.get(symbol).copied()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        SymbolTable::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_predefined_registers_and_pointers() {
        let table = SymbolTable::new();
        assert_eq!(table.address_of("SP"), Some(0));
        assert_eq!(table.address_of("LCL"), Some(1));
        assert_eq!(table.address_of("ARG"), Some(2));
        assert_eq!(table.address_of("THIS"), Some(3));
        assert_eq!(table.address_of("THAT"), Some(4));
        assert_eq!(table.address_of("R0"), Some(0));
        assert_eq!(table.address_of("R15"), Some(15));
        assert_eq!(table.address_of("SCREEN"), Some(16384));
        assert_eq!(table.address_of("KBD"), Some(24576));
    }

    #[test]
    fn add_entry_then_lookup() {
        let mut table = SymbolTable::new();
        assert!(!table.contains("LOOP"));
        table.add_entry("LOOP", 4);
        assert_eq!(table.address_of("LOOP"), Some(4));
    }
}
