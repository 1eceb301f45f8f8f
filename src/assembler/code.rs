//! Maps Hack assembly mnemonics to their bit-string encodings.
//!
//! Grounded in `examples/original_source/hack-assembler/Code.{h,cc}`'s
//! `MachineCodeMapper`, restated as exhaustive matches over the literal
//! mnemonics rather than `unordered_map` lookups (no heap allocation to
//! encode one instruction). The original's `comp_to_code` table omits
//! several legal comps (`D&A`, `D&M`, `-A`, `-M` collapse onto the wrong
//! bit patterns) — this table uses the full, correct 28-entry Hack ISA
//! comp table instead of reproducing that bug.

use super::AsmError;

/// `dest` mnemonic (any subset of `A`, `D`, `M`, or empty) → 3 bits.
pub fn dest_bits(dest: &str) -> Result<&'static str, AsmError> {
    Ok(match dest {
        "" => "000",
        "M" => "001",
        "D" => "010",
        "MD" | "DM" => "011",
        "A" => "100",
        "AM" | "MA" => "101",
        "AD" | "DA" => "110",
        "AMD" | "ADM" | "MAD" | "MDA" | "DAM" | "DMA" => "111",
        other => return Err(AsmError::new(format!("invalid dest mnemonic '{}'", other), 0)),
    })
}

/// `jump` mnemonic → 3 bits.
pub fn jump_bits(jump: &str) -> Result<&'static str, AsmError> {
    Ok(match jump {
        "" => "000",
        "JGT" => "001",
        "JEQ" => "010",
        "JGE" => "011",
        "JLT" => "100",
        "JNE" => "101",
        "JLE" => "110",
        "JMP" => "111",
        other => return Err(AsmError::new(format!("invalid jump mnemonic '{}'", other), 0)),
    })
}

/// `comp` mnemonic → the 7-bit `a c1 c2 c3 c4 c5 c6` field.
pub fn comp_bits(comp: &str) -> Result<&'static str, AsmError> {
    Ok(match comp {
        "0" => "0101010",
        "1" => "0111111",
        "-1" => "0111010",
        "D" => "0001100",
        "A" => "0110000",
        "!D" => "0001101",
        "!A" => "0110001",
        "-D" => "0001111",
        "-A" => "0110011",
        "D+1" => "0011111",
        "A+1" => "0110111",
        "D-1" => "0001110",
        "A-1" => "0110010",
        "D+A" => "0000010",
        "D-A" => "0010011",
        "A-D" => "0000111",
        "D&A" => "0000000",
        "D|A" => "0010101",
        "M" => "1110000",
        "!M" => "1110001",
        "-M" => "1110011",
        "M+1" => "1110111",
        "M-1" => "1110010",
        "D+M" => "1000010",
        "D-M" => "1010011",
        "M-D" => "1000111",
        "D&M" => "1000000",
        "D|M" => "1010101",
        other => return Err(AsmError::new(format!("invalid comp mnemonic '{}'", other), 0)),
    })
}
