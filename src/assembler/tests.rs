use super::*;

#[test]
fn a_instruction_literal_encodes_as_binary() {
    let hack = assemble("@2\n").unwrap();
    assert_eq!(hack, "0000000000000010\n");
}

#[test]
fn c_instruction_encodes_dest_comp_jump() {
    let hack = assemble("D=A\n0;JMP\n").unwrap();
    let lines: Vec<_> = hack.lines().collect();
    assert_eq!(lines[0], "1110110000010000");
    assert_eq!(lines[1], "1110101010000111");
}

#[test]
fn predefined_symbols_resolve_without_allocating_ram() {
    let hack = assemble("@SCREEN\n@KBD\n@SP\n").unwrap();
    let lines: Vec<_> = hack.lines().collect();
    assert_eq!(lines[0], &encode_address(16384));
    assert_eq!(lines[1], &encode_address(24576));
    assert_eq!(lines[2], &encode_address(0));
}

#[test]
fn labels_resolve_to_the_instruction_after_them() {
    // (LOOP) sits before `@LOOP`'s own instruction but after an
    // unrelated one, so LOOP's address is 1, not 0.
    let source = "@1\n(LOOP)\n@LOOP\n0;JMP\n";
    let hack = assemble(source).unwrap();
    let lines: Vec<_> = hack.lines().collect();
    assert_eq!(lines[1], &encode_address(1));
}

#[test]
fn undeclared_symbols_become_variables_starting_at_16() {
    let hack = assemble("@foo\n@bar\n@foo\n").unwrap();
    let lines: Vec<_> = hack.lines().collect();
    assert_eq!(lines[0], &encode_address(16));
    assert_eq!(lines[1], &encode_address(17));
    assert_eq!(lines[2], &encode_address(16));
}

#[test]
fn duplicate_label_declaration_is_an_error() {
    let err = assemble("(LOOP)\n(LOOP)\n").unwrap_err();
    assert!(err.message.contains("LOOP"));
}

#[test]
fn invalid_comp_mnemonic_reports_its_line() {
    let err = assemble("@1\nD=A\nD=^D\n").unwrap_err();
    assert_eq!(err.line, 3);
}

#[test]
fn comments_and_blank_lines_are_ignored() {
    let hack = assemble("// a program\n\n@1 // load one\n\n").unwrap();
    assert_eq!(hack, format!("{}\n", encode_address(1)));
}
