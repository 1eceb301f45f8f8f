//! End-to-end VM-to-assembly translation scenarios (spec.md §8, scenario 3
//! and the arithmetic/call/return structural checks from scenario 6).

use hackc::asmgen;

#[test]
fn push_constant_lowers_to_stack_push() {
    let asm = asmgen::translate("push constant 7", "Main", false, false).unwrap();
    assert_eq!(asm, "@7\nD=A\n@SP\nM=M+1\nA=M-1\nM=D\n");
}

#[test]
fn add_pops_two_and_pushes_sum() {
    let asm = asmgen::translate("push constant 2\npush constant 3\nadd", "Main", false, false)
        .unwrap();
    assert!(asm.ends_with("@SP\nM=M-1\nA=M\nD=M\nA=A-1\nM=M+D\n"));
}

#[test]
fn eq_uses_a_unit_scoped_comparison_counter() {
    let asm = asmgen::translate(
        "push constant 1\npush constant 1\neq",
        "Main",
        false,
        false,
    )
    .unwrap();
    assert!(asm.contains("(Main.COMP_0)"));
    assert!(asm.contains("D;JEQ"));
}

#[test]
fn two_comparisons_mint_distinct_labels() {
    let asm = asmgen::translate(
        "push constant 1\npush constant 1\neq\npush constant 1\npush constant 2\nlt",
        "Main",
        false,
        false,
    )
    .unwrap();
    assert!(asm.contains("(Main.COMP_0)"));
    assert!(asm.contains("(Main.COMP_1)"));
    assert!(asm.contains("D;JLT"));
}

#[test]
fn static_segment_is_namespaced_by_unit_basename() {
    let asm = asmgen::translate("push constant 5\npop static 3", "Foo", false, false).unwrap();
    assert!(asm.contains("@Foo.3\nM=D\n"));
}

#[test]
fn pop_constant_is_rejected() {
    let err = asmgen::translate("pop constant 0", "Main", false, false).unwrap_err();
    assert!(err.to_string().contains("constant"));
}

#[test]
fn function_emits_a_local_zeroing_loop_per_local() {
    let asm = asmgen::translate("function Main.fill 3\nreturn", "Main", false, false).unwrap();
    assert!(asm.starts_with("(Main.fill)\n"));
    assert_eq!(asm.matches("@0\nD=A\n").count(), 3);
}

#[test]
fn call_mints_a_unique_return_label_per_call_site() {
    let source = "function Main.main 0\ncall Helper.run 0\ncall Helper.run 0\nreturn";
    let asm = asmgen::translate(source, "Main", false, false).unwrap();
    assert!(asm.contains("(Main.Helper.run$ret.0)"));
    assert!(asm.contains("(Main.Helper.run$ret.1)"));
}

#[test]
fn bootstrap_prepends_sp_init_and_jumps_into_sys_init() {
    let asm = asmgen::translate("function Sys.init 0\nreturn", "Sys", true, true).unwrap();
    assert!(asm.starts_with("@256\nD=A\n@SP\nM=D\n"));
    assert!(asm.contains("@Sys.init\n0;JMP\n"));
    assert!(asm.contains("(END_INF)\n@END_INF\n0;JMP\n"));
}

#[test]
fn goto_and_if_goto_are_qualified_by_the_enclosing_function() {
    let source = "function Main.loop 0\nlabel LOOP\npush constant 0\nif-goto LOOP\ngoto LOOP";
    let asm = asmgen::translate(source, "Main", false, false).unwrap();
    assert!(asm.contains("(Main.Main.loop$LOOP)"));
    assert!(asm.contains("@Main.Main.loop$LOOP\nD;JNE\n"));
    assert!(asm.contains("@Main.Main.loop$LOOP\n0;JMP\n"));
}

#[test]
fn return_sequence_restores_segments_in_order() {
    let asm = asmgen::translate("function Main.f 0\nreturn", "Main", false, false).unwrap();
    let that_pos = asm.find("@THAT\nM=D\n").unwrap();
    let this_pos = asm.find("@THIS\nM=D\n").unwrap();
    let arg_pos = asm.find("@ARG\nM=D\n").unwrap();
    let lcl_pos = asm.rfind("@LCL\nM=D\n").unwrap();
    assert!(that_pos < this_pos);
    assert!(this_pos < arg_pos);
    assert!(arg_pos < lcl_pos);
}
