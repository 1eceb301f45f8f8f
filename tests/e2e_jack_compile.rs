//! End-to-end Jack-to-VM compilation scenarios, mirroring spec.md §8's
//! concrete scenarios 1, 2, 4, and 5.

use hackc::parser::Parser;

fn compile(source: &str) -> String {
    Parser::new(source)
        .compile()
        .unwrap_or_else(|e| panic!("expected successful compile, got: {}", e))
        .vm_code
}

#[test]
fn empty_void_function() {
    let vm = compile("class Main { function void main() { return; } }");
    assert_eq!(vm, "function Main.main 0\npush constant 0\nreturn\n");
}

#[test]
fn add_two_constants() {
    let vm = compile("class C { function int f() { return 1 + 2; } }");
    assert_eq!(
        vm,
        "function C.f 0\npush constant 1\npush constant 2\nadd\nreturn\n"
    );
}

#[test]
fn if_else_and_while_counters_do_not_interfere() {
    let source = "\
class Demo {
    function void run(boolean flag) {
        if (flag) {
            return;
        } else {
            return;
        }
        if (flag) {
            return;
        }
        while (flag) {
            return;
        }
        return;
    }
}";
    let vm = compile(source);
    for label in [
        "IF_TRUE0", "IF_FALSE0", "IF_END0", "IF_TRUE1", "IF_FALSE1", "IF_END1", "WHILE_EXP0",
        "WHILE_END0",
    ] {
        assert!(vm.contains(label), "expected label {} in:\n{}", label, vm);
    }
    assert!(!vm.contains("IF_TRUE2"));
    assert!(!vm.contains("WHILE_EXP1"));
}

#[test]
fn string_literal_construction() {
    let source = "\
class Demo {
    function void run() {
        var String s;
        let s = \"Hi\";
        return;
    }
}";
    let vm = compile(source);
    assert!(vm.contains("push constant 2\ncall String.new 1\n"));
    assert!(vm.contains("push constant 72\ncall String.appendChar 2\n"));
    assert!(vm.contains("push constant 105\ncall String.appendChar 2\n"));
    assert!(vm.contains("pop local 0\n"));
}

#[test]
fn array_element_read_uses_pointer_that_indirection() {
    let source = "\
class Demo {
    method void run() {
        var Array a;
        var int x;
        let x = a[3];
        return;
    }
}";
    let vm = compile(source);
    assert!(vm.contains("push local 0\npush constant 3\nadd\npop pointer 1\npush that 0\npop local 1\n"));
}

#[test]
fn method_prologue_binds_this_from_argument_zero() {
    let source = "\
class Point {
    method int getX() {
        return 0;
    }
}";
    let vm = compile(source);
    assert!(vm.starts_with("function Point.getX 0\npush argument 0\npop pointer 0\n"));
}

#[test]
fn constructor_allocates_field_count_words() {
    let source = "\
class Point {
    field int x, y;
    constructor Point new() {
        return this;
    }
}";
    let vm = compile(source);
    assert!(vm.contains("push constant 2\ncall Memory.alloc 1\npop pointer 0\n"));
}

#[test]
fn multiplication_and_division_lower_to_math_calls() {
    let source = "class C { function int f() { return 6 * 7 / 2; } }";
    let vm = compile(source);
    assert!(vm.contains("call Math.multiply 2"));
    assert!(vm.contains("call Math.divide 2"));
}

#[test]
fn bare_call_is_a_method_call_on_this() {
    let source = "\
class Demo {
    method void helper() {
        return;
    }
    method void run() {
        do helper();
        return;
    }
}";
    let vm = compile(source);
    assert!(vm.contains("push pointer 0\ncall Demo.helper 1\npop temp 0\n"));
}
