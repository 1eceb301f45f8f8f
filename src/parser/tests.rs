use super::Parser;

fn compile_vm(source: &str) -> String {
    Parser::new(source).compile().unwrap().vm_code
}

fn lines(s: &str) -> Vec<&str> {
    s.lines().filter(|l| !l.is_empty()).collect()
}

#[test]
fn empty_void_function() {
    let vm = compile_vm("class Main { function void main() { return; } }");
    assert_eq!(
        lines(&vm),
        vec!["function Main.main 0", "push constant 0", "return"]
    );
}

#[test]
fn add_two_constants() {
    let vm = compile_vm("class C { function int f() { return 1 + 2; } }");
    assert_eq!(
        lines(&vm),
        vec![
            "function C.f 0",
            "push constant 1",
            "push constant 2",
            "add",
            "return",
        ]
    );
}

#[test]
fn array_element_read() {
    let vm = compile_vm(
        "class Main { function int f() { var Array a; var int i; return a[i]; } }",
    );
    assert_eq!(
        lines(&vm),
        vec![
            "function Main.f 2",
            "push local 0",
            "push local 1",
            "add",
            "pop pointer 1",
            "push that 0",
            "return",
        ]
    );
}

#[test]
fn let_with_array_target_defers_the_store() {
    let vm = compile_vm(
        "class Main { function void f() { var Array a; var int i; let a[i] = 7; return; } }",
    );
    assert_eq!(
        lines(&vm),
        vec![
            "function Main.f 2",
            "push local 0",
            "push local 1",
            "add",
            "push constant 7",
            "pop temp 0",
            "pop pointer 1",
            "push temp 0",
            "pop that 0",
            "push constant 0",
            "return",
        ]
    );
}

#[test]
fn if_and_while_counters_are_independent_and_class_scoped() {
    let vm = compile_vm(
        "class Main {
            function void a() { if (true) { } while (true) { } return; }
            function void b() { if (true) { } return; }
        }",
    );
    let labels: Vec<&str> = vm
        .lines()
        .filter(|l| l.starts_with("label") || l.starts_with("if-goto") || l.starts_with("goto"))
        .collect();
    assert!(labels.contains(&"label IF_TRUE0"));
    assert!(labels.contains(&"label IF_FALSE0"));
    assert!(labels.contains(&"label WHILE_EXP0"));
    assert!(labels.contains(&"label WHILE_END0"));
    // `b`'s `if` continues the class-wide counter rather than restarting it.
    assert!(labels.contains(&"label IF_TRUE1"));
    assert!(labels.contains(&"label IF_FALSE1"));
}

#[test]
fn string_literal_construction() {
    let vm = compile_vm("class Main { function void f() { do f2(\"hi\"); return; } }");
    assert_eq!(
        lines(&vm),
        vec![
            "function Main.f 0",
            "push pointer 0",
            "push constant 2",
            "call String.new 1",
            "push constant 104",
            "call String.appendChar 2",
            "push constant 105",
            "call String.appendChar 2",
            "call Main.f2 2",
            "pop temp 0",
            "push constant 0",
            "return",
        ]
    );
}

#[test]
fn method_prologue_binds_this_and_reserves_argument_zero() {
    let vm = compile_vm("class Point { field int x; method int getX() { return x; } }");
    assert!(lines(&vm).contains(&"push argument 0"));
    assert!(lines(&vm).contains(&"pop pointer 0"));
}

#[test]
fn constructor_prologue_allocates_field_count_words() {
    let vm = compile_vm(
        "class Point { field int x, y; constructor Point new() { return this; } }",
    );
    let ls = lines(&vm);
    assert_eq!(ls[0], "function Point.new 0");
    assert_eq!(ls[1], "push constant 2");
    assert_eq!(ls[2], "call Memory.alloc 1");
    assert_eq!(ls[3], "pop pointer 0");
}

#[test]
fn bare_call_is_a_method_on_the_current_object() {
    let vm = compile_vm("class C { method void f() { do g(1); return; } }");
    let ls = lines(&vm);
    // argument 0/pointer 0 prologue, then the bare call pushes `this` again
    // before its own arguments.
    assert!(ls.contains(&"push pointer 0"));
    assert!(ls.contains(&"call C.g 2"));
}

#[test]
fn qualified_call_on_a_local_resolves_via_its_declared_type() {
    let vm = compile_vm(
        "class Main { function void f() { var Point p; do p.getX(); return; } }",
    );
    assert!(lines(&vm).contains(&"call Point.getX 1"));
}

#[test]
fn qualified_call_on_an_unresolved_name_is_a_static_function_call() {
    let vm = compile_vm("class Main { function void f() { do Output.println(); return; } }");
    assert!(lines(&vm).contains(&"call Output.println 0"));
}

#[test]
fn no_precedence_left_to_right_association() {
    // 2 + 3 * 4 must compile as (2 + 3) * 4, not 2 + (3 * 4).
    let vm = compile_vm("class C { function int f() { return 2 + 3 * 4; } }");
    assert_eq!(
        lines(&vm),
        vec![
            "function C.f 0",
            "push constant 2",
            "push constant 3",
            "add",
            "push constant 4",
            "call Math.multiply 2",
            "return",
        ]
    );
}

#[test]
fn duplicate_local_declaration_is_a_semantic_error() {
    let err = Parser::new("class C { function void f() { var int x; var int x; return; } }")
        .compile()
        .unwrap_err();
    assert!(matches!(err, crate::error::CompileError::Semantic(_)));
}

#[test]
fn undeclared_let_target_is_a_semantic_error() {
    let err = Parser::new("class C { function void f() { let x = 1; return; } }")
        .compile()
        .unwrap_err();
    assert!(matches!(err, crate::error::CompileError::Semantic(_)));
}

#[test]
fn missing_semicolon_is_a_parse_error() {
    let err = Parser::new("class C { function void f() { return }}")
        .compile()
        .unwrap_err();
    assert!(matches!(err, crate::error::CompileError::Parse(_)));
}

#[test]
fn keyword_literal_terms() {
    let vm = compile_vm(
        "class C { function boolean f() { var boolean b; let b = true; return false; } }",
    );
    assert_eq!(
        lines(&vm),
        vec![
            "function C.f 1",
            "push constant 0",
            "not",
            "pop local 0",
            "push constant 0",
            "return",
        ]
    );
}

#[test]
fn parse_tree_dump_round_trips_through_xml() {
    let compiled = Parser::new("class Main { function void main() { return; } }")
        .with_tree()
        .compile()
        .unwrap();
    let tree = compiled.tree.expect("tree dump was requested");
    let xml = crate::xml::node_to_xml(&tree);
    assert!(xml.starts_with("<class>"));
    assert!(xml.contains("<keyword> class </keyword>"));
    assert!(xml.contains("<identifier> Main </identifier>"));
}
