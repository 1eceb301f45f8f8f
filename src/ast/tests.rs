use super::*;

#[test]
fn nested_scopes_close_into_their_parent() {
    let mut builder = TreeBuilder::new();
    builder.open("letStatement");
    builder.leaf("keyword", "let");
    builder.leaf("identifier", "x");
    builder.open("expression");
    builder.open("term");
    builder.leaf("integerConstant", "1");
    builder.close(); // term
    builder.close(); // expression
    builder.close(); // letStatement

    let tree = builder.finish().unwrap();
    match tree {
        Node::NonTerminal { tag, children } => {
            assert_eq!(tag, "letStatement");
            assert_eq!(children.len(), 3);
            assert!(matches!(children[2], Node::NonTerminal { tag: "expression", .. }));
        }
        _ => panic!("expected a non-terminal"),
    }
}

#[test]
fn unfinished_tree_has_no_root() {
    let mut builder = TreeBuilder::new();
    builder.open("class");
    assert!(builder.finish().is_none());
}
