use super::*;
use crate::lexer::Lexer;

#[test]
fn escapes_reserved_characters_but_not_apostrophe() {
    assert_eq!(escape("a < b & c > \"d\" 'e'"), "a &lt; b &amp; c &gt; &quot;d&quot; 'e'");
}

#[test]
fn token_xml_wraps_and_pads_leaves() {
    let tokens = Lexer::new("let x").tokenize_all().unwrap();
    let xml = tokens_to_xml(&tokens);
    assert!(xml.starts_with("<tokens>\n"));
    assert!(xml.contains("<keyword> let </keyword>\n"));
    assert!(xml.contains("<identifier> x </identifier>\n"));
    assert!(xml.trim_end().ends_with("</tokens>"));
    assert!(!xml.contains("<eof>"));
}

#[test]
fn node_xml_nests_with_indentation() {
    let mut builder = crate::ast::TreeBuilder::new();
    builder.open("letStatement");
    builder.leaf("keyword", "let");
    builder.close();
    let tree = builder.finish().unwrap();
    let xml = node_to_xml(&tree);
    assert_eq!(xml, "<letStatement>\n  <keyword> let </keyword>\n</letStatement>\n");
}
