use std::fmt::Write;

use crate::parser::ParseTree;

/// Render a parse tree as a Graphviz digraph.
///
/// Node ids are arena indices (`n0` is the root); labels are the grammar
/// symbol for non-terminals and the unescaped token for terminals.
pub fn to_dot(tree: &ParseTree) -> String {
    let mut dot = String::new();
    dot.push_str("digraph ParseTree {\n");
    dot.push_str("  node [shape=plaintext];\n");
    dot.push_str("  edge [arrowhead=none];\n\n");

    for id in tree.preorder() {
        let label = tree.label(id);
        let style = if label.is_terminal() {
            ", fontcolor=blue"
        } else {
            ""
        };
        let _ = writeln!(
            dot,
            "  n{} [label=\"{}\"{style}];",
            id.index(),
            escape_dot(&label.to_string())
        );
    }
    dot.push('\n');
    for id in tree.preorder() {
        for child in tree.children(id) {
            let _ = writeln!(dot, "  n{} -> n{};", id.index(), child.index());
        }
    }
    dot.push_str("}\n");
    dot
}

/// Escape a string for use inside a double-quoted DOT label.
pub fn escape_dot(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
