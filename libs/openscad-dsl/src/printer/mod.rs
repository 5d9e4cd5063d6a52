//! # Printer
//!
//! Turns a model tree into OpenSCAD source.
//!
//! ```text
//! primitive:  name(k1=v1, k2=v2);
//! operation:  name(k1=v1) {
//!               <each line of each child, indented one unit>
//!             }
//! ```
//!
//! Children are printed on their own and then re-indented line by line, so a
//! leaf at depth N ends up with N indentation units. The closing `}` of the
//! outermost node carries no trailing newline.

use config::constants::RenderConfig;

use crate::node::{Node, Operation, Primitive};

/// Prints `node` with the default two-space indentation.
pub fn print(node: &Node) -> String {
    print_with(node, &RenderConfig::default())
}

/// Prints `node` with caller-chosen settings.
///
/// # Examples
/// ```
/// use config::constants::RenderConfig;
/// use openscad_dsl::{printer::print_with, sphere, union};
/// let cfg = RenderConfig::new(4).unwrap();
/// assert_eq!(print_with(&union([sphere(1.0)]), &cfg), "union() {\n    sphere(r=1);\n}");
/// ```
pub fn print_with(node: &Node, config: &RenderConfig) -> String {
    let indent = config.indent();
    let mut out = String::new();
    print_node(&mut out, node, &indent);
    out
}

fn print_node(out: &mut String, node: &Node, indent: &str) {
    match node {
        Node::Primitive(p) => print_primitive(out, p),
        Node::Operation(op) => print_operation(out, op, indent),
    }
}

fn print_primitive(out: &mut String, p: &Primitive) {
    out.push_str(&format!("{}({});", p.kind().keyword(), p.params()));
}

fn print_operation(out: &mut String, op: &Operation, indent: &str) {
    out.push_str(&format!("{}({}) {{\n", op.kind().keyword(), op.params()));
    for child in op.children() {
        let mut rendered = String::new();
        print_node(&mut rendered, child, indent);
        push_indented(out, &rendered, indent);
    }
    out.push('}');
}

fn push_indented(out: &mut String, text: &str, indent: &str) {
    for line in text.split('\n') {
        out.push_str(indent);
        out.push_str(line);
        out.push('\n');
    }
}

#[cfg(test)]
mod tests;
