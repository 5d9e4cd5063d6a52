//! Printer tests: exact layout of primitives, blocks and nesting.

use super::*;
use crate::{cube, cylinder, difference, rotate, sphere, translate, union, Vector};

#[test]
fn primitive_is_a_single_statement() {
    assert_eq!(
        print(&cube(Vector::splat(10.0), false)),
        "cube(size=[10, 10, 10], center=false);"
    );
    assert_eq!(print(&sphere(5.0)), "sphere(r=5);");
}

#[test]
fn operation_wraps_children_in_a_block() {
    let node = translate(Vector::new(0.0, 0.0, 10.0), sphere(5.0));
    assert_eq!(print(&node), "translate(v=[0, 0, 10]) {\n  sphere(r=5);\n}");
}

#[test]
fn empty_block_has_only_braces() {
    assert_eq!(print(&union(Vec::new())), "union() {\n}");
}

#[test]
fn block_layout_matches_indented_children() {
    let children = vec![cube(Vector::splat(1.0), true), sphere(2.0)];
    let node = union(children.clone());

    let mut expected = String::from("union() {\n");
    for child in &children {
        for line in print(child).split('\n') {
            expected.push_str("  ");
            expected.push_str(line);
            expected.push('\n');
        }
    }
    expected.push('}');

    assert_eq!(print(&node), expected);
}

#[test]
fn nested_blocks_accumulate_indentation() {
    let node = difference([
        cube(Vector::splat(10.0), false),
        translate(Vector::Z, rotate(Vector::X, cylinder(3.0, 1.0, true))),
    ]);
    let expected = "\
difference() {
  cube(size=[10, 10, 10], center=false);
  translate(v=[0, 0, 1]) {
    rotate(a=[1, 0, 0]) {
      cylinder(h=3, r=1, center=true);
    }
  }
}";
    assert_eq!(print(&node), expected);
}

#[test]
fn innermost_leaf_gets_one_unit_per_level() {
    let mut node = sphere(1.0);
    for _ in 0..5 {
        node = node.up(1.0);
    }
    let text = print(&node);
    let leaf = text
        .lines()
        .find(|l| l.trim_start().starts_with("sphere"))
        .unwrap();
    assert_eq!(leaf, format!("{}sphere(r=1);", "  ".repeat(5)));
}

#[test]
fn printing_twice_is_identical() {
    let node = union([sphere(1.0), cube([1.0, 2.0, 3.0], true).up(4.0)]);
    assert_eq!(print(&node), print(&node));
    assert_eq!(node.to_string(), print(&node));
}

#[test]
fn custom_indent_width_applies_at_every_level() {
    let cfg = RenderConfig::new(4).unwrap();
    let node = union([sphere(1.0).up(1.0)]);
    assert_eq!(
        print_with(&node, &cfg),
        "union() {\n    translate(v=[0, 0, 1]) {\n        sphere(r=1);\n    }\n}"
    );
}

#[test]
fn output_has_no_trailing_newline() {
    let text = print(&union([sphere(1.0)]));
    assert!(text.ends_with('}'));
}
