use openscad_dsl::{
    cube, difference, intersection, save, sphere, translate, union, Node, PersistenceError, Vector,
};

#[test]
fn cube_prints_size_and_center() {
    let node = cube(Vector::new(10.0, 10.0, 10.0), false);
    assert_eq!(node.to_string(), "cube(size=[10, 10, 10], center=false);");
}

#[test]
fn sphere_prints_radius() {
    assert_eq!(sphere(5.0).to_string(), "sphere(r=5);");
}

#[test]
fn translated_sphere_is_indented_once() {
    let node = translate(Vector::new(0.0, 0.0, 10.0), sphere(5.0));
    assert_eq!(node.to_string(), "translate(v=[0, 0, 10]) {\n  sphere(r=5);\n}");
}

#[test]
fn difference_of_cube_and_translated_sphere() {
    let node = difference([
        cube(Vector::new(10.0, 10.0, 10.0), false),
        translate(Vector::new(0.0, 0.0, 10.0), sphere(5.0)),
    ]);
    let expected = "\
difference() {
  cube(size=[10, 10, 10], center=false);
  translate(v=[0, 0, 10]) {
    sphere(r=5);
  }
}";
    assert_eq!(node.to_string(), expected);
}

#[test]
fn empty_union_is_an_empty_block() {
    let none: Vec<Node> = Vec::new();
    assert_eq!(union(none).to_string(), "union() {\n}");
}

#[test]
fn failed_save_leaves_the_tree_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("output.scad");
    let model = intersection([sphere(6.0), cube(Vector::splat(10.0), true)]);
    let before = model.clone();

    let err = save(&model, &path).unwrap_err();

    assert!(matches!(err, PersistenceError::Open { .. }));
    assert!(err.to_string().starts_with("failed to open file"));
    assert_eq!(model, before);
    assert_eq!(model.to_string(), before.to_string());
}
