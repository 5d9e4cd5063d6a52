//! Whole-model tests mirroring how enclosure scripts use the builder.

use openscad_dsl::{
    color, color_alpha, cube, cylinder, difference, hull, linear_extrude, polygon, sphere, square,
    InMemoryStorage, Node, Vector,
};

fn bolt(thread_r: f64) -> Node {
    let head = cylinder(3.1, 3.0, false).up(10.0);
    let thread = cylinder(10.2, thread_r, false).down(0.1);
    head + thread
}

#[test]
fn tolerance_plate_uses_operators_and_extrusion() {
    let outline = polygon([[0.0, 0.0], [24.0, 0.0], [24.0, 16.0], [0.0, 16.0]]);
    let mut plate = color_alpha("#333", 0.5, linear_extrude(13.0, false, [outline]));
    for (i, r) in [1.25, 1.3].into_iter().enumerate() {
        plate = plate - bolt(r).translate([8.0 * (i as f64 + 1.0), 8.0, 0.0]);
    }
    let plate = color("#666", plate);

    let text = plate.to_string();
    let expected = "\
color(c=\"#666\") {
  difference() {
    color(c=\"#333\", alpha=0.5) {
      linear_extrude(height=13, center=false) {
        polygon(points=[[0, 0], [24, 0], [24, 16], [0, 16]]);
      }
    }
    translate(v=[8, 8, 0]) {
      union() {
        translate(v=[0, 0, 10]) {
          cylinder(h=3.1, r=3, center=false);
        }
        translate(v=[0, 0, -0.1]) {
          cylinder(h=10.2, r=1.25, center=false);
        }
      }
    }
    translate(v=[16, 8, 0]) {
      union() {
        translate(v=[0, 0, 10]) {
          cylinder(h=3.1, r=3, center=false);
        }
        translate(v=[0, 0, -0.1]) {
          cylinder(h=10.2, r=1.3, center=false);
        }
      }
    }
  }
}";
    assert_eq!(text, expected);
    assert_eq!(plate.children()[0].children().len(), 3);
}

#[test]
fn rounded_slab_from_hull_of_spheres() {
    let corners = [(0.0, 0.0), (20.0, 0.0), (20.0, 10.0), (0.0, 10.0)]
        .map(|(x, y)| sphere(2.0).translate([x, y, 0.0]));
    let slab = hull(corners) * cube(Vector::new(40.0, 40.0, 4.0), true);

    assert_eq!(slab.name(), "intersection");
    assert_eq!(slab.children()[0].children().len(), 4);
    assert_eq!(slab.depth(), 4);
    assert!(slab
        .to_string()
        .starts_with("intersection() {\n  hull() {\n    translate(v=[0, 0, 0]) {\n      sphere(r=2);\n    }\n"));
    assert!(slab
        .to_string()
        .ends_with("  }\n  cube(size=[40, 40, 4], center=true);\n}"));
}

#[test]
fn models_can_be_collected_in_memory() {
    let mut storage = InMemoryStorage::default();
    let parts = [
        ("base.scad", square(40.0, 20.0, true).linear_extrude(2.0, false)),
        ("knob.scad", difference([sphere(4.0), cube(Vector::splat(8.0), true).down(4.0)])),
    ];
    for (path, part) in &parts {
        part.store_in(&mut storage, path).unwrap();
    }

    assert_eq!(storage.len(), 2);
    assert_eq!(
        storage.get("base.scad"),
        Some("linear_extrude(height=2, center=false) {\n  square(size=[40, 20], center=true);\n}")
    );
}
