//! # Primitive Constructors
//!
//! Leaf shapes. Arguments are packed under the parameter names OpenSCAD uses,
//! in the order they are listed here. No value is validated: a negative
//! radius is passed through for the renderer to judge.

use crate::node::{Node, Primitive, PrimitiveKind};
use crate::params::Params;
use crate::vector::Vector;

fn primitive(kind: PrimitiveKind, params: Params) -> Node {
    Primitive::new(kind, params).into()
}

/// A box with edge lengths `size`; corner at the origin unless `center`.
///
/// # Examples
/// ```
/// use openscad_dsl::cube;
/// let c = cube([10.0, 10.0, 10.0], false);
/// assert_eq!(c.to_string(), "cube(size=[10, 10, 10], center=false);");
/// ```
pub fn cube(size: impl Into<Vector>, center: bool) -> Node {
    primitive(
        PrimitiveKind::Cube,
        Params::new().with("size", size.into()).with("center", center),
    )
}

/// A sphere centered at the origin.
pub fn sphere(radius: f64) -> Node {
    primitive(PrimitiveKind::Sphere, Params::new().with("r", radius))
}

/// A cylinder along +z; spans `[-h/2, h/2]` when `center`.
///
/// # Examples
/// ```
/// use openscad_dsl::cylinder;
/// assert_eq!(
///     cylinder(10.0, 2.5, true).to_string(),
///     "cylinder(h=10, r=2.5, center=true);"
/// );
/// ```
pub fn cylinder(height: f64, radius: f64, center: bool) -> Node {
    primitive(
        PrimitiveKind::Cylinder,
        Params::new()
            .with("h", height)
            .with("r", radius)
            .with("center", center),
    )
}

/// A 2D rectangle of `x` by `y`.
pub fn square(x: f64, y: f64, center: bool) -> Node {
    primitive(
        PrimitiveKind::Square,
        Params::new().with("size", [x, y]).with("center", center),
    )
}

/// A 2D circle centered at the origin.
pub fn circle(radius: f64) -> Node {
    primitive(PrimitiveKind::Circle, Params::new().with("r", radius))
}

/// A 2D outline through `points`, closed implicitly.
///
/// # Examples
/// ```
/// use openscad_dsl::polygon;
/// let tri = polygon([[0.0, 0.0], [4.0, 0.0], [0.0, 3.0]]);
/// assert_eq!(tri.to_string(), "polygon(points=[[0, 0], [4, 0], [0, 3]]);");
/// ```
pub fn polygon<I>(points: I) -> Node
where
    I: IntoIterator<Item = [f64; 2]>,
{
    let points: Vec<[f64; 2]> = points.into_iter().collect();
    primitive(PrimitiveKind::Polygon, Params::new().with("points", points))
}
