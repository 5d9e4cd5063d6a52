//! # Transform Constructors
//!
//! Operations wrapping a single child: spatial transforms, `color`, and the
//! axis-aligned shortcuts (`up`, `down`, ...) that expand to `translate`.
//! Every constructor also exists as a consuming method on [`Node`] so models
//! can be written as chains:
//!
//! ```
//! use openscad_dsl::{cylinder, Vector};
//! let pin = cylinder(10.0, 1.5, false)
//!     .rotate(Vector::new(90.0, 0.0, 0.0))
//!     .up(2.0);
//! assert_eq!(pin.name(), "translate");
//! ```

use crate::node::{Node, Operation, OperationKind};
use crate::params::Params;
use crate::vector::Vector;

fn wrap(kind: OperationKind, params: Params, child: Node) -> Node {
    Operation::new(kind, params, vec![child]).into()
}

/// Moves `child` by `v`.
///
/// # Examples
/// ```
/// use openscad_dsl::{sphere, translate};
/// let node = translate([0.0, 0.0, 10.0], sphere(5.0));
/// assert_eq!(node.to_string(), "translate(v=[0, 0, 10]) {\n  sphere(r=5);\n}");
/// ```
pub fn translate(v: impl Into<Vector>, child: Node) -> Node {
    wrap(OperationKind::Translate, Params::new().with("v", v.into()), child)
}

/// Rotates `child` by the Euler angles `a`, in degrees.
pub fn rotate(a: impl Into<Vector>, child: Node) -> Node {
    wrap(OperationKind::Rotate, Params::new().with("a", a.into()), child)
}

/// Scales `child` per axis.
pub fn scale(v: impl Into<Vector>, child: Node) -> Node {
    wrap(OperationKind::Scale, Params::new().with("v", v.into()), child)
}

/// Mirrors `child` across the plane through the origin with normal `v`.
pub fn mirror(v: impl Into<Vector>, child: Node) -> Node {
    wrap(OperationKind::Mirror, Params::new().with("v", v.into()), child)
}

/// Paints `child` with a color name or `#rgb` / `#rrggbb` hex string.
pub fn color(c: impl Into<String>, child: Node) -> Node {
    wrap(OperationKind::Color, Params::new().with("c", c.into()), child)
}

/// Like [`color`], with an opacity in `[0, 1]`.
///
/// # Examples
/// ```
/// use openscad_dsl::{color_alpha, cube};
/// let ghost = color_alpha("#333", 0.5, cube([1.0, 1.0, 1.0], false));
/// assert!(ghost.to_string().starts_with("color(c=\"#333\", alpha=0.5) {"));
/// ```
pub fn color_alpha(c: impl Into<String>, alpha: f64, child: Node) -> Node {
    wrap(
        OperationKind::Color,
        Params::new().with("c", c.into()).with("alpha", alpha),
        child,
    )
}

/// Extrudes 2D children along +z.
pub fn linear_extrude<I>(height: f64, center: bool, children: I) -> Node
where
    I: IntoIterator<Item = Node>,
{
    Operation::new(
        OperationKind::LinearExtrude,
        Params::new().with("height", height).with("center", center),
        children.into_iter().collect(),
    )
    .into()
}

// =============================================================================
// AXIS SHORTCUTS
// =============================================================================

pub fn up(z: f64, child: Node) -> Node {
    translate(Vector::new(0.0, 0.0, z), child)
}

pub fn down(z: f64, child: Node) -> Node {
    translate(Vector::new(0.0, 0.0, -z), child)
}

pub fn left(x: f64, child: Node) -> Node {
    translate(Vector::new(-x, 0.0, 0.0), child)
}

pub fn right(x: f64, child: Node) -> Node {
    translate(Vector::new(x, 0.0, 0.0), child)
}

pub fn forward(y: f64, child: Node) -> Node {
    translate(Vector::new(0.0, y, 0.0), child)
}

pub fn back(y: f64, child: Node) -> Node {
    translate(Vector::new(0.0, -y, 0.0), child)
}

// =============================================================================
// CHAINING
// =============================================================================

impl Node {
    pub fn translate(self, v: impl Into<Vector>) -> Node {
        translate(v, self)
    }

    pub fn rotate(self, a: impl Into<Vector>) -> Node {
        rotate(a, self)
    }

    pub fn scale(self, v: impl Into<Vector>) -> Node {
        scale(v, self)
    }

    pub fn mirror(self, v: impl Into<Vector>) -> Node {
        mirror(v, self)
    }

    pub fn color(self, c: impl Into<String>) -> Node {
        color(c, self)
    }

    pub fn color_alpha(self, c: impl Into<String>, alpha: f64) -> Node {
        color_alpha(c, alpha, self)
    }

    pub fn linear_extrude(self, height: f64, center: bool) -> Node {
        linear_extrude(height, center, [self])
    }

    pub fn up(self, z: f64) -> Node {
        up(z, self)
    }

    pub fn down(self, z: f64) -> Node {
        down(z, self)
    }

    pub fn left(self, x: f64) -> Node {
        left(x, self)
    }

    pub fn right(self, x: f64) -> Node {
        right(x, self)
    }

    pub fn forward(self, y: f64) -> Node {
        forward(y, self)
    }

    pub fn back(self, y: f64) -> Node {
        back(y, self)
    }
}
