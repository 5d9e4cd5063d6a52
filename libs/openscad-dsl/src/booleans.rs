//! # Boolean Constructors
//!
//! Set operations over any number of children. Nothing is evaluated here; the
//! keyword is emitted and OpenSCAD computes the result. An operation with no
//! children is allowed and prints as an empty block.
//!
//! `+`, `-` and `*` on [`Node`] build `union`, `difference` and
//! `intersection`. When the left operand already is that operation the right
//! operand joins its children, so `a - b - c` prints one `difference` block
//! with three children.

use std::ops::{Add, Mul, Sub};

use crate::node::{Node, Operation, OperationKind};
use crate::params::Params;

fn combine<I>(kind: OperationKind, children: I) -> Node
where
    I: IntoIterator<Item = Node>,
{
    Operation::new(kind, Params::new(), children.into_iter().collect()).into()
}

/// Everything covered by any child.
pub fn union<I>(children: I) -> Node
where
    I: IntoIterator<Item = Node>,
{
    combine(OperationKind::Union, children)
}

/// The first child minus every following child.
///
/// # Examples
/// ```
/// use openscad_dsl::{cube, difference, sphere};
/// let node = difference([cube([2.0, 2.0, 2.0], true), sphere(1.2)]);
/// assert_eq!(
///     node.to_string(),
///     "difference() {\n  cube(size=[2, 2, 2], center=true);\n  sphere(r=1.2);\n}"
/// );
/// ```
pub fn difference<I>(children: I) -> Node
where
    I: IntoIterator<Item = Node>,
{
    combine(OperationKind::Difference, children)
}

/// The volume shared by all children.
pub fn intersection<I>(children: I) -> Node
where
    I: IntoIterator<Item = Node>,
{
    combine(OperationKind::Intersection, children)
}

/// The convex hull of all children.
pub fn hull<I>(children: I) -> Node
where
    I: IntoIterator<Item = Node>,
{
    combine(OperationKind::Hull, children)
}

/// The Minkowski sum of all children.
pub fn minkowski<I>(children: I) -> Node
where
    I: IntoIterator<Item = Node>,
{
    combine(OperationKind::Minkowski, children)
}

// =============================================================================
// OPERATORS
// =============================================================================

impl Node {
    // An empty difference or intersection is empty geometry and must stay an
    // operand; only an empty union can absorb `rhs`.
    fn join(self, kind: OperationKind, rhs: Node) -> Node {
        match self {
            Node::Operation(op)
                if op.kind() == kind
                    && (kind == OperationKind::Union || !op.children().is_empty()) =>
            {
                op.push(rhs).into()
            }
            lhs => combine(kind, [lhs, rhs]),
        }
    }
}

impl Add for Node {
    type Output = Node;

    fn add(self, rhs: Node) -> Node {
        self.join(OperationKind::Union, rhs)
    }
}

impl Sub for Node {
    type Output = Node;

    fn sub(self, rhs: Node) -> Node {
        self.join(OperationKind::Difference, rhs)
    }
}

impl Mul for Node {
    type Output = Node;

    fn mul(self, rhs: Node) -> Node {
        self.join(OperationKind::Intersection, rhs)
    }
}
