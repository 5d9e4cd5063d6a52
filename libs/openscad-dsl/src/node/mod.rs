//! # Model Tree
//!
//! A model is a tree of [`Node`]s. Leaves are primitives (`cube`, `sphere`,
//! ...); interior nodes are operations (`translate`, `union`, ...) that own
//! their children. Nodes are built bottom-up and never mutated afterwards.
//!
//! ```text
//! difference() {            Node::Operation(Difference)
//!   cube(...);                ├── Node::Primitive(Cube)
//!   translate(...) {          └── Node::Operation(Translate)
//!     sphere(...);                  └── Node::Primitive(Sphere)
//!   }
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::params::Params;
use crate::printer;

// =============================================================================
// NAME TAGS
// =============================================================================

/// Leaf shapes, named by their OpenSCAD module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveKind {
    Cube,
    Sphere,
    Cylinder,
    Square,
    Circle,
    Polygon,
}

impl PrimitiveKind {
    /// The OpenSCAD module name.
    pub fn keyword(self) -> &'static str {
        match self {
            PrimitiveKind::Cube => "cube",
            PrimitiveKind::Sphere => "sphere",
            PrimitiveKind::Cylinder => "cylinder",
            PrimitiveKind::Square => "square",
            PrimitiveKind::Circle => "circle",
            PrimitiveKind::Polygon => "polygon",
        }
    }
}

/// Operations applied to child nodes: transforms, modifiers and booleans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationKind {
    Translate,
    Rotate,
    Scale,
    Mirror,
    Color,
    LinearExtrude,
    Union,
    Difference,
    Intersection,
    Hull,
    Minkowski,
}

impl OperationKind {
    /// The OpenSCAD module name.
    pub fn keyword(self) -> &'static str {
        match self {
            OperationKind::Translate => "translate",
            OperationKind::Rotate => "rotate",
            OperationKind::Scale => "scale",
            OperationKind::Mirror => "mirror",
            OperationKind::Color => "color",
            OperationKind::LinearExtrude => "linear_extrude",
            OperationKind::Union => "union",
            OperationKind::Difference => "difference",
            OperationKind::Intersection => "intersection",
            OperationKind::Hull => "hull",
            OperationKind::Minkowski => "minkowski",
        }
    }

    /// True for the set operations that combine any number of children.
    pub fn is_boolean(self) -> bool {
        matches!(
            self,
            OperationKind::Union | OperationKind::Difference | OperationKind::Intersection
        )
    }
}

// =============================================================================
// NODES
// =============================================================================

/// A leaf shape with its arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Primitive {
    kind: PrimitiveKind,
    params: Params,
}

impl Primitive {
    pub(crate) fn new(kind: PrimitiveKind, params: Params) -> Self {
        Self { kind, params }
    }

    pub fn kind(&self) -> PrimitiveKind {
        self.kind
    }

    pub fn params(&self) -> &Params {
        &self.params
    }
}

/// An interior node owning an ordered list of children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    kind: OperationKind,
    params: Params,
    children: Vec<Node>,
}

impl Operation {
    pub(crate) fn new(kind: OperationKind, params: Params, children: Vec<Node>) -> Self {
        Self {
            kind,
            params,
            children,
        }
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Appends a child, consuming the operation. Used by operator composition.
    pub(crate) fn push(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }
}

/// An element of the model tree.
///
/// # Examples
/// ```
/// use openscad_dsl::{sphere, translate, Vector};
/// let node = translate(Vector::new(0.0, 0.0, 10.0), sphere(5.0));
/// assert_eq!(node.name(), "translate");
/// assert_eq!(node.children().len(), 1);
/// assert_eq!(node.to_string(), "translate(v=[0, 0, 10]) {\n  sphere(r=5);\n}");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    Primitive(Primitive),
    Operation(Operation),
}

impl Node {
    /// The OpenSCAD module name emitted for this node.
    pub fn name(&self) -> &'static str {
        match self {
            Node::Primitive(p) => p.kind.keyword(),
            Node::Operation(op) => op.kind.keyword(),
        }
    }

    pub fn params(&self) -> &Params {
        match self {
            Node::Primitive(p) => &p.params,
            Node::Operation(op) => &op.params,
        }
    }

    /// Children in emission order; always empty for primitives.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Primitive(_) => &[],
            Node::Operation(op) => &op.children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Primitive(_))
    }

    /// Number of nodes on the longest root-to-leaf path, counting both ends.
    pub fn depth(&self) -> usize {
        1 + self.children().iter().map(Node::depth).max().unwrap_or(0)
    }

    /// Total number of nodes in the tree rooted here.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(Node::node_count).sum::<usize>()
    }
}

impl From<Primitive> for Node {
    fn from(p: Primitive) -> Self {
        Node::Primitive(p)
    }
}

impl From<Operation> for Node {
    fn from(op: Operation) -> Self {
        Node::Operation(op)
    }
}

/// Renders the tree with the default indentation.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&printer::print(self))
    }
}
