//! # OpenSCAD DSL
//!
//! Build OpenSCAD models as typed Rust trees and print them as OpenSCAD
//! source. Geometry is never evaluated here: booleans, transforms and shapes
//! are emitted by keyword and left to OpenSCAD.
//!
//! ## Architecture
//!
//! ```text
//! constructors (cube, translate, difference, ...) → Node tree → printer → String → storage
//! ```
//!
//! ## Example
//!
//! ```rust
//! use openscad_dsl::{cube, difference, sphere, translate, Vector};
//!
//! let model = difference([
//!     cube(Vector::new(10.0, 10.0, 10.0), false),
//!     translate(Vector::new(0.0, 0.0, 10.0), sphere(5.0)),
//! ]);
//!
//! assert_eq!(
//!     model.to_string(),
//!     "difference() {\n  cube(size=[10, 10, 10], center=false);\n  translate(v=[0, 0, 10]) {\n    sphere(r=5);\n  }\n}"
//! );
//! ```
//!
//! ## Design Principles
//!
//! - **Deterministic Output**: Parameters print in insertion order
//! - **Closed Value Set**: Numbers, booleans, vectors, strings and 2D points only
//! - **Owned Trees**: Parents own their children; nothing is shared or mutated

pub mod booleans;
pub mod error;
pub mod node;
pub mod number;
pub mod params;
pub mod primitives;
pub mod printer;
pub mod storage;
pub mod transforms;
pub mod value;
pub mod vector;

// Re-exports for convenience
pub use booleans::{difference, hull, intersection, minkowski, union};
pub use error::{PersistenceError, PersistenceResult};
pub use node::{Node, Operation, OperationKind, Primitive, PrimitiveKind};
pub use params::{Param, Params};
pub use primitives::{circle, cube, cylinder, polygon, sphere, square};
pub use printer::{print, print_with};
pub use storage::{save, save_text, DiskStorage, InMemoryStorage, Storage};
pub use transforms::{
    back, color, color_alpha, down, forward, left, linear_extrude, mirror, right, rotate, scale,
    translate, up,
};
pub use value::Value;
pub use vector::Vector;
