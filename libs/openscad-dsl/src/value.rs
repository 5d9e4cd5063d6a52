//! # Parameter Values
//!
//! The closed set of values a node parameter can hold. The printer matches on
//! every variant, so adding one is a compile-time checked change.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::number::format_number;
use crate::vector::Vector;

/// A parameter value as written in OpenSCAD source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Number(f64),
    Boolean(bool),
    Vector(Vector),
    /// A string literal, e.g. a color name.
    Text(String),
    /// A two-component list such as a `square` size.
    Point([f64; 2]),
    /// A list of 2D points, e.g. `polygon` outlines.
    Points(Vec<[f64; 2]>),
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<Vector> for Value {
    fn from(v: Vector) -> Self {
        Value::Vector(v)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<[f64; 2]> for Value {
    fn from(p: [f64; 2]) -> Self {
        Value::Point(p)
    }
}

impl From<Vec<[f64; 2]>> for Value {
    fn from(points: Vec<[f64; 2]>) -> Self {
        Value::Points(points)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Vector(v) => write!(f, "{}", v),
            Value::Text(s) => write_string_literal(f, s),
            Value::Point(p) => write_point(f, p),
            Value::Points(points) => {
                f.write_str("[")?;
                for (i, p) in points.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write_point(f, p)?;
                }
                f.write_str("]")
            }
        }
    }
}

fn write_point(f: &mut fmt::Formatter<'_>, [x, y]: &[f64; 2]) -> fmt::Result {
    write!(f, "[{}, {}]", format_number(*x), format_number(*y))
}

// Raw newlines would break the line-based indentation of enclosing blocks.
fn write_string_literal(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            other => write!(f, "{}", other)?,
        }
    }
    f.write_str("\"")
}
