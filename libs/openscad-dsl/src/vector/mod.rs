//! Three-component vector used for sizes, offsets and rotation angles.

use std::fmt;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::number::format_number;

/// An immutable `[x, y, z]` triple.
///
/// Wraps [`glam::DVec3`] so callers can hand over vectors computed with glam
/// directly.
///
/// # Examples
/// ```
/// use openscad_dsl::Vector;
/// let v = Vector::new(10.0, 10.0, 10.0);
/// assert_eq!(v.to_string(), "[10, 10, 10]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector(DVec3);

impl Vector {
    /// The zero vector.
    pub const ZERO: Self = Self(DVec3::ZERO);
    /// Unit vector along +x.
    pub const X: Self = Self(DVec3::X);
    /// Unit vector along +y.
    pub const Y: Self = Self(DVec3::Y);
    /// Unit vector along +z.
    pub const Z: Self = Self(DVec3::Z);

    /// Creates a vector from its components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }

    /// Creates a vector with all three components set to `value`.
    ///
    /// # Examples
    /// ```
    /// use openscad_dsl::Vector;
    /// assert_eq!(Vector::splat(2.0), Vector::new(2.0, 2.0, 2.0));
    /// ```
    pub const fn splat(value: f64) -> Self {
        Self(DVec3::splat(value))
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    pub fn z(&self) -> f64 {
        self.0.z
    }

    /// Returns the underlying glam vector.
    pub fn as_dvec3(&self) -> DVec3 {
        self.0
    }
}

impl From<DVec3> for Vector {
    fn from(v: DVec3) -> Self {
        Self(v)
    }
}

impl From<Vector> for DVec3 {
    fn from(v: Vector) -> Self {
        v.0
    }
}

impl From<[f64; 3]> for Vector {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<(f64, f64, f64)> for Vector {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}]",
            format_number(self.x()),
            format_number(self.y()),
            format_number(self.z())
        )
    }
}
