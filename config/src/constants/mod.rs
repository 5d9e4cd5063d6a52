//! Centralized configuration values shared across the OpenSCAD model builder.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// LAYOUT CONSTANTS
// =============================================================================

/// Number of spaces that make up one indentation unit in emitted blocks.
///
/// # Examples
/// ```
/// use config::constants::INDENT_WIDTH;
/// assert_eq!(INDENT_WIDTH, 2);
/// ```
pub const INDENT_WIDTH: usize = 2;

/// Largest indentation unit accepted by [`RenderConfig::new`].
///
/// # Examples
/// ```
/// use config::constants::{INDENT_WIDTH, MAX_INDENT_WIDTH};
/// assert!(INDENT_WIDTH <= MAX_INDENT_WIDTH);
/// ```
pub const MAX_INDENT_WIDTH: usize = 8;

// =============================================================================
// NUMBER NOTATION CONSTANTS
// =============================================================================

/// Smallest decimal exponent still printed in fixed notation.
///
/// `0.0001` (exponent -4) prints as-is, `0.00001` switches to `1e-05`.
///
/// # Examples
/// ```
/// use config::constants::FIXED_NOTATION_MIN_EXPONENT;
/// assert_eq!(FIXED_NOTATION_MIN_EXPONENT, -4);
/// ```
pub const FIXED_NOTATION_MIN_EXPONENT: i32 = -4;

/// First decimal exponent printed in scientific notation.
///
/// `100000` (exponent 5) prints as-is, `1000000` switches to `1e+06`.
///
/// # Examples
/// ```
/// use config::constants::FIXED_NOTATION_MAX_EXPONENT;
/// assert_eq!(FIXED_NOTATION_MAX_EXPONENT, 6);
/// ```
pub const FIXED_NOTATION_MAX_EXPONENT: i32 = 6;

/// Minimum number of digits printed for a scientific exponent (`1e+06`).
///
/// # Examples
/// ```
/// use config::constants::EXPONENT_DIGITS;
/// assert_eq!(format!("{:0width$}", 6, width = EXPONENT_DIGITS), "06");
/// ```
pub const EXPONENT_DIGITS: usize = 2;

// =============================================================================
// FILE CONSTANTS
// =============================================================================

/// File extension OpenSCAD expects for source files.
///
/// # Examples
/// ```
/// use config::constants::SCAD_EXTENSION;
/// let file = format!("model.{SCAD_EXTENSION}");
/// assert_eq!(file, "model.scad");
/// ```
pub const SCAD_EXTENSION: &str = "scad";

/// Output file name used when a caller does not choose one.
///
/// # Examples
/// ```
/// use config::constants::{DEFAULT_OUTPUT_FILE, SCAD_EXTENSION};
/// assert!(DEFAULT_OUTPUT_FILE.ends_with(SCAD_EXTENSION));
/// ```
pub const DEFAULT_OUTPUT_FILE: &str = "output.scad";

// =============================================================================
// RENDER SETTINGS
// =============================================================================

/// Immutable snapshot of the settings used when printing a model tree.
///
/// Every instance either passed [`RenderConfig::new`] or holds the defaults.
///
/// # Examples
/// ```
/// use config::constants::RenderConfig;
/// let config = RenderConfig::default();
/// assert_eq!(config.indent(), "  ");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    indent_width: usize,
}

impl RenderConfig {
    /// Builds a configuration, rejecting indentation units that are empty or
    /// wider than [`MAX_INDENT_WIDTH`].
    ///
    /// # Examples
    /// ```
    /// use config::constants::RenderConfig;
    /// let cfg = RenderConfig::new(4).expect("valid config");
    /// assert_eq!(cfg.indent(), "    ");
    /// assert!(RenderConfig::new(0).is_err());
    /// ```
    pub fn new(indent_width: usize) -> Result<Self, ConfigError> {
        if indent_width == 0 || indent_width > MAX_INDENT_WIDTH {
            return Err(ConfigError::InvalidIndentWidth(indent_width));
        }
        Ok(Self { indent_width })
    }

    /// Spaces per nesting level.
    pub fn indent_width(&self) -> usize {
        self.indent_width
    }

    /// Returns one indentation unit as a string of spaces.
    pub fn indent(&self) -> String {
        " ".repeat(self.indent_width)
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent_width: INDENT_WIDTH,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Raised when the indentation unit is zero or too wide.
    InvalidIndentWidth(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidIndentWidth(value) => {
                write!(f, "indent_width must be within 1..={MAX_INDENT_WIDTH}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
