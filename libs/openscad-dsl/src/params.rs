//! Ordered parameter lists.
//!
//! Parameters keep insertion order so the printed argument list is
//! deterministic: `cube(size=..., center=...)` always in that order.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// A single `key=value` argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    pub key: String,
    pub value: Value,
}

/// An ordered association list of named arguments.
///
/// # Examples
/// ```
/// use openscad_dsl::Params;
/// let params = Params::new().with("h", 10.0).with("r", 2.0);
/// assert_eq!(params.to_string(), "h=10, r=2");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(Vec<Param>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an argument, consuming and returning the list.
    ///
    /// `key` is printed verbatim and must be an OpenSCAD identifier such as
    /// `r` or `$fn`. Debug builds panic on anything else.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        debug_assert!(is_identifier(&key), "invalid OpenSCAD parameter name: {key:?}");
        self.0.push(Param {
            key,
            value: value.into(),
        });
        self
    }

    /// Returns the first value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.iter().find(|p| p.key == key).map(|p| &p.value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Param> {
        self.0.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|p| p.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// `[$]?[A-Za-z_][A-Za-z0-9_]*`
fn is_identifier(key: &str) -> bool {
    let name = key.strip_prefix('$').unwrap_or(key);
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Params::new(), |params, (k, v)| params.with(k, v))
    }
}

/// Renders the comma-joined argument list without surrounding parentheses.
impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", p.key, p.value)?;
        }
        Ok(())
    }
}
