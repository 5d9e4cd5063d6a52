//! # Config Crate
//!
//! Centralized configuration constants for the OpenSCAD model builder.
//! Every literal that shapes the emitted text (indentation, number notation,
//! file naming) is defined here so the printer and the storage layer agree.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{RenderConfig, INDENT_WIDTH, SCAD_EXTENSION};
//!
//! let cfg = RenderConfig::default();
//! assert_eq!(cfg.indent_width(), INDENT_WIDTH);
//! assert_eq!(cfg.indent(), "  ");
//! assert_eq!(SCAD_EXTENSION, "scad");
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **OpenSCAD Compatible**: Output conventions match what OpenSCAD accepts
//! - **Dependency Free**: Plain constants and a validated settings struct

pub mod constants;
