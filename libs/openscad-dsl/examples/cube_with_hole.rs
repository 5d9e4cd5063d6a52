//! Builds a cube with a spherical dent and writes it as OpenSCAD source.
//!
//! ```bash
//! RUST_LOG=debug cargo run -p openscad-dsl --example cube_with_hole -- model.scad
//! ```

use config::constants::DEFAULT_OUTPUT_FILE;
use openscad_dsl::{cube, difference, sphere, translate, Vector};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_OUTPUT_FILE.to_string());

    let model = difference([
        cube(Vector::new(10.0, 10.0, 10.0), false),
        translate(Vector::new(0.0, 0.0, 10.0), sphere(5.0)),
    ]);

    model.save(&path)?;
    info!(path = %path, nodes = model.node_count(), "model written");
    Ok(())
}
