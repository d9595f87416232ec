//! Scene exporters.

pub mod svg;

use thiserror::Error;

use crate::scene::Scene;

/// Converts a [`Scene`] into an output format.
pub trait Exporter {
    /// Render `scene` into the exporter's textual output.
    fn export_scene(&self, scene: &Scene) -> Result<String, Error>;
}

/// Errors raised while exporting a scene.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Render error: {0}")]
    Render(String),
}
