//! CLI logic for the Arbor syntax tree renderer.
//!
//! Reads a bracket notation file, renders it through [`TreeBuilder`] and
//! writes the SVG.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use arbor::{ArborError, TreeBuilder};

/// Run the Arbor CLI application
///
/// This function processes the input file through the Arbor pipeline
/// and writes the resulting SVG to the output file.
///
/// # Errors
///
/// Returns `ArborError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), ArborError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing tree"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let builder = TreeBuilder::new(app_config);
    let tree = builder.parse(&source)?;
    let svg = builder.render_svg(&tree)?;

    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
