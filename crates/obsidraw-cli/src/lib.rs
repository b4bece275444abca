//! CLI logic for the Obsidraw converter.
//!
//! Reads an Obsidian Excalidraw document, renders it, and writes a PNG. When
//! rasterization fails the SVG is written instead.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, exit_code, parse_args};

use std::{fs, path::PathBuf};

use log::{info, warn};

use obsidraw::{
    DrawingBuilder, ObsidrawError,
    config::AppConfig,
    export::{self, Exporter, png::PngFile, svg::SvgFile},
};

/// Suffix of Obsidian Excalidraw documents.
const DOCUMENT_SUFFIX: &str = ".excalidraw.md";

/// Default PNG path for `input`: the document suffix replaced by `.png`,
/// or `.png` appended when the suffix is absent.
///
/// # Examples
///
/// ```
/// use obsidraw_cli::default_output_path;
///
/// assert_eq!(default_output_path("notes/Flow.excalidraw.md"), "notes/Flow.png");
/// assert_eq!(default_output_path("sketch.md"), "sketch.md.png");
/// ```
pub fn default_output_path(input: &str) -> String {
    match input.strip_suffix(DOCUMENT_SUFFIX) {
        Some(stem) => format!("{stem}.png"),
        None => format!("{input}.png"),
    }
}

/// SVG path for `output`: a trailing `.png` replaced by `.svg`, or `.svg`
/// appended.
///
/// # Examples
///
/// ```
/// use obsidraw_cli::svg_output_path;
///
/// assert_eq!(svg_output_path("Flow.png"), "Flow.svg");
/// assert_eq!(svg_output_path("Flow.out"), "Flow.out.svg");
/// ```
pub fn svg_output_path(output: &str) -> String {
    match output.strip_suffix(".png") {
        Some(stem) => format!("{stem}.svg"),
        None => format!("{output}.svg"),
    }
}

/// Run the Obsidraw CLI application
///
/// Converts the input document and returns the path of the primary file
/// written: the PNG, or the SVG in `--svg-only` mode and when
/// rasterization fails.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `ObsidrawError` for:
/// - File I/O errors
/// - Configuration errors, including an invalid `--bg` color
/// - Documents without a decodable drawing
pub fn run(args: &Args) -> Result<PathBuf, ObsidrawError> {
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input));
    let svg_path = svg_output_path(&output);
    info!(
        input_path = args.input,
        output_path = output;
        "Converting drawing"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    apply_overrides(&mut app_config, args);

    let source = fs::read_to_string(&args.input)?;

    let builder = DrawingBuilder::new(app_config);
    let scene = builder.parse(&source)?;
    let document = builder.render(&scene);

    if args.svg_only {
        SvgFile::new(&svg_path).export_document(&document)?;
        return Ok(svg_path.into());
    }

    if args.save_svg {
        SvgFile::new(&svg_path).export_document(&document)?;
    }

    match PngFile::new(&output, builder.raster_options()).export_document(&document) {
        Ok(()) => Ok(output.into()),
        Err(export::Error::Raster(err)) => {
            warn!(err:%, svg_path = svg_path; "PNG conversion failed, saving SVG as fallback");
            SvgFile::new(&svg_path).export_document(&document)?;
            Ok(svg_path.into())
        }
        Err(err) => Err(err.into()),
    }
}

/// Applies command-line style flags on top of the loaded configuration.
fn apply_overrides(config: &mut AppConfig, args: &Args) {
    let style = config.style_mut();
    if let Some(bg) = &args.bg {
        style.set_background_color(bg.as_str());
    }
    if let Some(padding) = args.padding {
        style.set_padding(f64::from(padding));
    }
}
