//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to the handler
//! for each subcommand: scene rendering, interactive-style flood fill on an
//! existing image, and scanline raster fill.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use image::Rgba;

use crate::canvas::PixelSurface;
use crate::color::parse_color;
use crate::fill::{flood_fill, raster_fill, FillOptions, VisitedMap};
use crate::output::{save_png, scale_image};
use crate::scene::{Scene, View};

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Rasterpaint - render shape scenes and fill regions on pixel surfaces
#[derive(Parser)]
#[command(name = "rpaint")]
#[command(about = "Rasterpaint - render shape scenes and fill regions on pixel surfaces")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a scene file to PNG
    Render {
        /// Input scene file (JSON)
        input: PathBuf,

        /// Output PNG file (default: {input}.png)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Scale output by integer factor (1-128, default: 1)
        #[arg(long, default_value = "1", value_parser = clap::value_parser!(u8).range(1..=128))]
        scale: u8,

        /// Pan every shape horizontally by this many pixels
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        pan_x: i32,

        /// Pan every shape vertically by this many pixels
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        pan_y: i32,

        /// Zoom factor about the surface center
        #[arg(long, default_value = "1.0")]
        zoom: f64,

        /// Rotation in degrees (clockwise) about the surface center
        #[arg(long, default_value = "0.0", allow_hyphen_values = true)]
        rotate: f64,
    },
    /// Flood-fill a region of a PNG from a seed point
    Fill {
        /// Input PNG file
        input: PathBuf,

        /// Seed x coordinate
        #[arg(short, long)]
        x: i32,

        /// Seed y coordinate
        #[arg(short, long)]
        y: i32,

        /// Fill color (hex like '#FF0000' or a named color)
        #[arg(short, long)]
        color: String,

        /// Color to replace (default: the color at the seed point)
        #[arg(short, long)]
        target: Option<String>,

        /// Rows at the bottom of the image the fill never expands into
        #[arg(long, default_value = "0")]
        bottom_margin: u32,

        /// Output PNG file (default: overwrite input)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Scanline-fill outlined interiors inside a rectangle of a PNG
    RasterFill {
        /// Input PNG file
        input: PathBuf,

        /// First row to scan (default: 0)
        #[arg(long, default_value = "0")]
        y_min: i32,

        /// One past the last row to scan (default: image height)
        #[arg(long)]
        y_max: Option<i32>,

        /// First column to scan (default: 0)
        #[arg(long, default_value = "0")]
        x_min: i32,

        /// One past the last column to scan (default: image width)
        #[arg(long)]
        x_max: Option<i32>,

        /// Background color bounding the runs (default: white)
        #[arg(long, default_value = "white")]
        background: String,

        /// Interior color of outlined-but-unfilled runs (default: black)
        #[arg(long, default_value = "black")]
        interior: String,

        /// Output PNG file (default: overwrite input)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Parse arguments and execute the selected command.
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render { input, output, scale, pan_x, pan_y, zoom, rotate } => {
            let view = View { pan: (pan_x, pan_y), zoom, rotate };
            run_render(&input, output.as_deref(), scale, &view)
        }
        Commands::Fill { input, x, y, color, target, bottom_margin, output } => {
            run_fill(&input, (x, y), &color, target.as_deref(), bottom_margin, output.as_deref())
        }
        Commands::RasterFill {
            input,
            y_min,
            y_max,
            x_min,
            x_max,
            background,
            interior,
            output,
        } => run_raster_fill(
            &input,
            y_min,
            y_max,
            x_min,
            x_max,
            &background,
            &interior,
            output.as_deref(),
        ),
    }
}

/// Execute the render command.
fn run_render(input: &Path, output: Option<&Path>, scale: u8, view: &View) -> ExitCode {
    let scene = match Scene::load(input) {
        Ok(scene) => scene,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let canvas = match scene.render_with_view(view) {
        Ok(canvas) => canvas,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let target = output.map(Path::to_path_buf).unwrap_or_else(|| input.with_extension("png"));
    let image = scale_image(canvas.into_image(), scale);
    if let Err(e) = save_png(&image, &target) {
        eprintln!("Error: {}", e);
        return ExitCode::from(EXIT_ERROR);
    }

    eprintln!("Wrote: {}", target.display());
    ExitCode::from(EXIT_SUCCESS)
}

/// Execute the fill command.
fn run_fill(
    input: &Path,
    seed: (i32, i32),
    color: &str,
    target: Option<&str>,
    bottom_margin: u32,
    output: Option<&Path>,
) -> ExitCode {
    let new_color = match parse_color(color) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let mut image = match load_rgba(input) {
        Ok(image) => image,
        Err(code) => return code,
    };

    // The engine recolors the seed before any boundary test, so the seed
    // must be validated here, by the caller
    if !image.in_bounds(seed.0, seed.1) {
        eprintln!(
            "Error: seed ({}, {}) out of bounds for {}x{} image",
            seed.0,
            seed.1,
            PixelSurface::width(&image),
            PixelSurface::height(&image)
        );
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    let target_color: Rgba<u8> = match target {
        Some(s) => match parse_color(s) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(EXIT_INVALID_ARGS);
            }
        },
        None => PixelSurface::get_pixel(&image, seed.0, seed.1),
    };

    let options = FillOptions { bottom_margin };
    let writes = flood_fill(&mut image, seed, new_color, target_color, &options);
    println!("Filled {} pixels", writes);

    write_image(&image, input, output)
}

/// Execute the raster-fill command.
fn run_raster_fill(
    input: &Path,
    y_min: i32,
    y_max: Option<i32>,
    x_min: i32,
    x_max: Option<i32>,
    background: &str,
    interior: &str,
    output: Option<&Path>,
) -> ExitCode {
    let background = match parse_color(background) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };
    let interior = match parse_color(interior) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let mut image = match load_rgba(input) {
        Ok(image) => image,
        Err(code) => return code,
    };

    let (width, height) = image.dimensions();
    let y_max = y_max.unwrap_or(height as i32);
    let x_max = x_max.unwrap_or(width as i32);

    // One fill per invocation: the visited map lives and dies with the run
    let mut visited = VisitedMap::new(width, height);
    let writes = match raster_fill(
        &mut image,
        &mut visited,
        y_min,
        y_max,
        x_min,
        x_max,
        background,
        interior,
    ) {
        Ok(writes) => writes,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };
    println!("Filled {} pixels", writes);

    write_image(&image, input, output)
}

fn load_rgba(input: &Path) -> Result<image::RgbaImage, ExitCode> {
    match image::open(input) {
        Ok(image) => Ok(image.to_rgba8()),
        Err(e) => {
            eprintln!("Error: cannot open '{}': {}", input.display(), e);
            Err(ExitCode::from(EXIT_ERROR))
        }
    }
}

fn write_image(image: &image::RgbaImage, input: &Path, output: Option<&Path>) -> ExitCode {
    let target = output.unwrap_or(input);
    match save_png(image, target) {
        Ok(()) => {
            eprintln!("Wrote: {}", target.display());
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_render_args() {
        let cli = Cli::try_parse_from([
            "rpaint", "render", "scene.json", "--scale", "4", "--zoom", "2.0",
        ])
        .unwrap();
        match cli.command {
            Commands::Render { scale, zoom, pan_x, .. } => {
                assert_eq!(scale, 4);
                assert_eq!(zoom, 2.0);
                assert_eq!(pan_x, 0);
            }
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn test_parse_fill_args() {
        let cli = Cli::try_parse_from([
            "rpaint", "fill", "image.png", "-x", "10", "-y", "20", "--color", "#F00",
        ])
        .unwrap();
        match cli.command {
            Commands::Fill { x, y, color, target, bottom_margin, .. } => {
                assert_eq!((x, y), (10, 20));
                assert_eq!(color, "#F00");
                assert!(target.is_none());
                assert_eq!(bottom_margin, 0);
            }
            _ => panic!("expected fill command"),
        }
    }

    #[test]
    fn test_parse_raster_fill_defaults() {
        let cli = Cli::try_parse_from(["rpaint", "raster-fill", "image.png"]).unwrap();
        match cli.command {
            Commands::RasterFill { y_min, y_max, background, interior, .. } => {
                assert_eq!(y_min, 0);
                assert!(y_max.is_none());
                assert_eq!(background, "white");
                assert_eq!(interior, "black");
            }
            _ => panic!("expected raster-fill command"),
        }
    }

    #[test]
    fn test_scale_out_of_range_rejected() {
        let result =
            Cli::try_parse_from(["rpaint", "render", "scene.json", "--scale", "200"]);
        assert!(result.is_err());
    }
}
