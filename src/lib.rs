//! Rasterpaint - a raster painting library for shape scenes and region fills.
//!
//! The crate renders declarative shape scenes (polygons, polylines, circles)
//! onto RGBA pixel surfaces and provides two region-fill engines: a
//! queue-based flood fill with tolerant color matching, and a scanline
//! raster fill that re-opens outlined interiors using exact comparison.
//!
//! # Example
//!
//! ```
//! use image::Rgba;
//! use rasterpaint::canvas::Canvas;
//! use rasterpaint::fill::{flood_fill, FillOptions};
//! use rasterpaint::shapes::{rasterize_rect_outline, stamp};
//!
//! let black = Rgba([0, 0, 0, 255]);
//! let white = Rgba([255, 255, 255, 255]);
//! let red = Rgba([255, 0, 0, 255]);
//!
//! let mut canvas = Canvas::new(16, 16, black);
//! let outline = rasterize_rect_outline(2, 2, 10, 10);
//! stamp(&mut canvas, &outline, white, 1);
//!
//! let writes = flood_fill(&mut canvas, (7, 7), red, black, &FillOptions::default());
//! assert!(writes > 0);
//! ```

pub mod canvas;
pub mod cli;
pub mod color;
pub mod fill;
pub mod output;
pub mod scene;
pub mod shapes;
pub mod transform;
