//! Area-fill engines: queue-based flood fill and scanline raster fill.
//!
//! Both engines operate on a borrowed [`PixelSurface`] and have no side
//! effects beyond pixel writes. Flood fill recolors the 4-connected region
//! around a seed using tolerance-based color comparison; raster fill walks a
//! rectangle row by row, recoloring runs of a known interior color bounded by
//! a known background color, and uses a [`VisitedMap`] to avoid rescanning
//! spans it has already finalized.

use std::collections::VecDeque;

use image::Rgba;
use thiserror::Error;

use crate::canvas::PixelSurface;
use crate::color::colors_match;

/// Errors from fill operations that take caller-supplied bounds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FillError {
    /// Raster-fill rectangle lies (partly) outside the surface extent.
    #[error(
        "fill rectangle rows {y_min}..{y_max} cols {x_min}..{x_max} \
         out of bounds for {width}x{height} surface"
    )]
    OutOfBounds { y_min: i32, y_max: i32, x_min: i32, x_max: i32, width: u32, height: u32 },
}

/// Tuning for [`flood_fill`]'s interior-bounds check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FillOptions {
    /// Number of rows at the bottom of the surface a fill never expands into.
    ///
    /// Displays that reserve their last rows for chrome (a status bar, a
    /// toolbar strip) set this so a fill cannot leak into them. Zero by
    /// default: the whole surface minus its outermost right/bottom pixel
    /// line is fillable.
    pub bottom_margin: u32,
}

/// Flood-fill the 4-connected region of `target_color` reachable from `seed`.
///
/// Breadth-first over an explicit FIFO queue (not recursion, so region size
/// is not limited by stack depth). The seed pixel is recolored
/// unconditionally before any boundary test; a seed whose color does not
/// match `target_color` therefore fills exactly that one pixel. An
/// out-of-bounds seed is absorbed by the surface's out-of-bounds-write
/// rejection and fills nothing.
///
/// A popped point expands to its neighbors (up, right, down, left) only when
/// it lies strictly inside the surface: `0 <= x < width - 1` and
/// `0 <= y < height - 1 - bottom_margin`. Each neighbor still matching
/// `target_color` (via [`colors_match`]) is recolored and enqueued, so every
/// reachable pixel is written exactly once and the queue grows with the
/// frontier, not the region.
///
/// Requesting a fill where `new_color` matches `target_color` is a no-op:
/// the boundary test could never distinguish filled from unfilled pixels and
/// the walk would not terminate.
///
/// Returns the number of pixel writes issued.
///
/// # Examples
///
/// ```
/// use image::Rgba;
/// use rasterpaint::canvas::{Canvas, PixelSurface};
/// use rasterpaint::fill::{flood_fill, FillOptions};
///
/// let black = Rgba([0, 0, 0, 255]);
/// let red = Rgba([255, 0, 0, 255]);
/// let mut canvas = Canvas::new(8, 8, black);
/// flood_fill(&mut canvas, (3, 3), red, black, &FillOptions::default());
/// assert_eq!(canvas.get_pixel(0, 0), red);
/// ```
pub fn flood_fill<S: PixelSurface>(
    surface: &mut S,
    seed: (i32, i32),
    new_color: Rgba<u8>,
    target_color: Rgba<u8>,
    options: &FillOptions,
) -> usize {
    // Filling a region with the color it already is would never terminate
    if colors_match(new_color, target_color) {
        return 0;
    }

    let max_x = surface.width() as i32 - 1;
    let max_y = surface.height() as i32 - 1 - options.bottom_margin as i32;

    let mut writes = 0usize;
    let mut queue: VecDeque<(i32, i32)> = VecDeque::new();

    queue.push_back(seed);
    surface.set_pixel(seed.0, seed.1, new_color);
    writes += 1;

    while let Some((x, y)) = queue.pop_front() {
        if x >= 0 && x < max_x && y >= 0 && y < max_y {
            // Up, right, down, left. Order affects only queue growth, not
            // the filled region.
            for (nx, ny) in [(x, y - 1), (x + 1, y), (x, y + 1), (x - 1, y)] {
                if colors_match(target_color, surface.get_pixel(nx, ny)) {
                    surface.set_pixel(nx, ny, new_color);
                    writes += 1;
                    queue.push_back((nx, ny));
                }
            }
        }
    }

    writes
}

/// Per-pixel marking grid recording which pixels raster fill has finalized.
///
/// Allocated once for the surface it shadows and zeroed only by [`reset`];
/// raster fill marks cells as it colors them and never clears them mid-run.
/// A second fill pass over overlapping rows therefore skips previously
/// filled pixels — callers wanting an idempotent re-fill must [`reset`]
/// first.
///
/// [`reset`]: VisitedMap::reset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitedMap {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl VisitedMap {
    /// Create a map of the given extent with every cell unmarked.
    pub fn new(width: u32, height: u32) -> Self {
        VisitedMap { width, height, cells: vec![false; (width as usize) * (height as usize)] }
    }

    /// Map width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Map height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether (x, y) has been marked. Out-of-extent cells read as unmarked.
    pub fn is_marked(&self, x: i32, y: i32) -> bool {
        self.index(x, y).map(|i| self.cells[i]).unwrap_or(false)
    }

    /// Mark (x, y) as processed. Out-of-extent marks are no-ops.
    pub fn mark(&mut self, x: i32, y: i32) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = true;
        }
    }

    /// Clear every mark (full reinitialization).
    pub fn reset(&mut self) {
        self.cells.fill(false);
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && (x as u32) < self.width && y >= 0 && (y as u32) < self.height {
            Some((y as usize) * (self.width as usize) + x as usize)
        } else {
            None
        }
    }
}

/// Scanline-fill outlined interiors inside a rectangle of the surface.
///
/// For each row in `y_min..y_max`, scans columns `x_min..x_max` left to
/// right, skipping cells already marked in `visited`. When a cell equals
/// `background`, the cell after it classifies what follows:
///
/// - also `background`: open space — the scan advances to the end of the
///   contiguous background run without touching it, then re-examines the
///   run's last pixel against whatever comes next;
/// - `interior`: an outlined-but-unfilled span — every unvisited `interior`
///   pixel in the run is recolored to `background` and marked visited, then
///   the scan continues past the run.
///
/// Comparison here is exact equality, not [`colors_match`]: raster fill
/// targets pre-classified color pairs the renderer itself wrote, so no
/// quantization noise is involved and the looser test would risk eating
/// near-background border pixels. A run still open at `x_max` stops there;
/// pixels at or beyond `x_max` are never read or written.
///
/// Returns the number of pixels recolored, or [`FillError::OutOfBounds`]
/// when the rectangle is inverted or exceeds the surface extent (the engine
/// rejects rather than clamps, so a caller contract violation is visible
/// instead of silently reshaped).
pub fn raster_fill<S: PixelSurface>(
    surface: &mut S,
    visited: &mut VisitedMap,
    y_min: i32,
    y_max: i32,
    x_min: i32,
    x_max: i32,
    background: Rgba<u8>,
    interior: Rgba<u8>,
) -> Result<usize, FillError> {
    let width = surface.width();
    let height = surface.height();
    let bounds_ok = y_min >= 0
        && x_min >= 0
        && y_min <= y_max
        && x_min <= x_max
        && y_max <= height as i32
        && x_max <= width as i32;
    if !bounds_ok {
        return Err(FillError::OutOfBounds { y_min, y_max, x_min, x_max, width, height });
    }

    let mut writes = 0usize;

    for i in y_min..y_max {
        let mut j = x_min;
        while j < x_max {
            if !visited.is_marked(j, i) && surface.get_pixel(j, i) == background {
                if j + 1 >= x_max {
                    // Background touching the rectangle edge: nothing left
                    // to classify on this row
                    break;
                }
                let next = surface.get_pixel(j + 1, i);
                if next == background {
                    // Open space: skip to the last pixel of the background
                    // run, then re-examine it against what follows
                    while j + 1 < x_max && surface.get_pixel(j + 1, i) == background {
                        j += 1;
                    }
                    continue;
                }
                if next == interior {
                    // Outlined, unfilled span: recolor the run
                    let mut k = j + 1;
                    while k < x_max
                        && !visited.is_marked(k, i)
                        && surface.get_pixel(k, i) == interior
                    {
                        surface.set_pixel(k, i, background);
                        visited.mark(k, i);
                        writes += 1;
                        k += 1;
                    }
                    j = k;
                    continue;
                }
            }
            j += 1;
        }
    }

    Ok(writes)
}
