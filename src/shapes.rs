//! Shape rasterization primitives for pixel-perfect rendering.
//!
//! This module converts geometric shapes into sets of integer pixel
//! coordinates using standard rasterization algorithms, and stamps those
//! coordinate sets onto a [`PixelSurface`].

use std::collections::HashSet;

use image::Rgba;

use crate::canvas::PixelSurface;

/// Rasterize a line using Bresenham's line algorithm.
///
/// Returns every pixel on the segment between the two endpoints, inclusive,
/// for any octant.
///
/// # Examples
///
/// ```
/// use rasterpaint::shapes::rasterize_line;
///
/// let pixels = rasterize_line((1, 1), (6, 3));
/// assert_eq!(pixels.len(), 6); // one pixel per column on a shallow line
/// assert!(pixels.contains(&(1, 1)));
/// assert!(pixels.contains(&(6, 3)));
/// ```
pub fn rasterize_line(p0: (i32, i32), p1: (i32, i32)) -> HashSet<(i32, i32)> {
    let mut pixels = HashSet::new();

    let (mut x0, mut y0) = p0;
    let (x1, y1) = p1;

    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        pixels.insert((x0, y0));

        if x0 == x1 && y0 == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }

    pixels
}

/// Rasterize a circle outline using the midpoint circle algorithm.
///
/// Returns the pixels of a one-pixel-wide circle centered at (cx, cy),
/// generated octant by octant with 8-way symmetry.
///
/// # Examples
///
/// ```
/// use rasterpaint::shapes::rasterize_circle;
///
/// let pixels = rasterize_circle((5, 5), 3);
/// assert!(pixels.contains(&(8, 5)));
/// assert!(pixels.contains(&(5, 2)));
/// assert!(!pixels.contains(&(5, 5))); // outline only
/// ```
pub fn rasterize_circle(center: (i32, i32), radius: i32) -> HashSet<(i32, i32)> {
    let mut pixels = HashSet::new();

    if radius < 0 {
        return pixels;
    }

    let (cx, cy) = center;
    let mut x = 0;
    let mut y = radius;
    let mut decision = 1 - radius;

    while x <= y {
        pixels.insert((cx + x, cy + y));
        pixels.insert((cx - x, cy + y));
        pixels.insert((cx + x, cy - y));
        pixels.insert((cx - x, cy - y));
        pixels.insert((cx + y, cy + x));
        pixels.insert((cx - y, cy + x));
        pixels.insert((cx + y, cy - x));
        pixels.insert((cx - y, cy - x));

        if decision < 0 {
            decision += 2 * x + 3;
        } else {
            decision += 2 * (x - y) + 5;
            y -= 1;
        }
        x += 1;
    }

    pixels
}

/// Rasterize a rectangle outline (one pixel wide).
///
/// The rectangle has top-left corner (x, y) and dimensions (w, h). Zero or
/// negative dimensions yield no pixels.
///
/// # Examples
///
/// ```
/// use rasterpaint::shapes::rasterize_rect_outline;
///
/// let pixels = rasterize_rect_outline(0, 0, 4, 4);
/// assert!(pixels.contains(&(0, 0)));
/// assert!(pixels.contains(&(3, 3)));
/// assert!(!pixels.contains(&(1, 1))); // Interior should be empty
/// ```
pub fn rasterize_rect_outline(x: i32, y: i32, w: i32, h: i32) -> HashSet<(i32, i32)> {
    let mut pixels = HashSet::new();

    if w <= 0 || h <= 0 {
        return pixels;
    }

    for dx in 0..w {
        pixels.insert((x + dx, y));
        pixels.insert((x + dx, y + h - 1));
    }
    for dy in 0..h {
        pixels.insert((x, y + dy));
        pixels.insert((x + w - 1, y + dy));
    }

    pixels
}

/// Rasterize an open polyline through the given vertices, in order.
///
/// Fewer than two vertices yield the vertices themselves.
pub fn rasterize_polyline(vertices: &[(i32, i32)]) -> HashSet<(i32, i32)> {
    if vertices.len() < 2 {
        return vertices.iter().copied().collect();
    }

    let mut pixels = HashSet::new();
    for pair in vertices.windows(2) {
        pixels.extend(rasterize_line(pair[0], pair[1]));
    }
    pixels
}

/// Rasterize a closed polygon outline: a polyline plus the closing edge
/// from the last vertex back to the first.
///
/// # Examples
///
/// ```
/// use rasterpaint::shapes::rasterize_polygon_outline;
///
/// let triangle = [(0, 0), (4, 0), (2, 3)];
/// let pixels = rasterize_polygon_outline(&triangle);
/// assert!(pixels.contains(&(2, 0))); // base edge
/// assert!(pixels.contains(&(1, 1))); // closing edge back to (0, 0)
/// ```
pub fn rasterize_polygon_outline(vertices: &[(i32, i32)]) -> HashSet<(i32, i32)> {
    let mut pixels = rasterize_polyline(vertices);
    if vertices.len() >= 3 {
        pixels.extend(rasterize_line(vertices[vertices.len() - 1], vertices[0]));
    }
    pixels
}

/// Stamp a set of pixels onto a surface with the given color and thickness.
///
/// Each coordinate covers a `thickness x thickness` square whose top-left
/// corner is the coordinate itself, so thickness 1 is a plain per-pixel
/// write. Writes landing outside the surface are absorbed by it.
pub fn stamp<S: PixelSurface>(
    surface: &mut S,
    pixels: &HashSet<(i32, i32)>,
    color: Rgba<u8>,
    thickness: u32,
) {
    for &(x, y) in pixels {
        for dy in 0..thickness as i32 {
            for dx in 0..thickness as i32 {
                surface.set_pixel(x + dx, y + dy, color);
            }
        }
    }
}
