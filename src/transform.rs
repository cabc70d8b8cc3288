//! Geometric transforms over vertex lists.
//!
//! Shapes are stored as integer vertex lists; panning, zooming and rotating
//! happen here before rasterization. Transforms compute in `f64` and round
//! back to pixel coordinates, so repeated application accumulates rounding
//! error — callers keep the untransformed vertices and re-derive from them
//! each frame rather than transforming in place.

/// Translate every vertex by (dx, dy).
pub fn translate(vertices: &[(i32, i32)], dx: i32, dy: i32) -> Vec<(i32, i32)> {
    vertices.iter().map(|&(x, y)| (x + dx, y + dy)).collect()
}

/// Scale every vertex about a pivot point.
///
/// Factors may differ per axis; a factor of 1.0 leaves that axis unchanged.
///
/// # Examples
///
/// ```
/// use rasterpaint::transform::scale_about;
///
/// let scaled = scale_about(&[(4, 4)], (0, 0), 2.0, 2.0);
/// assert_eq!(scaled, vec![(8, 8)]);
/// ```
pub fn scale_about(
    vertices: &[(i32, i32)],
    pivot: (i32, i32),
    sx: f64,
    sy: f64,
) -> Vec<(i32, i32)> {
    let (px, py) = (pivot.0 as f64, pivot.1 as f64);
    vertices
        .iter()
        .map(|&(x, y)| {
            let nx = px + (x as f64 - px) * sx;
            let ny = py + (y as f64 - py) * sy;
            (nx.round() as i32, ny.round() as i32)
        })
        .collect()
}

/// Rotate every vertex about a pivot point by an angle in degrees.
///
/// Positive angles turn clockwise in the y-down screen coordinate system.
///
/// # Examples
///
/// ```
/// use rasterpaint::transform::rotate_about;
///
/// let rotated = rotate_about(&[(5, 0)], (0, 0), 90.0);
/// assert_eq!(rotated, vec![(0, 5)]);
/// ```
pub fn rotate_about(vertices: &[(i32, i32)], pivot: (i32, i32), degrees: f64) -> Vec<(i32, i32)> {
    let radians = degrees.to_radians();
    let (sin, cos) = radians.sin_cos();
    let (px, py) = (pivot.0 as f64, pivot.1 as f64);
    vertices
        .iter()
        .map(|&(x, y)| {
            let rx = x as f64 - px;
            let ry = y as f64 - py;
            let nx = px + rx * cos - ry * sin;
            let ny = py + rx * sin + ry * cos;
            (nx.round() as i32, ny.round() as i32)
        })
        .collect()
}

/// Axis-aligned bounding-box center of a vertex list, the default pivot for
/// whole-shape rotation and scaling.
///
/// Returns `None` for an empty list.
pub fn bounding_center(vertices: &[(i32, i32)]) -> Option<(i32, i32)> {
    if vertices.is_empty() {
        return None;
    }
    let min_x = vertices.iter().map(|&(x, _)| x).min().unwrap_or(0);
    let max_x = vertices.iter().map(|&(x, _)| x).max().unwrap_or(0);
    let min_y = vertices.iter().map(|&(_, y)| y).min().unwrap_or(0);
    let max_y = vertices.iter().map(|&(_, y)| y).max().unwrap_or(0);
    Some(((min_x + max_x) / 2, (min_y + max_y) / 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate() {
        let moved = translate(&[(0, 0), (3, -2)], 5, 10);
        assert_eq!(moved, vec![(5, 10), (8, 8)]);
    }

    #[test]
    fn test_translate_identity() {
        let vertices = [(1, 2), (3, 4)];
        assert_eq!(translate(&vertices, 0, 0), vertices.to_vec());
    }

    #[test]
    fn test_scale_about_origin() {
        let scaled = scale_about(&[(2, 3)], (0, 0), 2.0, 3.0);
        assert_eq!(scaled, vec![(4, 9)]);
    }

    #[test]
    fn test_scale_about_pivot_fixes_pivot() {
        let scaled = scale_about(&[(10, 10), (14, 10)], (10, 10), 0.5, 0.5);
        assert_eq!(scaled, vec![(10, 10), (12, 10)]);
    }

    #[test]
    fn test_scale_rounds_to_nearest() {
        let scaled = scale_about(&[(3, 0)], (0, 0), 0.5, 1.0);
        assert_eq!(scaled, vec![(2, 0)]); // 1.5 rounds away from zero
    }

    #[test]
    fn test_rotate_quarter_turn() {
        // y-down screen space: (5, 0) rotated +90 degrees lands on (0, 5)
        assert_eq!(rotate_about(&[(5, 0)], (0, 0), 90.0), vec![(0, 5)]);
        assert_eq!(rotate_about(&[(5, 0)], (0, 0), 180.0), vec![(-5, 0)]);
        assert_eq!(rotate_about(&[(5, 0)], (0, 0), 270.0), vec![(0, -5)]);
    }

    #[test]
    fn test_rotate_about_pivot_fixes_pivot() {
        let rotated = rotate_about(&[(10, 10), (13, 10)], (10, 10), 90.0);
        assert_eq!(rotated, vec![(10, 10), (10, 13)]);
    }

    #[test]
    fn test_rotate_full_turn_is_identity() {
        let vertices = [(7, 3), (-2, 8)];
        assert_eq!(rotate_about(&vertices, (1, 1), 360.0), vertices.to_vec());
    }

    #[test]
    fn test_rotate_negative_angle() {
        assert_eq!(rotate_about(&[(5, 0)], (0, 0), -90.0), vec![(0, -5)]);
    }

    #[test]
    fn test_bounding_center() {
        assert_eq!(bounding_center(&[(0, 0), (10, 4)]), Some((5, 2)));
        assert_eq!(bounding_center(&[(3, 3)]), Some((3, 3)));
        assert_eq!(bounding_center(&[]), None);
    }
}
