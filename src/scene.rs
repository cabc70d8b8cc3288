//! Scene data model, JSON persistence and rendering.
//!
//! A scene is a sized surface plus an ordered list of shapes. Shapes carry a
//! stroke color and, optionally, a fill color: rendering stamps every outline
//! first, then flood-fills each filled shape from its center seed against the
//! background, the same draw-then-fill sequence the interactive painting
//! loop uses.

use std::path::Path;

use image::Rgba;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::canvas::{Canvas, PixelSurface};
use crate::color::{parse_color, ColorError};
use crate::fill::{flood_fill, FillOptions};
use crate::shapes::{
    rasterize_circle, rasterize_polygon_outline, rasterize_polyline, stamp,
};
use crate::transform::{bounding_center, rotate_about, scale_about, translate};

/// Error type for scene loading, saving and rendering.
#[derive(Debug, Error)]
pub enum SceneError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Malformed scene JSON.
    #[error("scene parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// A shape or the scene references an unparseable color.
    #[error("color error: {0}")]
    Color(#[from] ColorError),
    /// Scene dimensions describe an empty surface.
    #[error("scene surface is empty ({width}x{height})")]
    EmptySurface { width: u32, height: u32 },
}

fn default_thickness() -> u32 {
    1
}

/// A drawable shape.
///
/// `stroke` and `fill` are color strings in the formats
/// [`parse_color`] accepts; `fill: None` leaves the interior untouched.
/// A filled polygon may carry an explicit `seed` point for its flood fill;
/// concave outlines need one, because the derived fallback (the bounding-box
/// center) can land outside the outline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Polygon {
        vertices: Vec<[i32; 2]>,
        stroke: String,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        fill: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        seed: Option<[i32; 2]>,
        #[serde(default = "default_thickness")]
        thickness: u32,
    },
    Polyline {
        vertices: Vec<[i32; 2]>,
        stroke: String,
        #[serde(default = "default_thickness")]
        thickness: u32,
    },
    Circle {
        center: [i32; 2],
        radius: i32,
        stroke: String,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        fill: Option<String>,
        #[serde(default = "default_thickness")]
        thickness: u32,
    },
}

/// View parameters applied to every shape at render time: pan offset, zoom
/// factor and rotation (degrees, clockwise) about the surface center.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub pan: (i32, i32),
    pub zoom: f64,
    pub rotate: f64,
}

impl Default for View {
    fn default() -> Self {
        View { pan: (0, 0), zoom: 1.0, rotate: 0.0 }
    }
}

fn default_background() -> String {
    "black".to_string()
}

/// A renderable scene: surface size, background color and shapes in draw
/// order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    #[serde(default = "default_background")]
    pub background: String,
    pub shapes: Vec<Shape>,
}

impl Scene {
    /// Load a scene from a JSON file.
    pub fn load(path: &Path) -> Result<Self, SceneError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a scene from a JSON string (for testing and in-memory use).
    pub fn from_json(content: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Serialize the scene to pretty JSON.
    pub fn to_json(&self) -> Result<String, SceneError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the scene to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), SceneError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Render the scene onto a fresh canvas with the default view.
    pub fn render(&self) -> Result<Canvas, SceneError> {
        self.render_with_view(&View::default())
    }

    /// Render the scene onto a fresh canvas, applying view transforms to
    /// every shape.
    ///
    /// Outlines are stamped first, then filled shapes are flood-filled
    /// against the background color from their stored seed point (moved
    /// through the view transform with the vertices), falling back to the
    /// bounding-box center when no seed is stored. A fill whose seed lands
    /// on another shape recolors only that seed pixel (the flood-fill seed
    /// quirk), rather than bleeding across the boundary.
    pub fn render_with_view(&self, view: &View) -> Result<Canvas, SceneError> {
        if self.width == 0 || self.height == 0 {
            return Err(SceneError::EmptySurface { width: self.width, height: self.height });
        }

        let background = parse_color(&self.background)?;
        let mut canvas = Canvas::new(self.width, self.height, background);
        let pivot = (self.width as i32 / 2, self.height as i32 / 2);

        // Pass 1: outlines
        let mut fills: Vec<((i32, i32), Rgba<u8>)> = Vec::new();
        for shape in &self.shapes {
            match shape {
                Shape::Polygon { vertices, stroke, fill, seed, thickness } => {
                    let vertices = apply_view(vertices, pivot, view);
                    let stroke = parse_color(stroke)?;
                    stamp(&mut canvas, &rasterize_polygon_outline(&vertices), stroke, *thickness);
                    if let Some(fill) = fill {
                        let seed = match seed {
                            Some(p) => Some(apply_view_point((p[0], p[1]), pivot, view)),
                            None => bounding_center(&vertices),
                        };
                        if let Some(seed) = seed {
                            fills.push((seed, parse_color(fill)?));
                        }
                    }
                }
                Shape::Polyline { vertices, stroke, thickness } => {
                    let vertices = apply_view(vertices, pivot, view);
                    let stroke = parse_color(stroke)?;
                    stamp(&mut canvas, &rasterize_polyline(&vertices), stroke, *thickness);
                }
                Shape::Circle { center, radius, stroke, fill, thickness } => {
                    let center = apply_view_point((center[0], center[1]), pivot, view);
                    let radius = (*radius as f64 * view.zoom).round() as i32;
                    let stroke = parse_color(stroke)?;
                    stamp(&mut canvas, &rasterize_circle(center, radius), stroke, *thickness);
                    if let Some(fill) = fill {
                        fills.push((center, parse_color(fill)?));
                    }
                }
            }
        }

        // Pass 2: interiors, once every boundary is on the surface
        for (seed, fill) in fills {
            flood_fill(&mut canvas, seed, fill, background, &FillOptions::default());
        }

        Ok(canvas)
    }
}

fn apply_view(vertices: &[[i32; 2]], pivot: (i32, i32), view: &View) -> Vec<(i32, i32)> {
    let pairs: Vec<(i32, i32)> = vertices.iter().map(|v| (v[0], v[1])).collect();
    let scaled = scale_about(&pairs, pivot, view.zoom, view.zoom);
    let rotated = rotate_about(&scaled, pivot, view.rotate);
    translate(&rotated, view.pan.0, view.pan.1)
}

fn apply_view_point(point: (i32, i32), pivot: (i32, i32), view: &View) -> (i32, i32) {
    apply_view(&[[point.0, point.1]], pivot, view)[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

    fn square_scene() -> Scene {
        Scene {
            width: 16,
            height: 16,
            background: "black".to_string(),
            shapes: vec![Shape::Polygon {
                vertices: vec![[3, 3], [12, 3], [12, 12], [3, 12]],
                stroke: "white".to_string(),
                fill: Some("red".to_string()),
                seed: None,
                thickness: 1,
            }],
        }
    }

    #[test]
    fn test_scene_json_roundtrip() {
        let scene = square_scene();
        let json = scene.to_json().unwrap();
        let parsed = Scene::from_json(&json).unwrap();
        assert_eq!(scene, parsed);
    }

    #[test]
    fn test_scene_defaults_from_minimal_json() {
        let scene = Scene::from_json(
            r#"{"width": 8, "height": 8, "shapes": [
                {"type": "polyline", "vertices": [[0,0],[7,7]], "stroke": "white"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(scene.background, "black");
        match &scene.shapes[0] {
            Shape::Polyline { thickness, .. } => assert_eq!(*thickness, 1),
            other => panic!("expected polyline, got {:?}", other),
        }
    }

    #[test]
    fn test_render_filled_polygon() {
        let canvas = square_scene().render().unwrap();
        // Outline
        assert_eq!(canvas.get_pixel(3, 3), WHITE);
        assert_eq!(canvas.get_pixel(12, 8), WHITE);
        // Interior flood-filled
        assert_eq!(canvas.get_pixel(7, 7), RED);
        assert_eq!(canvas.get_pixel(4, 11), RED);
        // Exterior untouched
        assert_eq!(canvas.get_pixel(0, 0), BLACK);
        assert_eq!(canvas.get_pixel(15, 15), BLACK);
    }

    #[test]
    fn test_render_concave_polygon_with_explicit_seed() {
        // L-shaped outline: the bounding-box center (8, 10) lies in the
        // notch, outside the shape. An explicit interior seed keeps the
        // fill inside; without one it would escape onto the background.
        let scene = Scene {
            width: 24,
            height: 24,
            background: "black".to_string(),
            shapes: vec![Shape::Polygon {
                vertices: vec![[2, 2], [7, 2], [7, 14], [14, 14], [14, 18], [2, 18]],
                stroke: "white".to_string(),
                fill: Some("red".to_string()),
                seed: Some([4, 10]),
                thickness: 1,
            }],
        };
        let canvas = scene.render().unwrap();
        // Interior of the vertical bar and of the foot both fill
        assert_eq!(canvas.get_pixel(4, 10), RED);
        assert_eq!(canvas.get_pixel(10, 16), RED);
        // The notch and the exterior stay background
        assert_eq!(canvas.get_pixel(8, 8), BLACK);
        assert_eq!(canvas.get_pixel(0, 0), BLACK);
        assert_eq!(canvas.get_pixel(23, 23), BLACK);
        // Outline intact
        assert_eq!(canvas.get_pixel(2, 2), WHITE);
    }

    #[test]
    fn test_render_fill_falls_back_to_bounding_center() {
        // No seed in the document: the fill starts from the bounding-box
        // center of the transformed vertices
        let scene = Scene::from_json(
            r#"{"width": 16, "height": 16, "shapes": [
                {"type": "polygon", "vertices": [[3,3],[12,3],[12,12],[3,12]],
                 "stroke": "white", "fill": "red"}
            ]}"#,
        )
        .unwrap();
        match &scene.shapes[0] {
            Shape::Polygon { seed, .. } => assert!(seed.is_none()),
            other => panic!("expected polygon, got {:?}", other),
        }
        let canvas = scene.render().unwrap();
        assert_eq!(canvas.get_pixel(7, 7), RED);
        assert_eq!(canvas.get_pixel(0, 0), BLACK);
    }

    #[test]
    fn test_render_explicit_seed_tracks_view() {
        // The stored seed moves through the same view transform as the
        // vertices, so it stays inside the shape after a pan
        let scene = Scene {
            width: 24,
            height: 24,
            background: "black".to_string(),
            shapes: vec![Shape::Polygon {
                vertices: vec![[3, 3], [12, 3], [12, 12], [3, 12]],
                stroke: "white".to_string(),
                fill: Some("red".to_string()),
                seed: Some([7, 7]),
                thickness: 1,
            }],
        };
        let view = View { pan: (8, 4), ..View::default() };
        let canvas = scene.render_with_view(&view).unwrap();
        assert_eq!(canvas.get_pixel(15, 11), RED);
        assert_eq!(canvas.get_pixel(11, 7), WHITE);
        // The untransformed seed position is plain background now
        assert_eq!(canvas.get_pixel(7, 7), BLACK);
        assert_eq!(canvas.get_pixel(0, 0), BLACK);
    }

    #[test]
    fn test_render_unfilled_polygon_keeps_interior() {
        let mut scene = square_scene();
        if let Shape::Polygon { fill, .. } = &mut scene.shapes[0] {
            *fill = None;
        }
        let canvas = scene.render().unwrap();
        assert_eq!(canvas.get_pixel(7, 7), BLACK);
        assert_eq!(canvas.get_pixel(3, 3), WHITE);
    }

    #[test]
    fn test_render_filled_circle() {
        let scene = Scene {
            width: 20,
            height: 20,
            background: "black".to_string(),
            shapes: vec![Shape::Circle {
                center: [10, 10],
                radius: 5,
                stroke: "white".to_string(),
                fill: Some("#00F".to_string()),
                thickness: 1,
            }],
        };
        let canvas = scene.render().unwrap();
        assert_eq!(canvas.get_pixel(10, 10), Rgba([0, 0, 255, 255]));
        assert_eq!(canvas.get_pixel(15, 10), WHITE);
        assert_eq!(canvas.get_pixel(0, 0), BLACK);
    }

    #[test]
    fn test_render_with_pan() {
        let scene = square_scene();
        let view = View { pan: (2, 1), ..View::default() };
        let canvas = scene.render_with_view(&view).unwrap();
        assert_eq!(canvas.get_pixel(5, 4), WHITE); // (3,3) panned
        assert_eq!(canvas.get_pixel(9, 8), RED);
        assert_eq!(canvas.get_pixel(3, 3), BLACK);
    }

    #[test]
    fn test_render_with_zoom() {
        // Zooming out by half pulls the square toward the center
        let scene = square_scene();
        let view = View { zoom: 0.5, ..View::default() };
        let canvas = scene.render_with_view(&view).unwrap();
        // (3,3) about pivot (8,8) at 0.5 -> (6,6); (12,12) -> (10,10)
        assert_eq!(canvas.get_pixel(6, 6), WHITE);
        assert_eq!(canvas.get_pixel(10, 10), WHITE);
        assert_eq!(canvas.get_pixel(8, 8), RED);
        assert_eq!(canvas.get_pixel(3, 3), BLACK);
    }

    #[test]
    fn test_render_with_rotation_keeps_square_filled() {
        // A 90-degree rotation of a centered square maps it onto itself
        let scene = Scene {
            width: 17,
            height: 17,
            background: "black".to_string(),
            shapes: vec![Shape::Polygon {
                vertices: vec![[4, 4], [12, 4], [12, 12], [4, 12]],
                stroke: "white".to_string(),
                fill: Some("red".to_string()),
                seed: None,
                thickness: 1,
            }],
        };
        let view = View { rotate: 90.0, ..View::default() };
        let canvas = scene.render_with_view(&view).unwrap();
        assert_eq!(canvas.get_pixel(4, 4), WHITE);
        assert_eq!(canvas.get_pixel(8, 8), RED);
    }

    #[test]
    fn test_render_empty_surface_rejected() {
        let scene = Scene {
            width: 0,
            height: 4,
            background: "black".to_string(),
            shapes: vec![],
        };
        assert!(matches!(scene.render(), Err(SceneError::EmptySurface { .. })));
    }

    #[test]
    fn test_render_bad_color_surfaces_error() {
        let mut scene = square_scene();
        scene.background = "#XYZ".to_string();
        assert!(matches!(scene.render(), Err(SceneError::Color(_))));
    }

    #[test]
    fn test_load_save_roundtrip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("scene.json");
        let scene = square_scene();
        scene.save(&path).unwrap();
        let loaded = Scene::load(&path).unwrap();
        assert_eq!(scene, loaded);
    }

    #[test]
    fn test_load_missing_file() {
        let result = Scene::load(Path::new("/nonexistent/scene.json"));
        assert!(matches!(result, Err(SceneError::Io(_))));
    }

    #[test]
    fn test_load_invalid_json() {
        let result = Scene::from_json("{not valid json}");
        assert!(matches!(result, Err(SceneError::Json(_))));
    }
}
