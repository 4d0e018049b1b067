//! Scene assembly and the render pass
//!
//! A scene is a buffer size plus an ordered list of fully transformed
//! polygons. Rendering draws every polygon's edges into one fresh buffer.

#![allow(dead_code)]

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Serialize, Deserialize};
use crate::rasterizer::Buffer;
use crate::shapes::{regular_polygon, Polygon, Shape, ShapeError, Transform2D};

/// Radius of the unit polygon every script shape starts from
pub const UNIT_RADIUS: f64 = 1.0;

/// Parameters of one script shape line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeSpec {
    /// 1-based line in the source script
    pub line: usize,
    pub sides: usize,
    pub scale_x: f64,
    pub scale_y: f64,
    pub rotation_degrees: f64,
    pub pos_x: f64,
    pub pos_y: f64,
}

impl ShapeSpec {
    pub fn transform(&self) -> Transform2D {
        Transform2D::new()
            .scale(self.scale_x, self.scale_y)
            .rotate_degrees(self.rotation_degrees)
            .translate(self.pos_x, self.pos_y)
    }

    /// Unit regular polygon with these parameters' transform applied
    pub fn build(&self) -> Result<Polygon, ShapeError> {
        let mut polygon = regular_polygon(self.sides, UNIT_RADIUS)?;
        self.transform().apply_to(&mut polygon)?;
        Ok(polygon)
    }
}

/// A polygon together with the script parameters it was built from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneShape {
    pub spec: ShapeSpec,
    pub polygon: Polygon,
}

/// Everything needed for one render pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub height: usize,
    pub width: usize,
    pub shapes: Vec<SceneShape>,
}

/// Render-pass options
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub threshold: f64,
    /// Show a progress bar on stderr while drawing
    pub progress: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            threshold: crate::rasterizer::DEFAULT_THRESHOLD,
            progress: false,
        }
    }
}

impl Scene {
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            shapes: Vec::new(),
        }
    }

    /// Build the shape's polygon and append it. On error the scene is unchanged.
    pub fn push(&mut self, spec: ShapeSpec) -> Result<(), ShapeError> {
        let polygon = spec.build()?;
        self.shapes.push(SceneShape { spec, polygon });
        Ok(())
    }

    pub fn polygons(&self) -> impl Iterator<Item = &Polygon> + '_ {
        self.shapes.iter().map(|s| &s.polygon)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Draw every polygon into a new buffer of the scene's size
    pub fn render(&self, options: &RenderOptions) -> Result<Buffer, ShapeError> {
        let mut buffer = Buffer::new(self.height, self.width)?.with_threshold(options.threshold);

        let pb = if options.progress {
            let pb = ProgressBar::new(self.shapes.len() as u64);
            if let Ok(style) = ProgressStyle::default_bar().template("Rasterizing [{bar:30}] {pos}/{len} {msg}") {
                pb.set_style(style.progress_chars("█▓░"));
            }
            pb
        } else {
            ProgressBar::hidden()
        };

        for shape in &self.shapes {
            pb.set_message(format!("line {} ({} sides)", shape.spec.line, shape.spec.sides));
            shape.polygon.draw(&mut buffer)?;
            tracing::debug!(line = shape.spec.line, lit = buffer.count_set(), "Drew shape");
            pb.inc(1);
        }

        pb.finish_and_clear();
        Ok(buffer)
    }
}
