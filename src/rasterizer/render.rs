//! Binary pixel buffer and segment rasterization
//!
//! Points are addressed as `(vertical, horizontal)`. Row 0 is printed first
//! and holds the highest vertical coordinate; the bottom row sits at 0.

use std::path::Path;
use image::error::{LimitError, LimitErrorKind};
use image::{GrayImage, ImageError, Luma};
use crate::math::{MathError, Vector};
use super::constants::{DEFAULT_THRESHOLD, MAX_PIXELS};
use super::math::point_to_segment_distance;
use super::types::DisplayMode;

/// H x W grid of on/off pixels, row-major
#[derive(Debug, Clone, PartialEq)]
pub struct Buffer {
    pixels: Vec<u8>,
    width: usize,
    height: usize,
    threshold: f64,
}

impl Buffer {
    /// All-off buffer using the default line threshold.
    /// Fails when `height * width` overflows or exceeds `MAX_PIXELS`.
    pub fn new(height: usize, width: usize) -> Result<Self, MathError> {
        let len = height
            .checked_mul(width)
            .filter(|&len| len <= MAX_PIXELS)
            .ok_or_else(|| {
                MathError::InvalidShape(format!(
                    "{}x{} buffer exceeds {} pixels",
                    height, width, MAX_PIXELS
                ))
            })?;
        Ok(Self {
            pixels: vec![0; len],
            width,
            height,
            threshold: DEFAULT_THRESHOLD,
        })
    }

    /// Set the distance threshold used by `draw_line`
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Pixel value at `(row, col)`, `None` outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row < self.height && col < self.width {
            Some(self.pixels[row * self.width + col])
        } else {
            None
        }
    }

    pub fn is_set(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Some(1)
    }

    /// Number of lit pixels
    pub fn count_set(&self) -> usize {
        self.pixels.iter().filter(|&&p| p != 0).count()
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Geometric position of a pixel center (vertical axis flipped).
    /// Uses `H - 1 - row`, one row lower than `H - row`, so the bottom
    /// row sits at vertical 0.
    fn pixel_position(&self, row: usize, col: usize) -> Result<Vector, MathError> {
        Vector::new(vec![(self.height - 1 - row) as f64, col as f64])
    }

    /// Rasterize segment `[a, b]` with the buffer's threshold
    pub fn draw_line(&mut self, a: &Vector, b: &Vector) -> Result<(), MathError> {
        self.draw_line_within(a, b, self.threshold)
    }

    /// Light every pixel whose center lies within `threshold` of `[a, b]`.
    /// Pixels are only ever turned on, so draw order does not matter.
    pub fn draw_line_within(&mut self, a: &Vector, b: &Vector, threshold: f64) -> Result<(), MathError> {
        for row in 0..self.height {
            for col in 0..self.width {
                let p = self.pixel_position(row, col)?;
                if point_to_segment_distance(&p, a, b)? <= threshold {
                    self.pixels[row * self.width + col] = 1;
                }
            }
        }
        Ok(())
    }

    /// Text form: one line per row, top row first, cells separated by a space
    pub fn render_text(&self, mode: DisplayMode) -> String {
        let mut out = String::with_capacity(self.height * (self.width * 2 + 1));
        for row in self.pixels.chunks(self.width.max(1)).take(self.height) {
            let line: Vec<String> = row.iter().map(|&p| mode.glyph(p != 0).to_string()).collect();
            out.push_str(&line.join(" "));
            out.push('\n');
        }
        out
    }

    /// Print the buffer to stdout
    pub fn display(&self, mode: DisplayMode) {
        print!("{}", self.render_text(mode));
    }

    /// Grayscale image with lit pixels black on white.
    /// Each buffer cell becomes a `scale x scale` block. Fails when the
    /// scaled size does not fit in `u32`.
    pub fn to_image(&self, scale: u32) -> Result<GrayImage, ImageError> {
        let scale = scale.max(1);
        let scaled = |cells: usize| {
            u32::try_from(cells)
                .ok()
                .and_then(|c| c.checked_mul(scale))
                .ok_or_else(|| ImageError::Limits(LimitError::from_kind(LimitErrorKind::DimensionError)))
        };
        let w = scaled(self.width)?;
        let h = scaled(self.height)?;
        Ok(GrayImage::from_fn(w, h, |x, y| {
            let lit = self.is_set((y / scale) as usize, (x / scale) as usize);
            Luma([if lit { 0 } else { 255 }])
        }))
    }

    /// Write the buffer as a PNG file
    pub fn save_png<P: AsRef<Path>>(&self, path: P, scale: u32) -> Result<(), ImageError> {
        self.to_image(scale)?.save_with_format(path, image::ImageFormat::Png)
    }
}
