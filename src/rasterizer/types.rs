//! Core types for the rasterizer

use serde::{Serialize, Deserialize};

/// How a buffer is printed as text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum DisplayMode {
    /// Raw `0` / `1` per pixel
    Default,
    /// Filled / empty square glyph per pixel
    #[default]
    Square,
}

impl DisplayMode {
    /// Glyph for a pixel value
    pub fn glyph(self, lit: bool) -> char {
        match (self, lit) {
            (DisplayMode::Default, false) => '0',
            (DisplayMode::Default, true) => '1',
            (DisplayMode::Square, false) => '□',
            (DisplayMode::Square, true) => '■',
        }
    }
}
