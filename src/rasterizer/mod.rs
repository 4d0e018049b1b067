//! Nearest-distance line rasterizer
//!
//! A pixel is lit when its center lies within a threshold distance of a
//! line segment. Buffers are binary: pixels are either off or on.
//!
//! # Module Organization
//!
//! - `types` - DisplayMode and pixel glyphs
//! - `math` - Point-to-segment distance
//! - `render` - Buffer, line rasterization, text and PNG output
//! - `constants` - Default sizes and threshold

#![allow(dead_code)]

pub mod constants;
pub mod math;
pub mod render;
pub mod types;

pub use constants::{DEFAULT_HEIGHT, DEFAULT_THRESHOLD, DEFAULT_WIDTH, MAX_PIXELS};
pub use math::point_to_segment_distance;
pub use render::Buffer;
pub use types::DisplayMode;
