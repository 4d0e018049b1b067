//! Rasterizer constants

/// Buffer height used when a script gives no usable size
pub const DEFAULT_HEIGHT: usize = 10;

/// Buffer width used when a script gives no usable size
pub const DEFAULT_WIDTH: usize = 10;

/// Maximum pixel-to-segment distance for a pixel to be lit
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Largest buffer, in pixels, that scripts and configs may request
pub const MAX_PIXELS: usize = 4096 * 4096;
