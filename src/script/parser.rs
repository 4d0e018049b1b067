//! Script text to scene, with per-line diagnostics

use std::fmt;
use crate::rasterizer::MAX_PIXELS;
use crate::scene::{Scene, ShapeSpec};
use crate::shapes::ShapeError;

/// Field names of a shape line, in order
const SHAPE_FIELDS: [&str; 6] = ["sides", "scaleX", "scaleY", "rotationDegrees", "posX", "posY"];

/// What went wrong on one script line
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptParseError {
    /// The script has no non-blank lines
    MissingHeader,
    /// Header does not have exactly two fields
    HeaderFieldCount(usize),
    /// Header field is not a positive integer
    InvalidSize(String),
    /// Header size has more than `MAX_PIXELS` pixels
    SizeTooLarge { height: usize, width: usize },
    /// Shape line does not have exactly six fields
    FieldCount(usize),
    /// Side count is not a whole number
    NotAnInteger { field: &'static str, value: String },
    /// Field is not a finite number
    NotANumber { field: &'static str, value: String },
    /// Parameters parsed but the shape could not be built
    Shape(ShapeError),
}

impl fmt::Display for ScriptParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptParseError::MissingHeader => write!(f, "script is empty, expected a size header"),
            ScriptParseError::HeaderFieldCount(n) => {
                write!(f, "size header needs 2 fields (height width), got {}", n)
            }
            ScriptParseError::InvalidSize(value) => {
                write!(f, "size '{}' is not a positive integer", value)
            }
            ScriptParseError::SizeTooLarge { height, width } => {
                write!(f, "size {}x{} exceeds the {} pixel limit", height, width, MAX_PIXELS)
            }
            ScriptParseError::FieldCount(n) => write!(
                f,
                "shape line needs 6 fields (sides scaleX scaleY rotationDegrees posX posY), got {}",
                n
            ),
            ScriptParseError::NotAnInteger { field, value } => {
                write!(f, "{} '{}' is not a whole number", field, value)
            }
            ScriptParseError::NotANumber { field, value } => {
                write!(f, "{} '{}' is not a number", field, value)
            }
            ScriptParseError::Shape(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ScriptParseError {}

/// A skipped script line
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// 1-based line number
    pub line: usize,
    /// Trimmed line text
    pub content: String,
    pub error: ScriptParseError,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {} ({:?})", self.line, self.error, self.content)
    }
}

/// Result of parsing a whole script: whatever could be built, plus every
/// line that could not
#[derive(Debug, Clone)]
pub struct ParsedScript {
    pub scene: Scene,
    pub diagnostics: Vec<Diagnostic>,
    /// False when the default size was substituted
    pub header_valid: bool,
}

/// Parse script text.
///
/// `default_size` is `(height, width)`, used when the header is unusable.
/// The first non-blank line is always consumed as the header.
pub fn parse_script(source: &str, default_size: (usize, usize)) -> ParsedScript {
    let mut lines = source
        .lines()
        .enumerate()
        .map(|(i, text)| (i + 1, text.trim()))
        .filter(|(_, text)| !text.is_empty());

    let mut diagnostics = Vec::new();

    let size = match lines.next() {
        Some((line, text)) => match parse_header(text) {
            Ok(size) => Some(size),
            Err(error) => {
                diagnostics.push(Diagnostic { line, content: text.to_string(), error });
                None
            }
        },
        None => {
            diagnostics.push(Diagnostic {
                line: 1,
                content: String::new(),
                error: ScriptParseError::MissingHeader,
            });
            None
        }
    };
    let header_valid = size.is_some();
    let (height, width) = size.unwrap_or(default_size);

    let mut scene = Scene::new(height, width);
    for (line, text) in lines {
        let result = parse_shape(line, text).and_then(|spec| scene.push(spec).map_err(ScriptParseError::Shape));
        if let Err(error) = result {
            tracing::debug!(line, error = %error, "Skipping script line");
            diagnostics.push(Diagnostic { line, content: text.to_string(), error });
        }
    }

    ParsedScript { scene, diagnostics, header_valid }
}

fn parse_header(text: &str) -> Result<(usize, usize), ScriptParseError> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    if fields.len() != 2 {
        return Err(ScriptParseError::HeaderFieldCount(fields.len()));
    }
    let positive = |s: &str| match s.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ScriptParseError::InvalidSize(s.to_string())),
    };
    let (height, width) = (positive(fields[0])?, positive(fields[1])?);
    match height.checked_mul(width) {
        Some(pixels) if pixels <= MAX_PIXELS => Ok((height, width)),
        _ => Err(ScriptParseError::SizeTooLarge { height, width }),
    }
}

fn parse_shape(line: usize, text: &str) -> Result<ShapeSpec, ScriptParseError> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    if fields.len() != SHAPE_FIELDS.len() {
        return Err(ScriptParseError::FieldCount(fields.len()));
    }

    let sides = fields[0].parse::<usize>().map_err(|_| ScriptParseError::NotAnInteger {
        field: SHAPE_FIELDS[0],
        value: fields[0].to_string(),
    })?;

    let mut values = [0.0; 5];
    for (i, slot) in values.iter_mut().enumerate() {
        let raw = fields[i + 1];
        *slot = raw
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ScriptParseError::NotANumber {
                field: SHAPE_FIELDS[i + 1],
                value: raw.to_string(),
            })?;
    }
    let [scale_x, scale_y, rotation_degrees, pos_x, pos_y] = values;

    Ok(ShapeSpec {
        line,
        sides,
        scale_x,
        scale_y,
        rotation_degrees,
        pos_x,
        pos_y,
    })
}
