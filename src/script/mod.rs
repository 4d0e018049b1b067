//! Scene scripts
//!
//! Line-oriented text format:
//!
//! ```text
//! H W
//! sides scaleX scaleY rotationDegrees posX posY
//! ...
//! ```
//!
//! Blank lines are ignored. A bad line is reported and skipped; it never
//! aborts the rest of the scene. A bad size header falls back to a default
//! size.

pub mod loader;
pub mod parser;

pub use loader::{load_script, resolve_script_path, ScriptError};
pub use parser::{parse_script, Diagnostic, ParsedScript, ScriptParseError};
