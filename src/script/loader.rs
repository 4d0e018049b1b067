//! Script file loading

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use super::parser::{parse_script, ParsedScript};

/// Error type for script loading
#[derive(Debug)]
pub enum ScriptError {
    IoError { path: PathBuf, source: std::io::Error },
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::IoError { path, source } => {
                write!(f, "Failed to read script {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ScriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScriptError::IoError { source, .. } => Some(source),
        }
    }
}

/// Find a script: an existing path is used as given, anything else is
/// looked up inside `script_dir`.
pub fn resolve_script_path(name: &Path, script_dir: &Path) -> PathBuf {
    if name.exists() {
        name.to_path_buf()
    } else {
        script_dir.join(name)
    }
}

/// Read and parse a script file. Only an unreadable file is an error;
/// problems inside the file come back as diagnostics.
pub fn load_script<P: AsRef<Path>>(path: P, default_size: (usize, usize)) -> Result<ParsedScript, ScriptError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| ScriptError::IoError {
        path: path.to_path_buf(),
        source,
    })?;

    let parsed = parse_script(&contents, default_size);
    tracing::info!(
        path = %path.display(),
        shapes = parsed.scene.len(),
        diagnostics = parsed.diagnostics.len(),
        "Loaded script"
    );
    Ok(parsed)
}
