//! Sidebar configuration loading for Docnav.
//!
//! Locates and parses the sidebar definition file consumed at site-build
//! time, with auto-discovery of the file in parent directories. JSON and
//! YAML sources are supported, chosen by file extension.
//!
//! Parsed trees are validated before being handed to the build, so a broken
//! configuration (duplicate document identifiers, malformed nodes) halts
//! the build instead of producing a partial navigation tree. Dangling
//! identifier checks need the document corpus and stay with the caller via
//! [`docnav_sidebar::validate_against_corpus`].

use std::path::{Path, PathBuf};

use docnav_sidebar::{Sidebars, ValidationError, validate};

/// Sidebar filename to search for.
const SIDEBARS_FILENAME: &str = "sidebars.json";

/// Sidebar loading error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Sidebar file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// File extension is not a supported sidebar format.
    #[error("Unsupported sidebar file extension: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    /// Parsed trees failed validation.
    #[error("Invalid sidebar configuration: {0}")]
    Invalid(#[from] ValidationError),
}

/// Load sidebar configuration.
///
/// If `path` is provided, loads from that file. Otherwise, searches for
/// `sidebars.json` in the current directory and parents.
///
/// # Errors
///
/// Returns an error if no file is found, the file cannot be read or
/// parsed, or the parsed trees fail validation.
pub fn load(path: Option<&Path>) -> Result<Sidebars, ConfigError> {
    if let Some(path) = path {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        return load_from_file(path);
    }

    match discover() {
        Some(discovered) => load_from_file(&discovered),
        None => Err(ConfigError::NotFound(PathBuf::from(SIDEBARS_FILENAME))),
    }
}

/// Load sidebar configuration from a specific file.
///
/// Format is chosen by extension: `.json`, `.yaml`, or `.yml`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, the extension is
/// unsupported, or the parsed trees fail validation.
pub fn load_from_file(path: &Path) -> Result<Sidebars, ConfigError> {
    tracing::debug!(path = %path.display(), "Loading sidebar configuration");

    let content = std::fs::read_to_string(path)?;
    let sidebars = parse(path, &content)?;
    validate(&sidebars)?;

    tracing::debug!(trees = sidebars.len(), "Sidebar configuration loaded");
    Ok(sidebars)
}

/// Parse sidebar content in the format implied by the file extension.
fn parse(path: &Path, content: &str) -> Result<Sidebars, ConfigError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(serde_json::from_str(content)?),
        Some("yaml" | "yml") => Ok(serde_yaml::from_str(content)?),
        _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    }
}

/// Search for the sidebar file in current directory and parents.
fn discover() -> Option<PathBuf> {
    let current = std::env::current_dir().ok()?;
    discover_from(&current)
}

/// Search for the sidebar file starting from `start` and walking up.
fn discover_from(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(SIDEBARS_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}
