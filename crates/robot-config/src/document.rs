//! Script document loading

use crate::classify::classify;
use crate::error::{ConfigError, ConfigResult};
use crate::source_text::with_source_text;
use robot_core::Node;
use serde_yaml::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load a script document from a file.
///
/// The path is used exactly as given, relative paths resolving against the
/// working directory.
pub fn load_document(path: impl AsRef<Path>) -> ConfigResult<Node> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Loading script document");

    let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    parse_source(&content, path)
}

/// Parse a script document from a string
pub fn parse_document(content: &str) -> ConfigResult<Node> {
    parse_source(content, Path::new("<string>"))
}

/// Parse, classify, then recover the source text of every scalar
fn parse_source(content: &str, source: &Path) -> ConfigResult<Node> {
    let parse_error = |err: serde_yaml::Error| ConfigError::ParseYaml {
        path: source.to_path_buf(),
        source: err,
    };

    let value: Value = serde_yaml::from_str(content).map_err(parse_error)?;
    let shape = classify(&value).map_err(|err| ConfigError::Classify {
        path: source.to_path_buf(),
        source: err,
    })?;
    with_source_text(content, &shape).map_err(parse_error)
}
