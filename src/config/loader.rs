//! Reading configuration sources from disk.

use crate::error::{CrewError, Result};
use std::io;
use std::path::Path;

/// Read a configuration source, distinguishing a missing file from other I/O failures.
pub(crate) fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CrewError::ConfigNotFound {
            path: path.to_path_buf(),
        },
        // Present but not UTF-8 text.
        io::ErrorKind::InvalidData => CrewError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        },
        _ => CrewError::ConfigRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        },
    })
}

/// Parse YAML text into an untyped value, attributing syntax errors to `path`.
pub(crate) fn parse_yaml(path: &Path, content: &str) -> Result<serde_yaml::Value> {
    serde_yaml::from_str(content).map_err(|e| CrewError::ConfigParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
