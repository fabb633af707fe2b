//! The crew manifest (`crew.yaml`).

use super::loader::{parse_yaml, read_source};
use crate::error::{CrewError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Which agents and tasks form the crew, in order, and how it runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewManifest {
    /// Agent names in crew order.
    pub agents: Vec<String>,

    /// Task names in crew order.
    pub tasks: Vec<String>,

    /// Name of the process strategy (e.g. "sequential").
    pub process: String,

    /// Whether the engine should trace crew execution.
    #[serde(default)]
    pub verbose: bool,

    /// Unknown fields preserved for forward compatibility.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl CrewManifest {
    /// Load the manifest from a YAML file.
    ///
    /// # Errors
    ///
    /// - `ConfigNotFound` if the file does not exist
    /// - `ConfigParse` if the file is not valid YAML
    /// - `InvalidManifest` if `agents`, `tasks` or `process` is missing or mistyped
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = read_source(path)?;
        let manifest = Self::parse(path, &content)?;

        tracing::debug!(
            path = %path.display(),
            agents = manifest.agents.len(),
            tasks = manifest.tasks.len(),
            process = %manifest.process,
            "loaded crew manifest"
        );
        Ok(manifest)
    }

    /// Parse the manifest from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Self::parse(&PathBuf::from("<inline>"), yaml)
    }

    fn parse(path: &Path, content: &str) -> Result<Self> {
        let value = parse_yaml(path, content)?;
        serde_yaml::from_value(value).map_err(|e| CrewError::InvalidManifest(e.to_string()))
    }
}
