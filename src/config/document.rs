//! Name-to-attributes configuration documents (`agents.yaml`, `tasks.yaml`).

use super::loader::{parse_yaml, read_source};
use crate::error::{CrewError, Result};
use serde_yaml::Value;
use std::path::{Path, PathBuf};

/// Attributes of a single config entry. Opaque to the wiring layer.
pub type Attributes = serde_yaml::Mapping;

/// An insertion-ordered mapping from entry name to its attributes.
///
/// Names are unique; YAML rejects duplicate keys before they reach here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigDocument {
    entries: Vec<(String, Attributes)>,
}

impl ConfigDocument {
    /// Load a document from a YAML file.
    ///
    /// # Errors
    ///
    /// - `ConfigNotFound` if the file does not exist
    /// - `ConfigRead` if it exists but cannot be read
    /// - `ConfigParse` if it is not a mapping of names to attribute mappings
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = read_source(path)?;
        let document = Self::parse(path, &content)?;

        tracing::debug!(
            path = %path.display(),
            entries = document.len(),
            "loaded config document"
        );
        Ok(document)
    }

    /// Parse a document from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Self::parse(&PathBuf::from("<inline>"), yaml)
    }

    fn parse(path: &Path, content: &str) -> Result<Self> {
        let parse_error = |message: String| CrewError::ConfigParse {
            path: path.to_path_buf(),
            message,
        };

        let mapping = match parse_yaml(path, content)? {
            Value::Null => return Ok(Self::default()),
            Value::Mapping(mapping) => mapping,
            other => {
                return Err(parse_error(format!(
                    "expected a mapping of names to attributes, found {}",
                    value_type(&other)
                )));
            }
        };

        let mut entries = Vec::with_capacity(mapping.len());
        for (key, value) in mapping {
            let name = match key {
                Value::String(name) => name,
                other => {
                    return Err(parse_error(format!(
                        "entry names must be strings, found {}",
                        value_type(&other)
                    )));
                }
            };
            let attributes = match value {
                Value::Mapping(attributes) => attributes,
                // `name:` with nothing under it
                Value::Null => Attributes::new(),
                other => {
                    return Err(parse_error(format!(
                        "entry '{}' must be a mapping of attributes, found {}",
                        name,
                        value_type(&other)
                    )));
                }
            };
            entries.push((name, attributes));
        }

        Ok(Self { entries })
    }

    /// Get the attributes of an entry by name.
    pub fn get(&self, name: &str) -> Option<&Attributes> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, attributes)| attributes)
    }

    /// Check whether an entry with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Entry names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Iterate over entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Attributes)> {
        self.entries
            .iter()
            .map(|(name, attributes)| (name.as_str(), attributes))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for ConfigDocument {
    type Item = (String, Attributes);
    type IntoIter = std::vec::IntoIter<(String, Attributes)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Human-readable YAML type name for diagnostics.
pub(crate) fn value_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
