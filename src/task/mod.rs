//! Tasks built from `tasks.yaml` entries.
//!
//! Every task entry names its owning agent in the `agent` field. The agent is
//! resolved when the task factory runs, not when the factory is registered,
//! so a task entry pointing at an unknown agent only fails once resolved.

use crate::agent::Agent;
use crate::config::{Attributes, value_type};
use crate::error::{CrewError, Result};
use crate::registry::{Factory, FactoryRegistry};
use serde::{Serialize, Serializer};
use serde_yaml::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[cfg(test)]
mod tests;

/// Attribute naming the owning agent.
pub const AGENT_KEY: &str = "agent";

/// Attribute naming the output artifact path.
pub const OUTPUT_FILE_KEY: &str = "output_file";

/// A task instance handed to the execution engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Task {
    /// Name of the config entry this task was built from.
    pub name: String,

    /// Attributes of the config entry, passed through untouched.
    pub attributes: Attributes,

    /// The agent that performs this task.
    #[serde(serialize_with = "serialize_agent_name")]
    pub agent: Arc<Agent>,

    /// Where the engine should write the task's output, if anywhere.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_file: Option<PathBuf>,
}

impl Task {
    pub fn agent_name(&self) -> &str {
        &self.agent.name
    }

    pub fn description(&self) -> Option<&str> {
        self.attributes.get("description").and_then(Value::as_str)
    }

    pub fn expected_output(&self) -> Option<&str> {
        self.attributes.get("expected_output").and_then(Value::as_str)
    }

    pub fn output_file(&self) -> Option<&Path> {
        self.output_file.as_deref()
    }
}

fn serialize_agent_name<S: Serializer>(
    agent: &Arc<Agent>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&agent.name)
}

/// Builds task factories that resolve their agent through an agent registry.
#[derive(Debug, Clone)]
pub struct TaskBuilder {
    agents: Arc<FactoryRegistry<Agent>>,
}

impl TaskBuilder {
    pub fn new(agents: Arc<FactoryRegistry<Agent>>) -> Self {
        Self { agents }
    }

    /// Build the factory for one task entry.
    ///
    /// Invoking the factory fails with `UnassignedTask` when the entry has no
    /// `agent` field, `InvalidTask` when `agent` or `output_file` is not a
    /// string, and `NotFound` (kind Agent) when the agent is not registered.
    pub fn build(&self, name: &str, config: Attributes) -> Factory<Task> {
        let agents = Arc::clone(&self.agents);
        let name = name.to_string();

        Arc::new(move || -> Result<Task> {
            let agent_name = string_attribute(&name, &config, AGENT_KEY)?
                .ok_or_else(|| CrewError::UnassignedTask { task: name.clone() })?;
            let agent = agents.resolve(agent_name)?;
            let output_file =
                string_attribute(&name, &config, OUTPUT_FILE_KEY)?.map(PathBuf::from);

            Ok(Task {
                name: name.clone(),
                attributes: config.clone(),
                agent: Arc::new(agent),
                output_file,
            })
        })
    }
}

/// Read an optional string attribute; absent or `null` is `None`.
fn string_attribute<'a>(task: &str, config: &'a Attributes, key: &str) -> Result<Option<&'a str>> {
    match config.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.as_str())),
        Some(other) => Err(CrewError::InvalidTask {
            task: task.to_string(),
            key: key.to_string(),
            found: value_type(other).to_string(),
        }),
    }
}
