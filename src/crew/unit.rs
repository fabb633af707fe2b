//! The assembled crew handed to the execution engine.

use crate::agent::Agent;
use crate::error::{CrewError, Result};
use crate::process::Process;
use crate::task::Task;
use serde::Serialize;

/// Fully-resolved agents and tasks, in manifest order, with their process.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrewUnit {
    pub agents: Vec<Agent>,
    pub tasks: Vec<Task>,
    pub process: Process,
    pub verbose: bool,
}

impl CrewUnit {
    pub fn agent_names(&self) -> Vec<&str> {
        self.agents.iter().map(|a| a.name.as_str()).collect()
    }

    pub fn task_names(&self) -> Vec<&str> {
        self.tasks.iter().map(|t| t.name.as_str()).collect()
    }

    /// Render the crew as the JSON payload the engine's constructor accepts.
    ///
    /// Tasks reference their agent by name.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| CrewError::Handoff(e.to_string()))
    }
}
