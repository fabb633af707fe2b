//! Error types for crew assembly.
//!
//! Uses thiserror for derive macros. Every failure is raised where it is
//! detected and propagates unchanged to the caller of `assemble`.

use crate::registry::MemberKind;
use crate::task::AGENT_KEY;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for crewforge operations.
#[derive(Error, Debug)]
pub enum CrewError {
    /// A configuration source does not exist.
    #[error("YAML file not found: {}", path.display())]
    ConfigNotFound { path: PathBuf },

    /// A configuration source exists but could not be read.
    #[error("failed to read config file '{}': {message}", path.display())]
    ConfigRead { path: PathBuf, message: String },

    /// A configuration source is not valid YAML or has the wrong shape.
    #[error("failed to parse config file '{}': {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },

    /// The crew manifest is missing a required key or has a mistyped value.
    #[error("invalid crew manifest: {0}")]
    InvalidManifest(String),

    /// A name does not resolve to a registered agent or task.
    #[error("{kind} '{name}' not found. Available: {available}")]
    NotFound {
        kind: MemberKind,
        name: String,
        available: String,
    },

    /// A task config does not name its owning agent.
    #[error("task '{task}' has no agent assigned")]
    UnassignedTask { task: String },

    /// A task attribute the wiring layer reads has the wrong type.
    #[error("task '{task}' has an invalid '{key}': expected a string, found {found}")]
    InvalidTask {
        task: String,
        key: String,
        found: String,
    },

    /// The manifest selects a process strategy the engine does not support.
    #[error("unknown process '{0}'")]
    UnknownProcess(String),

    /// The assembled crew could not be rendered for the engine.
    #[error("failed to serialize crew: {0}")]
    Handoff(String),

    /// An agent and a task share the same name on the discovery host.
    #[error("member '{name}' is already exposed as {existing}, cannot expose it as {incoming}")]
    NameCollision {
        name: String,
        existing: MemberKind,
        incoming: MemberKind,
    },
}

impl CrewError {
    /// Kind of the member a lookup failure refers to, if any.
    pub fn kind(&self) -> Option<MemberKind> {
        match self {
            CrewError::NotFound { kind, .. } => Some(*kind),
            CrewError::UnassignedTask { .. } => Some(MemberKind::Agent),
            CrewError::InvalidTask { key, .. } if key == AGENT_KEY => Some(MemberKind::Agent),
            _ => None,
        }
    }

    /// True when a task or manifest names an agent that cannot be resolved.
    pub fn is_unknown_agent(&self) -> bool {
        self.kind() == Some(MemberKind::Agent)
    }

    /// True when the manifest names a task that cannot be resolved.
    pub fn is_unknown_task(&self) -> bool {
        self.kind() == Some(MemberKind::Task)
    }
}

/// Result type alias for crewforge operations.
pub type Result<T> = std::result::Result<T, CrewError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_kind_and_identifier() {
        let err = CrewError::NotFound {
            kind: MemberKind::Agent,
            name: "writer".to_string(),
            available: "researcher, editor".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Agent 'writer' not found. Available: researcher, editor"
        );
        assert!(err.is_unknown_agent());
        assert!(!err.is_unknown_task());
    }

    #[test]
    fn unassigned_task_counts_as_unknown_agent() {
        let err = CrewError::UnassignedTask {
            task: "draft".to_string(),
        };
        assert!(err.is_unknown_agent());
        assert_eq!(err.to_string(), "task 'draft' has no agent assigned");
    }

    #[test]
    fn mistyped_agent_field_counts_as_unknown_agent() {
        let err = CrewError::InvalidTask {
            task: "draft".to_string(),
            key: "agent".to_string(),
            found: "a number".to_string(),
        };
        assert!(err.is_unknown_agent());
        assert_eq!(
            err.to_string(),
            "task 'draft' has an invalid 'agent': expected a string, found a number"
        );

        let err = CrewError::InvalidTask {
            task: "draft".to_string(),
            key: "output_file".to_string(),
            found: "a sequence".to_string(),
        };
        assert_eq!(err.kind(), None);
    }

    #[test]
    fn config_not_found_carries_path() {
        let err = CrewError::ConfigNotFound {
            path: PathBuf::from("config/agents.yaml"),
        };
        assert_eq!(err.to_string(), "YAML file not found: config/agents.yaml");
        assert_eq!(err.kind(), None);
    }

    #[test]
    fn collision_message_names_both_kinds() {
        let err = CrewError::NameCollision {
            name: "review".to_string(),
            existing: MemberKind::Agent,
            incoming: MemberKind::Task,
        };
        assert_eq!(
            err.to_string(),
            "member 'review' is already exposed as Agent, cannot expose it as Task"
        );
    }
}
