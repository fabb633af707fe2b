//! Agents built from `agents.yaml` entries.
//!
//! The wiring layer does not interpret agent attributes; `role`, `goal` and
//! `backstory` accessors exist for the engine's convenience only.

use crate::config::Attributes;
use crate::error::Result;
use crate::registry::Factory;
use serde::Serialize;
use serde_yaml::Value;
use std::sync::Arc;

/// An agent instance handed to the execution engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Agent {
    /// Name of the config entry this agent was built from.
    pub name: String,

    /// Attributes of the config entry, passed through untouched.
    pub attributes: Attributes,

    /// Execution-trace flag; always on for agents built from config.
    pub verbose: bool,
}

impl Agent {
    pub fn new(name: impl Into<String>, attributes: Attributes) -> Self {
        Self {
            name: name.into(),
            attributes,
            verbose: true,
        }
    }

    pub fn role(&self) -> Option<&str> {
        self.str_attribute("role")
    }

    pub fn goal(&self) -> Option<&str> {
        self.str_attribute("goal")
    }

    pub fn backstory(&self) -> Option<&str> {
        self.str_attribute("backstory")
    }

    /// Raw attribute value by key.
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    fn str_attribute(&self, key: &str) -> Option<&str> {
        self.attribute(key).and_then(Value::as_str)
    }
}

/// Build the factory for one agent entry.
///
/// The factory clones the captured config on every call, so each invocation
/// yields an independent instance.
pub fn build_factory(name: &str, config: Attributes) -> Factory<Agent> {
    let name = name.to_string();
    Arc::new(move || -> Result<Agent> { Ok(Agent::new(name.clone(), config.clone())) })
}
