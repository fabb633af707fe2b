//! Configuration documents for crew assembly.
//!
//! Three YAML documents drive assembly: `agents.yaml` and `tasks.yaml` map a
//! unique name to a set of attributes, and `crew.yaml` is the manifest naming
//! which agents and tasks participate, in what order, under which process.
//!
//! # File Format
//!
//! ```yaml
//! # agents.yaml
//! researcher:
//!   role: "Senior Researcher"
//!   goal: "Find the relevant facts"
//!
//! # tasks.yaml
//! research:
//!   description: "Collect sources"
//!   agent: researcher
//!   output_file: out/research.md
//!
//! # crew.yaml
//! agents: [researcher]
//! tasks: [research]
//! process: sequential
//! verbose: true
//! ```

mod document;
mod loader;
mod manifest;
mod paths;


pub(crate) use document::value_type;

// Re-export public API
pub use document::{Attributes, ConfigDocument};
pub use manifest::CrewManifest;
pub use paths::{
    AGENTS_FILE_NAME, CONFIG_DIR_ENV, CREW_FILE_NAME, ConfigPaths, DEFAULT_CONFIG_DIR,
    TASKS_FILE_NAME,
};
