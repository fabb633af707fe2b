//! Crewforge: assembles agent/task crews from declarative YAML configuration.
//!
//! Three documents describe a crew: `agents.yaml` and `tasks.yaml` map names
//! to attributes, and `crew.yaml` names the participating agents and tasks in
//! order along with a process strategy. This crate turns them into a fully
//! resolved [`CrewUnit`] for an external execution engine, failing fast on
//! any name that does not resolve.
//!
//! ```no_run
//! use crewforge::{ConfigPaths, assemble};
//!
//! let crew = assemble(&ConfigPaths::resolve())?;
//! println!("{}", crew.to_json()?);
//! # Ok::<(), crewforge::CrewError>(())
//! ```

pub mod agent;
pub mod config;
pub mod crew;
pub mod error;
pub mod process;
pub mod registry;
pub mod task;

pub use agent::Agent;
pub use config::{ConfigDocument, ConfigPaths, CrewManifest};
pub use crew::{CrewAssembler, CrewUnit, assemble};
pub use error::{CrewError, Result};
pub use process::Process;
pub use registry::{
    DiscoveryTable, Exposable, Factory, FactoryRegistry, Member, MemberHost, MemberKind,
};
pub use task::{Task, TaskBuilder};
