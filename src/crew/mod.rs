//! Crew assembly.
//!
//! Loads the three configuration documents, builds the agent and task
//! registries, and resolves the manifest into a [`CrewUnit`].
//!
//! # Pipeline
//!
//! 1. Load `agents.yaml`, `tasks.yaml` and `crew.yaml` (any failure aborts)
//! 2. Register one factory per agent entry
//! 3. Register one factory per task entry (agents resolve lazily)
//! 4. Resolve manifest agents, then tasks, in manifest order
//! 5. Look up the process strategy by name
//!
//! No step recovers from a failure, so a `CrewUnit` is either complete or
//! not returned at all.

mod unit;


pub use unit::CrewUnit;

use crate::agent::{self, Agent};
use crate::config::{ConfigDocument, ConfigPaths, CrewManifest};
use crate::error::Result;
use crate::process::Process;
use crate::registry::{DiscoveryTable, FactoryRegistry};
use crate::task::{Task, TaskBuilder};
use std::sync::Arc;

/// Owns the loaded manifest, both registries and the discovery host.
#[derive(Debug)]
pub struct CrewAssembler {
    manifest: CrewManifest,
    agents: Arc<FactoryRegistry<Agent>>,
    tasks: FactoryRegistry<Task>,
    host: DiscoveryTable,
}

impl CrewAssembler {
    /// Load all three documents and build the registries.
    ///
    /// # Errors
    ///
    /// - `ConfigNotFound` for the first missing document; no registry is built
    /// - `ConfigParse` / `InvalidManifest` for malformed documents
    /// - `NameCollision` if an agent and a task share a name
    pub fn load(paths: &ConfigPaths) -> Result<Self> {
        let agents = ConfigDocument::load(&paths.agents)?;
        let tasks = ConfigDocument::load(&paths.tasks)?;
        let manifest = CrewManifest::load(&paths.crew)?;

        Self::from_documents(agents, tasks, manifest)
    }

    /// Build the registries from already-loaded documents.
    pub fn from_documents(
        agents: ConfigDocument,
        tasks: ConfigDocument,
        manifest: CrewManifest,
    ) -> Result<Self> {
        let mut host = DiscoveryTable::new();

        let agents = Arc::new(FactoryRegistry::register_all(
            agents,
            agent::build_factory,
            &mut host,
        )?);

        let builder = TaskBuilder::new(Arc::clone(&agents));
        let tasks = FactoryRegistry::register_all(
            tasks,
            |name, config| builder.build(name, config),
            &mut host,
        )?;

        Ok(Self {
            manifest,
            agents,
            tasks,
            host,
        })
    }

    /// Build a fresh instance of the named agent.
    pub fn resolve_agent(&self, name: &str) -> Result<Agent> {
        self.agents.resolve(name)
    }

    /// Build a fresh instance of the named task, including its agent.
    pub fn resolve_task(&self, name: &str) -> Result<Task> {
        self.tasks.resolve(name)
    }

    /// Resolve the manifest into a complete crew.
    ///
    /// # Errors
    ///
    /// - `NotFound` (kind Agent) for a manifest agent that is not registered
    /// - `NotFound` / `UnassignedTask` from resolving a manifest task
    /// - `UnknownProcess` if the manifest's process is not supported
    pub fn assemble(&self) -> Result<CrewUnit> {
        let agents = self
            .manifest
            .agents
            .iter()
            .map(|name| self.resolve_agent(name))
            .collect::<Result<Vec<_>>>()?;

        let tasks = self
            .manifest
            .tasks
            .iter()
            .map(|name| self.resolve_task(name))
            .collect::<Result<Vec<_>>>()?;

        let process: Process = self.manifest.process.parse()?;

        tracing::info!(
            agents = agents.len(),
            tasks = tasks.len(),
            process = %process,
            "assembled crew"
        );

        Ok(CrewUnit {
            agents,
            tasks,
            process,
            verbose: self.manifest.verbose,
        })
    }

    pub fn manifest(&self) -> &CrewManifest {
        &self.manifest
    }

    /// Members exposed for engines that discover agents and tasks by name.
    pub fn host(&self) -> &DiscoveryTable {
        &self.host
    }

    pub fn agents(&self) -> &FactoryRegistry<Agent> {
        &self.agents
    }

    pub fn tasks(&self) -> &FactoryRegistry<Task> {
        &self.tasks
    }
}

/// Load the documents at `paths` and assemble the crew in one step.
pub fn assemble(paths: &ConfigPaths) -> Result<CrewUnit> {
    CrewAssembler::load(paths)?.assemble()
}
