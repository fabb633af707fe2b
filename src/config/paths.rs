//! Locations of the three configuration documents.

use std::env;
use std::path::{Path, PathBuf};

/// Environment variable overriding the configuration directory.
pub const CONFIG_DIR_ENV: &str = "CREWFORGE_CONFIG_DIR";

/// Configuration directory used when the environment does not name one.
pub const DEFAULT_CONFIG_DIR: &str = "config";

/// Agent definitions file name.
pub const AGENTS_FILE_NAME: &str = "agents.yaml";

/// Task definitions file name.
pub const TASKS_FILE_NAME: &str = "tasks.yaml";

/// Crew manifest file name.
pub const CREW_FILE_NAME: &str = "crew.yaml";

/// Paths to the agent, task and crew documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    pub agents: PathBuf,
    pub tasks: PathBuf,
    pub crew: PathBuf,
}

impl ConfigPaths {
    /// Conventional file names inside `dir`.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            agents: dir.join(AGENTS_FILE_NAME),
            tasks: dir.join(TASKS_FILE_NAME),
            crew: dir.join(CREW_FILE_NAME),
        }
    }

    /// Resolve the configuration directory from `CREWFORGE_CONFIG_DIR`,
    /// falling back to `./config`.
    pub fn resolve() -> Self {
        match env::var_os(CONFIG_DIR_ENV) {
            Some(dir) if !dir.is_empty() => Self::in_dir(PathBuf::from(dir)),
            _ => Self::in_dir(DEFAULT_CONFIG_DIR),
        }
    }
}
