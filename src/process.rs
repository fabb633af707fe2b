//! Process strategies understood by the execution engine.

use crate::error::{CrewError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// How the engine orders task execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Process {
    /// Tasks run one after another in crew order.
    Sequential,
    /// A manager agent delegates tasks to the crew.
    Hierarchical,
}

impl Process {
    /// Every strategy the engine supports.
    pub const ALL: [Process; 2] = [Process::Sequential, Process::Hierarchical];

    pub fn as_str(&self) -> &'static str {
        match self {
            Process::Sequential => "sequential",
            Process::Hierarchical => "hierarchical",
        }
    }
}

impl FromStr for Process {
    type Err = CrewError;

    /// Look a strategy up by its exact name.
    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|process| process.as_str() == s)
            .ok_or_else(|| CrewError::UnknownProcess(s.to_string()))
    }
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_processes() {
        assert_eq!("sequential".parse::<Process>().unwrap(), Process::Sequential);
        assert_eq!(
            "hierarchical".parse::<Process>().unwrap(),
            Process::Hierarchical
        );
    }

    #[test]
    fn unknown_process_is_rejected_with_its_name() {
        let err = "bogus".parse::<Process>().unwrap_err();
        assert!(matches!(err, CrewError::UnknownProcess(ref name) if name == "bogus"));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!("Sequential".parse::<Process>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for process in Process::ALL {
            assert_eq!(process.to_string().parse::<Process>().unwrap(), process);
        }
    }
}
