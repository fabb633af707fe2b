//! Discovery surface for external orchestration engines.
//!
//! Engines that find crew members by introspecting named members of a host
//! object get them from here. The registry itself stays a plain lookup table;
//! this adapter is populated alongside it at registration time.

use super::Factory;
use crate::agent::Agent;
use crate::error::{CrewError, Result};
use crate::task::Task;
use std::collections::HashMap;
use std::fmt;

/// Which namespace a member belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Agent,
    Task,
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberKind::Agent => write!(f, "Agent"),
            MemberKind::Task => write!(f, "Task"),
        }
    }
}

/// A factory tagged with the kind of instance it produces.
#[derive(Clone)]
pub enum Member {
    Agent(Factory<Agent>),
    Task(Factory<Task>),
}

impl Member {
    pub fn kind(&self) -> MemberKind {
        match self {
            Member::Agent(_) => MemberKind::Agent,
            Member::Task(_) => MemberKind::Task,
        }
    }

    /// The agent factory, if this member is an agent.
    pub fn as_agent(&self) -> Option<&Factory<Agent>> {
        match self {
            Member::Agent(factory) => Some(factory),
            Member::Task(_) => None,
        }
    }

    /// The task factory, if this member is a task.
    pub fn as_task(&self) -> Option<&Factory<Task>> {
        match self {
            Member::Task(factory) => Some(factory),
            Member::Agent(_) => None,
        }
    }
}

impl fmt::Debug for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Member::{}(..)", self.kind())
    }
}

/// Something that accepts dynamically-named members.
pub trait MemberHost {
    /// Attach `member` under `name`.
    ///
    /// Hosts must reject a name that is already taken rather than overwrite it.
    fn expose(&mut self, name: &str, member: Member) -> Result<()>;
}

/// The default host: an ordered table of named members.
#[derive(Debug, Default)]
pub struct DiscoveryTable {
    members: Vec<(String, Member)>,
    index: HashMap<String, usize>,
}

impl DiscoveryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a member by name.
    pub fn member(&self, name: &str) -> Option<&Member> {
        self.index.get(name).map(|&i| &self.members[i].1)
    }

    /// All member names in exposure order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|(name, _)| name.as_str())
    }

    /// Names of exposed agent factories in exposure order.
    pub fn agent_names(&self) -> Vec<&str> {
        self.names_of(MemberKind::Agent)
    }

    /// Names of exposed task factories in exposure order.
    pub fn task_names(&self) -> Vec<&str> {
        self.names_of(MemberKind::Task)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    fn names_of(&self, kind: MemberKind) -> Vec<&str> {
        self.members
            .iter()
            .filter(|(_, member)| member.kind() == kind)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

impl MemberHost for DiscoveryTable {
    fn expose(&mut self, name: &str, member: Member) -> Result<()> {
        if let Some(&i) = self.index.get(name) {
            return Err(CrewError::NameCollision {
                name: name.to_string(),
                existing: self.members[i].1.kind(),
                incoming: member.kind(),
            });
        }

        self.index.insert(name.to_string(), self.members.len());
        self.members.push((name.to_string(), member));
        Ok(())
    }
}
