//! Named factory registries.
//!
//! A registry maps each config entry name to a zero-argument factory built
//! from that entry. Registration also exposes every factory on a
//! [`MemberHost`] so external engines can discover members by name.
//!
//! Factories are not memoizing: each [`FactoryRegistry::resolve`] call builds
//! a fresh instance.

mod host;


pub use host::{DiscoveryTable, Member, MemberHost, MemberKind};

use crate::agent::Agent;
use crate::config::{Attributes, ConfigDocument};
use crate::error::{CrewError, Result};
use crate::task::Task;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A zero-argument constructor for one named instance.
pub type Factory<T> = Arc<dyn Fn() -> Result<T> + Send + Sync>;

/// Instance types that can be registered and exposed as members.
pub trait Exposable: Sized + 'static {
    const KIND: MemberKind;

    /// Tag a factory for exposure on a host.
    fn into_member(factory: Factory<Self>) -> Member;
}

impl Exposable for Agent {
    const KIND: MemberKind = MemberKind::Agent;

    fn into_member(factory: Factory<Self>) -> Member {
        Member::Agent(factory)
    }
}

impl Exposable for Task {
    const KIND: MemberKind = MemberKind::Task;

    fn into_member(factory: Factory<Self>) -> Member {
        Member::Task(factory)
    }
}

/// Insertion-ordered table of factories, looked up by name.
pub struct FactoryRegistry<T> {
    entries: Vec<(String, Factory<T>)>,
    index: HashMap<String, usize>,
}

impl<T: Exposable> FactoryRegistry<T> {
    /// Build one factory per config entry, register it by name, and expose it on `host`.
    ///
    /// # Errors
    ///
    /// Propagates the host's rejection of a name, e.g. an agent and a task
    /// sharing a name on the same [`DiscoveryTable`].
    pub fn register_all<B, H>(configs: ConfigDocument, mut build: B, host: &mut H) -> Result<Self>
    where
        B: FnMut(&str, Attributes) -> Factory<T>,
        H: MemberHost + ?Sized,
    {
        let mut registry = Self {
            entries: Vec::with_capacity(configs.len()),
            index: HashMap::with_capacity(configs.len()),
        };

        let kind = T::KIND;
        for (name, config) in configs {
            let factory = build(&name, config);
            host.expose(&name, T::into_member(Arc::clone(&factory)))?;

            tracing::debug!(kind = %kind, name = %name, "registered factory");
            registry.index.insert(name.clone(), registry.entries.len());
            registry.entries.push((name, factory));
        }

        Ok(registry)
    }

    /// Invoke the factory registered under `name`.
    ///
    /// # Errors
    ///
    /// - `NotFound` carrying the registry's kind if `name` is not registered
    /// - whatever the factory itself returns
    pub fn resolve(&self, name: &str) -> Result<T> {
        let factory = self.get(name).ok_or_else(|| CrewError::NotFound {
            kind: T::KIND,
            name: name.to_string(),
            available: self.available(),
        })?;

        let kind = T::KIND;
        tracing::debug!(kind = %kind, name = %name, "resolving");
        factory()
    }
}

impl<T> FactoryRegistry<T> {
    /// Get the factory registered under `name`.
    pub fn get(&self, name: &str) -> Option<&Factory<T>> {
        self.index.get(name).map(|&i| &self.entries[i].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Registered names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Formatted list of registered names for error messages.
    fn available(&self) -> String {
        if self.entries.is_empty() {
            "(none)".to_string()
        } else {
            self.names().collect::<Vec<_>>().join(", ")
        }
    }
}

impl<T> fmt::Debug for FactoryRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactoryRegistry")
            .field("names", &self.names().collect::<Vec<_>>())
            .finish()
    }
}
