//! Named registries of shared definitions.
//!
//! # Ownership
//!
//! A [`Registry`] owns its definitions behind `Arc`s. Placements keep the
//! `Arc` they were given, so a definition outlives a reload for as long as
//! something still points at it.
//!
//! # Reloading
//!
//! Registries are never edited in place once published. A reload builds a new
//! [`Registry`] and swaps it into the [`RegistryStore`]; readers holding the
//! previous snapshot keep seeing it unchanged.

mod store;

pub use store::RegistryStore;

use std::collections::BTreeMap;
use std::sync::Arc;

/// A named definition that can live in a registry.
pub trait Definition: Send + Sync + 'static {
    /// Registry key of this definition.
    fn name(&self) -> &str;

    /// Assigns a name to a definition that did not declare one.
    fn set_name(&mut self, name: String);

    /// Called once with exclusive access, when the definition enters a
    /// [`Registry`].
    fn normalize(&mut self) {}
}

/// A placement that links to a definition by name.
pub trait Instance {
    type Def: Definition;

    /// Name of the definition to look up.
    fn defname(&self) -> &str;

    fn attach(&mut self, def: Arc<Self::Def>);
}

/// Errors from misusing a [`RegistryStore`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("registry '{0}' is already registered")]
    AlreadyRegistered(String),

    #[error("registry '{0}' is not registered")]
    NotRegistered(String),

    #[error("registry '{name}' holds {actual}, not {expected}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        actual: &'static str,
    },
}

/// Definitions of one type, keyed by name.
///
/// Iteration is in name order.
#[derive(Debug)]
pub struct Registry<D> {
    entries: BTreeMap<String, Arc<D>>,
}

impl<D> Default for Registry<D> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<D> Clone for Registry<D> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<D: Definition> Registry<D> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes `def` and inserts it under its own name, returning the
    /// definition it replaced.
    ///
    /// Every path into a registry goes through here, so nothing is shared
    /// before [`Definition::normalize`] has run on it.
    pub fn insert(&mut self, mut def: D) -> Option<Arc<D>> {
        def.normalize();
        let name = def.name().to_owned();
        self.entries.insert(name, Arc::new(def))
    }

    pub fn get(&self, name: &str) -> Option<&Arc<D>> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// All definition names, sorted.
    pub fn names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<D>)> + '_ {
        self.entries.iter().map(|(name, def)| (name.as_str(), def))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<D: Definition> FromIterator<D> for Registry<D> {
    fn from_iter<T: IntoIterator<Item = D>>(iter: T) -> Self {
        let mut registry = Self::new();
        for def in iter {
            registry.insert(def);
        }
        registry
    }
}
