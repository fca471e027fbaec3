use std::any::{Any, type_name};
use std::collections::HashMap;
use std::sync::Arc;

use super::{Definition, Instance, Registry, RegistryError};

/// Type-erased view of a published registry.
trait ErasedRegistry: Send + Sync {
    fn names(&self) -> Vec<String>;
    fn definition_type(&self) -> &'static str;
    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

impl<D: Definition> ErasedRegistry for Registry<D> {
    fn names(&self) -> Vec<String> {
        Registry::names(self)
    }

    fn definition_type(&self) -> &'static str {
        type_name::<D>()
    }

    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}

/// Named registries, each holding definitions of a single type.
///
/// Registry names are namespaces such as `"spawns"`; keeping them distinct
/// across domains is up to the caller.
#[derive(Default)]
pub struct RegistryStore {
    registries: HashMap<String, Arc<dyn ErasedRegistry>>,
}

impl RegistryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs an empty registry of `D` under `name`.
    ///
    /// Fails if `name` is taken; remove the old registry first to replace it.
    pub fn register_registry<D: Definition>(
        &mut self,
        name: impl Into<String>,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        if self.registries.contains_key(&name) {
            return Err(RegistryError::AlreadyRegistered(name));
        }
        tracing::debug!(registry = %name, definition = type_name::<D>(), "Registered registry");
        self.registries
            .insert(name, Arc::new(Registry::<D>::new()));
        Ok(())
    }

    /// Drops the named registry and everything in it.
    ///
    /// Returns false if there was nothing to remove.
    pub fn remove_registry(&mut self, name: &str) -> bool {
        let removed = self.registries.remove(name).is_some();
        if removed {
            tracing::debug!(registry = %name, "Removed registry");
        }
        removed
    }

    pub fn contains_registry(&self, name: &str) -> bool {
        self.registries.contains_key(name)
    }

    /// Current snapshot of the named registry.
    pub fn registry<D: Definition>(&self, name: &str) -> Result<Arc<Registry<D>>, RegistryError> {
        let erased = self
            .registries
            .get(name)
            .ok_or_else(|| RegistryError::NotRegistered(name.to_owned()))?;
        let actual = erased.definition_type();

        Arc::clone(erased)
            .into_any()
            .downcast::<Registry<D>>()
            .map_err(|_| RegistryError::TypeMismatch {
                name: name.to_owned(),
                expected: type_name::<D>(),
                actual,
            })
    }

    /// Replaces the named registry with `registry`.
    ///
    /// The name must already be registered for `D`. Snapshots handed out
    /// earlier are not affected.
    pub fn publish<D: Definition>(
        &mut self,
        name: &str,
        registry: Registry<D>,
    ) -> Result<(), RegistryError> {
        self.registry::<D>(name)?;
        self.registries.insert(name.to_owned(), Arc::new(registry));
        Ok(())
    }

    /// Sorted names of every definition in the named registry.
    ///
    /// Empty if the registry does not exist.
    pub fn all_names_in_registry(&self, name: &str) -> Vec<String> {
        self.registries
            .get(name)
            .map(|registry| registry.names())
            .unwrap_or_default()
    }

    /// Looks up a single definition.
    pub fn lookup<D: Definition>(&self, registry: &str, name: &str) -> Option<Arc<D>> {
        match self.registry::<D>(registry) {
            Ok(snapshot) => snapshot.get(name).cloned(),
            Err(err) => {
                tracing::warn!("Lookup of '{}' failed: {}", name, err);
                None
            }
        }
    }

    /// Resolves `instance`'s definition and attaches it.
    ///
    /// On a miss the instance is left unresolved, one warning is logged and
    /// false is returned.
    pub fn get_object<I: Instance>(&self, registry: &str, instance: &mut I) -> bool {
        let snapshot = match self.registry::<I::Def>(registry) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                tracing::warn!("Lookup of '{}' failed: {}", instance.defname(), err);
                return false;
            }
        };

        match snapshot.get(instance.defname()) {
            Some(def) => {
                instance.attach(Arc::clone(def));
                true
            }
            None => {
                tracing::warn!(
                    registry = %registry,
                    "No definition named '{}'",
                    instance.defname()
                );
                false
            }
        }
    }
}

impl std::fmt::Debug for RegistryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&String> = self.registries.keys().collect();
        names.sort();
        f.debug_struct("RegistryStore")
            .field("registries", &names)
            .finish()
    }
}
