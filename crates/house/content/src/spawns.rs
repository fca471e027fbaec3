//! The spawn point registry.

use std::path::Path;
use std::sync::Arc;

use house_core::{SpawnPoint, SpawnPointDef};

use crate::loaders::{DataFormat, LoadResult, LoadSummary};
use crate::registry::{Definition, Instance, RegistryStore};

/// Registry name for spawn point definitions.
pub const SPAWNS_REGISTRY: &str = "spawns";

impl Definition for SpawnPointDef {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    /// Classifies once at load so payload problems are reported and repaired
    /// before the definition is shared.
    fn normalize(&mut self) {
        self.classify();
    }
}

impl Instance for SpawnPoint {
    type Def = SpawnPointDef;

    fn defname(&self) -> &str {
        &self.defname
    }

    fn attach(&mut self, def: Arc<SpawnPointDef>) {
        SpawnPoint::attach(self, def);
    }
}

/// Creates a placement of the named definition at the origin.
///
/// The placement is unresolved if no such definition is loaded.
pub fn make_spawn_point(store: &RegistryStore, name: &str) -> SpawnPoint {
    let mut point = SpawnPoint::new(name);
    store.get_object(SPAWNS_REGISTRY, &mut point);
    point
}

/// Sorted names of all loaded spawn point definitions.
pub fn all_spawn_point_names(store: &RegistryStore) -> Vec<String> {
    store.all_names_in_registry(SPAWNS_REGISTRY)
}

/// Replaces the spawn registry with the `.json` definitions in `dir`.
pub fn load_all_spawn_points_in_dir(store: &mut RegistryStore, dir: &Path) -> LoadResult<LoadSummary> {
    load_spawn_points(store, dir, DataFormat::Json.default_extension(), DataFormat::Json)
}

/// Replaces the spawn registry with the definitions in `dir`.
///
/// The previous registry is dropped before loading; placements made from it
/// keep their definitions.
pub fn load_spawn_points(
    store: &mut RegistryStore,
    dir: &Path,
    extension: &str,
    format: DataFormat,
) -> LoadResult<LoadSummary> {
    store.remove_registry(SPAWNS_REGISTRY);
    store.register_registry::<SpawnPointDef>(SPAWNS_REGISTRY)?;
    store.register_all_objects_in_dir::<SpawnPointDef>(SPAWNS_REGISTRY, dir, extension, format)
}
