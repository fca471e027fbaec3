//! Data-driven spawn point content and the registries that hold it.
//!
//! This crate loads definitions from data directories into named registries
//! and hands out placements linked to them:
//! - Named registries of shared definitions ([`RegistryStore`])
//! - Directory loaders for JSON/RON/TOML definition files
//! - Content configuration (TOML file plus environment overrides)
//! - The spawn point registry and its placement helpers
//!
//! Registries are owned by the caller. Nothing here is process-global, so each
//! editor session or test builds its own [`RegistryStore`].

pub mod factory;
pub mod loaders;
pub mod registry;
pub mod spawns;

pub use factory::ContentFactory;
pub use loaders::{
    ConfigLoader, ContentConfig, DataFormat, DefinitionLoader, LoadError, LoadResult, LoadSummary,
};
pub use registry::{Definition, Instance, Registry, RegistryError, RegistryStore};
pub use spawns::{
    SPAWNS_REGISTRY, all_spawn_point_names, load_all_spawn_points_in_dir, load_spawn_points,
    make_spawn_point,
};
