//! Spawn-point definitions and placements for the house editor.
//!
//! `house-core` defines what a spawn point *is*: the named definition loaded
//! from data ([`SpawnPointDef`]), the kind it resolves to ([`SpawnKind`]), and
//! the positioned placement that links to it ([`SpawnPoint`]).
//!
//! Definitions encode their kind as a set of optional payloads of which exactly
//! one is expected to be present. [`SpawnPointDef::classify`] resolves that set
//! into a single kind, repairing definitions that name none and reporting those
//! that name several. Registries and data loading live in `house-content`.
pub mod classify;
pub mod def;
pub mod kind;
pub mod point;
pub mod validate;

pub use classify::{Classification, VariantViolation};
pub use def::{
    CleansePoint, CluePoint, ExitPoint, ExplorerPoint, HauntPoint, RelicPoint, SpawnPointDef,
    SpawnVariant,
};
pub use kind::{Rgba, SpawnKind};
pub use point::SpawnPoint;
pub use validate::{SpawnCensus, SpawnError, SpawnRequirements, verify_spawns};
