//! Spawn point requirements for a playable house.
//!
//! A house is playable only with enough spawn points of each kind. Placements
//! are counted by payload, so exit placements count as exits here even though
//! they classify as clues.

use crate::def::SpawnVariant;
use crate::kind::SpawnKind;
use crate::point::SpawnPoint;

/// Minimum number of placements of each kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpawnRequirements {
    pub relics: u32,
    pub explorers: u32,
    pub cleanse: u32,
    pub clues: u32,
    pub exits: u32,
}

impl SpawnRequirements {
    pub const DEFAULT_RELICS: u32 = 5;
    pub const DEFAULT_EXPLORERS: u32 = 1;
    pub const DEFAULT_CLEANSE: u32 = 3;
    pub const DEFAULT_CLUES: u32 = 10;
    pub const DEFAULT_EXITS: u32 = 1;

    /// Requirements that every house satisfies.
    pub const fn none() -> Self {
        Self {
            relics: 0,
            explorers: 0,
            cleanse: 0,
            clues: 0,
            exits: 0,
        }
    }
}

impl Default for SpawnRequirements {
    fn default() -> Self {
        Self {
            relics: Self::DEFAULT_RELICS,
            explorers: Self::DEFAULT_EXPLORERS,
            cleanse: Self::DEFAULT_CLEANSE,
            clues: Self::DEFAULT_CLUES,
            exits: Self::DEFAULT_EXITS,
        }
    }
}

/// Placements counted by payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpawnCensus {
    pub relics: u32,
    pub explorers: u32,
    pub cleanse: u32,
    pub clues: u32,
    pub exits: u32,
    pub haunts: u32,
    /// Placements whose definition was not found.
    pub unresolved: u32,
}

impl SpawnCensus {
    pub fn count<'a>(points: impl IntoIterator<Item = &'a SpawnPoint>) -> Self {
        let mut census = Self::default();
        for point in points {
            match point.variant() {
                Some(SpawnVariant::Relic) => census.relics += 1,
                Some(SpawnVariant::Explorer) => census.explorers += 1,
                Some(SpawnVariant::Cleanse) => census.cleanse += 1,
                Some(SpawnVariant::Clue) => census.clues += 1,
                Some(SpawnVariant::Exit) => census.exits += 1,
                Some(SpawnVariant::Haunt(_)) => census.haunts += 1,
                None => census.unresolved += 1,
            }
        }
        census
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SpawnError {
    #[error("house needs at least {required} {kind} spawn points, found {found}")]
    NotEnough {
        kind: SpawnKind,
        required: u32,
        found: u32,
    },
}

/// Checks `points` against `requirements`, returning the census on success.
///
/// Requirements are checked in the order relics, explorers, cleanse, clues,
/// exits; the first one not met is returned.
pub fn verify_spawns<'a>(
    points: impl IntoIterator<Item = &'a SpawnPoint>,
    requirements: &SpawnRequirements,
) -> Result<SpawnCensus, SpawnError> {
    let census = SpawnCensus::count(points);

    let checks = [
        (SpawnKind::Relic, requirements.relics, census.relics),
        (SpawnKind::Explorers, requirements.explorers, census.explorers),
        (SpawnKind::Cleanse, requirements.cleanse, census.cleanse),
        (SpawnKind::Clue, requirements.clues, census.clues),
        (SpawnKind::Exit, requirements.exits, census.exits),
    ];

    for (kind, required, found) in checks {
        if found < required {
            return Err(SpawnError::NotEnough {
                kind,
                required,
                found,
            });
        }
    }

    Ok(census)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::def::{HauntPoint, SpawnPointDef};

    fn placed(variant: SpawnVariant, n: usize) -> Vec<SpawnPoint> {
        let def = Arc::new(SpawnPointDef::with_variant("def", variant));
        (0..n)
            .map(|i| {
                let mut point = SpawnPoint::new("def").with_position(i as i32, 0);
                point.attach(Arc::clone(&def));
                point
            })
            .collect()
    }

    fn full_house() -> Vec<SpawnPoint> {
        let mut points = Vec::new();
        points.extend(placed(SpawnVariant::Relic, 5));
        points.extend(placed(SpawnVariant::Explorer, 1));
        points.extend(placed(SpawnVariant::Cleanse, 3));
        points.extend(placed(SpawnVariant::Clue, 10));
        points.extend(placed(SpawnVariant::Exit, 1));
        points.extend(placed(SpawnVariant::Haunt(HauntPoint::default()), 2));
        points
    }

    #[test]
    fn full_house_passes_defaults() {
        let points = full_house();
        let census = verify_spawns(&points, &SpawnRequirements::default()).unwrap();
        assert_eq!(census.exits, 1);
        assert_eq!(census.clues, 10);
        assert_eq!(census.haunts, 2);
        assert_eq!(census.unresolved, 0);
    }

    #[test]
    fn reports_first_unmet_requirement() {
        let mut points = full_house();
        points.retain(|p| p.variant() != Some(SpawnVariant::Cleanse));
        points.retain(|p| p.variant() != Some(SpawnVariant::Exit));

        let err = verify_spawns(&points, &SpawnRequirements::default()).unwrap_err();
        assert_eq!(
            err,
            SpawnError::NotEnough {
                kind: SpawnKind::Cleanse,
                required: 3,
                found: 0,
            }
        );
        assert_eq!(
            err.to_string(),
            "house needs at least 3 cleanse spawn points, found 0"
        );
    }

    #[test]
    fn exits_are_counted_as_exits() {
        let points = placed(SpawnVariant::Exit, 2);
        let census = SpawnCensus::count(&points);
        assert_eq!(census.exits, 2);
        assert_eq!(census.clues, 0);
    }

    #[test]
    fn unresolved_points_are_skipped() {
        let points = vec![SpawnPoint::new("ghost"), SpawnPoint::new("ghost")];
        let census = verify_spawns(&points, &SpawnRequirements::none()).unwrap();
        assert_eq!(census.unresolved, 2);
        assert_eq!(census.relics, 0);
    }
}
