//! Content factory for loading house content from a configuration.

use house_core::{SpawnCensus, SpawnError, SpawnPoint, verify_spawns};

use crate::loaders::{ContentConfig, LoadResult, LoadSummary};
use crate::registry::RegistryStore;
use crate::spawns::load_spawn_points;

/// Content factory that loads all house content described by a [`ContentConfig`].
pub struct ContentFactory {
    config: ContentConfig,
}

impl ContentFactory {
    pub fn new(config: ContentConfig) -> Self {
        Self { config }
    }

    /// Load (or reload) spawn point definitions into `store`.
    pub fn load_spawns(&self, store: &mut RegistryStore) -> LoadResult<LoadSummary> {
        load_spawn_points(
            store,
            &self.config.spawns_dir,
            &self.config.extension,
            self.config.format,
        )
    }

    /// Check a house's placements against the configured requirements.
    ///
    /// In strict mode an unmet requirement is an error; otherwise it is logged
    /// and the census is returned anyway.
    pub fn check_spawns<'a>(
        &self,
        points: impl IntoIterator<Item = &'a SpawnPoint>,
    ) -> Result<SpawnCensus, SpawnError> {
        let points: Vec<&SpawnPoint> = points.into_iter().collect();
        match verify_spawns(points.iter().copied(), &self.config.requirements) {
            Ok(census) => Ok(census),
            Err(err) if self.config.strict => Err(err),
            Err(err) => {
                tracing::warn!("{}", err);
                Ok(SpawnCensus::count(points))
            }
        }
    }

    pub fn config(&self) -> &ContentConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::sync::Arc;

    use house_core::{SpawnKind, SpawnPointDef, SpawnRequirements, SpawnVariant};

    use super::*;

    fn relics(n: i32) -> Vec<SpawnPoint> {
        let def = Arc::new(SpawnPointDef::with_variant("relic", SpawnVariant::Relic));
        (0..n)
            .map(|x| {
                let mut point = SpawnPoint::new("relic").with_position(x, 0);
                point.attach(Arc::clone(&def));
                point
            })
            .collect()
    }

    #[test]
    fn test_factory_config() {
        let factory = ContentFactory::new(ContentConfig::default());
        assert_eq!(factory.config().spawns_dir, Path::new("data/spawns"));
    }

    #[test]
    fn lenient_check_returns_census() {
        let factory = ContentFactory::new(ContentConfig::default());
        let census = factory.check_spawns(&relics(2)).unwrap();
        assert_eq!(census.relics, 2);
    }

    #[test]
    fn strict_check_rejects_short_house() {
        let factory = ContentFactory::new(ContentConfig {
            strict: true,
            ..ContentConfig::default()
        });
        let err = factory.check_spawns(&relics(2)).unwrap_err();
        assert_eq!(
            err,
            SpawnError::NotEnough {
                kind: SpawnKind::Relic,
                required: SpawnRequirements::DEFAULT_RELICS,
                found: 2,
            }
        );
    }

    #[test]
    fn strict_check_accepts_met_requirements() {
        let factory = ContentFactory::new(ContentConfig {
            strict: true,
            requirements: SpawnRequirements {
                relics: 3,
                ..SpawnRequirements::none()
            },
            ..ContentConfig::default()
        });
        assert_eq!(factory.check_spawns(&relics(3)).unwrap().relics, 3);
    }
}
