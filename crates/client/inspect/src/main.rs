//! Spawn point inspector entry point.
//!
//! Loads the configured spawn directory and prints every definition with the
//! kind it resolves to. An optional first argument overrides the directory.
use std::path::{Path, PathBuf};

use anyhow::Result;
use house_content::{
    ConfigLoader, ContentConfig, ContentFactory, RegistryStore, all_spawn_point_names,
    make_spawn_point,
};
use house_core::{SpawnPoint, SpawnVariant};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = load_config()?;
    if let Some(dir) = std::env::args_os().nth(1) {
        config.spawns_dir = PathBuf::from(dir);
    }

    let factory = ContentFactory::new(config);
    let mut store = RegistryStore::new();
    let summary = factory.load_spawns(&mut store)?;

    for name in all_spawn_point_names(&store) {
        let point = make_spawn_point(&store, &name);
        println!("{}", describe(&name, &point));
    }

    if !summary.failures.is_empty() {
        tracing::warn!(
            "{} file(s) in {} could not be loaded",
            summary.failures.len(),
            factory.config().spawns_dir.display()
        );
    }

    Ok(())
}

/// Reads `HOUSE_CONTENT_CONFIG` if set, then applies environment overrides.
fn load_config() -> Result<ContentConfig> {
    match std::env::var_os("HOUSE_CONTENT_CONFIG") {
        Some(path) => Ok(ConfigLoader::load(Path::new(&path))?.with_env_overrides()),
        None => Ok(ContentConfig::from_env()),
    }
}

fn describe(name: &str, point: &SpawnPoint) -> String {
    let Some(kind) = point.kind() else {
        return format!("{name:<24} unresolved");
    };

    let detail = match point.variant() {
        Some(SpawnVariant::Haunt(haunt)) => format!(
            "minions={} servitors={} masters={}",
            haunt.minions, haunt.servitors, haunt.masters
        ),
        Some(variant) if variant.kind() != kind => format!("payload={variant}"),
        _ => String::new(),
    };

    let (r, g, b, a) = kind.floor_color().channels();
    format!("{name:<24} {kind:<10} #{r:02x}{g:02x}{b:02x}{a:02x} {detail}")
        .trim_end()
        .to_string()
}
