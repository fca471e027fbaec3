//! Structured-text formats definition files may be written in.

use serde::de::DeserializeOwned;

/// Decoder for definition files.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum DataFormat {
    #[default]
    Json,
    Ron,
    Toml,
}

impl DataFormat {
    /// File extension conventionally used for this format, with the dot.
    pub const fn default_extension(self) -> &'static str {
        match self {
            Self::Json => ".json",
            Self::Ron => ".ron",
            Self::Toml => ".toml",
        }
    }

    /// Decodes `content` as a `T`.
    pub fn decode<T: DeserializeOwned>(self, content: &str) -> Result<T, String> {
        match self {
            Self::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            Self::Ron => ron::from_str(content).map_err(|e| e.to_string()),
            Self::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use house_core::{SpawnKind, SpawnPointDef};

    #[test]
    fn parses_format_names() {
        assert_eq!("json".parse::<DataFormat>().unwrap(), DataFormat::Json);
        assert_eq!("RON".parse::<DataFormat>().unwrap(), DataFormat::Ron);
        assert_eq!(DataFormat::Toml.to_string(), "toml");
        assert!("yaml".parse::<DataFormat>().is_err());
    }

    #[test]
    fn decodes_same_definition_in_every_format() {
        let json = r#"{ "Name": "Attic", "Haunt": { "Minions": true } }"#;
        let ron = r#"(Name: "Attic", Haunt: Some((Minions: true)))"#;
        let toml = "Name = \"Attic\"\n\n[Haunt]\nMinions = true\n";

        for (format, content) in [
            (DataFormat::Json, json),
            (DataFormat::Ron, ron),
            (DataFormat::Toml, toml),
        ] {
            let def: SpawnPointDef = format
                .decode(content)
                .unwrap_or_else(|e| panic!("{format}: {e}"));
            assert_eq!(def.name, "Attic", "{format}");
            assert_eq!(def.kind(), SpawnKind::Haunts, "{format}");
            assert!(def.haunt.unwrap().minions, "{format}");
        }
    }

    #[test]
    fn decode_errors_are_reported() {
        let err = DataFormat::Json
            .decode::<SpawnPointDef>("{ not json")
            .unwrap_err();
        assert!(!err.is_empty());
    }
}
