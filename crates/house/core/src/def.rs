//! Spawn point definitions as loaded from house data files.
//!
//! # Data shape
//!
//! A definition names its kind by carrying one of six optional payloads:
//!
//! ```json
//! { "Name": "Cellar", "Haunt": { "Minions": true } }
//! ```
//!
//! Exactly one payload is expected. The permissive shape is kept for decoding
//! so existing data keeps loading; [`SpawnPointDef::variant`] gives the single
//! resolved payload as a [`SpawnVariant`] and [`SpawnPointDef::classify`]
//! handles definitions that break the rule.
//!
//! Unknown fields are ignored, so a file that misspells a payload name loads as
//! a definition without that payload.

use std::fmt;

use crate::kind::SpawnKind;

/// Haunt spawn payload: which haunt ranks may appear here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "PascalCase", default))]
pub struct HauntPoint {
    pub minions: bool,
    pub servitors: bool,
    pub masters: bool,
}

impl HauntPoint {
    pub const fn new(minions: bool, servitors: bool, masters: bool) -> Self {
        Self {
            minions,
            servitors,
            masters,
        }
    }

    /// Returns true if at least one haunt rank may spawn here.
    pub const fn allows_any(&self) -> bool {
        self.minions || self.servitors || self.masters
    }
}

/// Explorer spawn payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExplorerPoint {}

/// Clue spawn payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CluePoint {}

/// Cleanse spawn payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CleansePoint {}

/// Exit spawn payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExitPoint {}

/// Relic spawn payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelicPoint {}

/// The single payload a definition resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpawnVariant {
    Haunt(HauntPoint),
    Explorer,
    Clue,
    Cleanse,
    Exit,
    Relic,
}

impl SpawnVariant {
    /// Payload field name as written in data files.
    pub const fn field_name(&self) -> &'static str {
        match self {
            Self::Haunt(_) => "Haunt",
            Self::Explorer => "Explorer",
            Self::Clue => "Clue",
            Self::Cleanse => "Cleanse",
            Self::Exit => "Exit",
            Self::Relic => "Relic",
        }
    }

    /// Structural kind of this payload. Exit maps to [`SpawnKind::Exit`].
    pub const fn kind(&self) -> SpawnKind {
        match self {
            Self::Haunt(_) => SpawnKind::Haunts,
            Self::Explorer => SpawnKind::Explorers,
            Self::Clue => SpawnKind::Clue,
            Self::Cleanse => SpawnKind::Cleanse,
            Self::Exit => SpawnKind::Exit,
            Self::Relic => SpawnKind::Relic,
        }
    }

    /// Kind reported by the classifier.
    ///
    /// Exit payloads classify as [`SpawnKind::Clue`], matching the reference
    /// classifier.
    pub const fn classified_kind(&self) -> SpawnKind {
        match self {
            Self::Exit => SpawnKind::Clue,
            other => other.kind(),
        }
    }
}

impl fmt::Display for SpawnVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// Named spawn point definition.
///
/// Owned by a registry once loaded; placements share it through an `Arc`.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "PascalCase"))]
pub struct SpawnPointDef {
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,

    // Exactly one of these is expected to be set.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub haunt: Option<HauntPoint>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub explorer: Option<ExplorerPoint>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub clue: Option<CluePoint>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub cleanse: Option<CleansePoint>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub exit: Option<ExitPoint>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub relic: Option<RelicPoint>,

    /// Set once an ambiguous payload set has been reported.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) ambiguity_reported: bool,
}

impl SpawnPointDef {
    /// Creates a definition with no payload.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Creates a definition carrying exactly `variant`.
    pub fn with_variant(name: impl Into<String>, variant: SpawnVariant) -> Self {
        let mut def = Self::new(name);
        def.add_payload(variant);
        def
    }

    /// Sets the payload for `variant`, leaving any other payloads in place.
    pub fn add_payload(&mut self, variant: SpawnVariant) {
        match variant {
            SpawnVariant::Haunt(haunt) => self.haunt = Some(haunt),
            SpawnVariant::Explorer => self.explorer = Some(ExplorerPoint {}),
            SpawnVariant::Clue => self.clue = Some(CluePoint {}),
            SpawnVariant::Cleanse => self.cleanse = Some(CleansePoint {}),
            SpawnVariant::Exit => self.exit = Some(ExitPoint {}),
            SpawnVariant::Relic => self.relic = Some(RelicPoint {}),
        }
    }

    /// All present payloads, highest priority first.
    ///
    /// Priority follows declaration order: Haunt, Explorer, Clue, Cleanse,
    /// Exit, Relic.
    pub fn present_variants(&self) -> Vec<SpawnVariant> {
        [
            self.haunt.map(SpawnVariant::Haunt),
            self.explorer.map(|_| SpawnVariant::Explorer),
            self.clue.map(|_| SpawnVariant::Clue),
            self.cleanse.map(|_| SpawnVariant::Cleanse),
            self.exit.map(|_| SpawnVariant::Exit),
            self.relic.map(|_| SpawnVariant::Relic),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Number of payloads present.
    pub fn payload_count(&self) -> usize {
        self.present_variants().len()
    }

    /// Highest-priority payload, if any is present.
    pub fn variant(&self) -> Option<SpawnVariant> {
        self.present_variants().into_iter().next()
    }

    /// Kind of this definition without reporting or repairing anything.
    ///
    /// A definition with no payload reads as [`SpawnKind::Clue`], the same
    /// kind [`classify`](Self::classify) repairs it to.
    pub fn kind(&self) -> SpawnKind {
        self.variant()
            .map_or(SpawnKind::Clue, |variant| variant.classified_kind())
    }
}

impl PartialEq for SpawnPointDef {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.haunt == other.haunt
            && self.explorer == other.explorer
            && self.clue == other.clue
            && self.cleanse == other.cleanse
            && self.exit == other.exit
            && self.relic == other.relic
    }
}

impl Eq for SpawnPointDef {}
