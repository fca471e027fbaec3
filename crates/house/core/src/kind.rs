//! Spawn kinds and the colours used to mark them on the floor.

/// Resolved kind of a spawn point definition.
///
/// The numeric order matches the house file format and must not change.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[repr(u8)]
pub enum SpawnKind {
    Relic = 0,
    Exit,
    Explorers,
    Haunts,
    Clue,
    Cleanse,
}

impl SpawnKind {
    /// Overlay colour drawn over the tiles a spawn point of this kind covers.
    ///
    /// Exit and Relic share magenta.
    pub const fn floor_color(self) -> Rgba {
        match self {
            Self::Relic => Rgba::new(255, 0, 255, Rgba::FLOOR_ALPHA),
            Self::Clue => Rgba::new(0, 0, 255, Rgba::FLOOR_ALPHA),
            Self::Cleanse => Rgba::new(255, 255, 255, Rgba::FLOOR_ALPHA),
            Self::Explorers => Rgba::new(0, 255, 0, Rgba::FLOOR_ALPHA),
            Self::Haunts => Rgba::new(255, 0, 0, Rgba::FLOOR_ALPHA),
            Self::Exit => Rgba::new(255, 0, 255, Rgba::FLOOR_ALPHA),
        }
    }

    /// Returns the discriminant as stored in house files.
    #[inline]
    pub const fn as_index(self) -> u8 {
        self as u8
    }
}

/// 8-bit RGBA colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    /// 0.7 opacity, truncated to 8 bits.
    pub const FLOOR_ALPHA: u8 = 178;

    /// 0.1 opacity, truncated to 8 bits.
    pub const ICON_ALPHA: u8 = 25;

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Returns the colour as a `(r, g, b, a)` tuple.
    pub const fn channels(self) -> (u8, u8, u8, u8) {
        (self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn discriminants_follow_file_order() {
        let indices: Vec<u8> = SpawnKind::iter().map(SpawnKind::as_index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(SpawnKind::Relic.as_index(), 0);
        assert_eq!(SpawnKind::Cleanse.as_index(), 5);
    }

    #[test]
    fn kind_names_parse_case_insensitively() {
        assert_eq!("haunts".parse::<SpawnKind>().unwrap(), SpawnKind::Haunts);
        assert_eq!("CLUE".parse::<SpawnKind>().unwrap(), SpawnKind::Clue);
        assert_eq!(SpawnKind::Explorers.to_string(), "explorers");
        assert!("ghost".parse::<SpawnKind>().is_err());
    }

    #[test]
    fn floor_colors_are_translucent() {
        for kind in SpawnKind::iter() {
            assert_eq!(kind.floor_color().a, Rgba::FLOOR_ALPHA);
        }
        assert_eq!(SpawnKind::Haunts.floor_color().channels(), (255, 0, 0, 178));
        assert_eq!(SpawnKind::Exit.floor_color(), SpawnKind::Relic.floor_color());
    }
}
