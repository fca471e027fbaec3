//! Placed spawn points.

use std::sync::Arc;

use crate::def::{SpawnPointDef, SpawnVariant};
use crate::kind::{Rgba, SpawnKind};

/// A spawn point placed on a floor.
///
/// The definition is resolved once, when the placement is made, and shared
/// with the registry that owns it. An unresolved placement (its `defname` was
/// not found) keeps its geometry and reports no kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "PascalCase"))]
pub struct SpawnPoint {
    pub defname: String,

    #[cfg_attr(feature = "serde", serde(skip))]
    def: Option<Arc<SpawnPointDef>>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub dx: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub dy: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub x: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub y: i32,
}

impl SpawnPoint {
    /// Creates an unresolved placement for `defname` at the origin.
    pub fn new(defname: impl Into<String>) -> Self {
        Self {
            defname: defname.into(),
            ..Self::default()
        }
    }

    /// Sets the placement position (builder pattern).
    #[must_use]
    pub fn with_position(mut self, x: i32, y: i32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Sets the placement footprint (builder pattern).
    #[must_use]
    pub fn with_dims(mut self, dx: i32, dy: i32) -> Self {
        self.dx = dx;
        self.dy = dy;
        self
    }

    /// Links this placement to its definition.
    pub fn attach(&mut self, def: Arc<SpawnPointDef>) {
        self.def = Some(def);
    }

    pub fn definition(&self) -> Option<&Arc<SpawnPointDef>> {
        self.def.as_ref()
    }

    /// Returns true if the definition was found when this placement was made.
    pub fn is_resolved(&self) -> bool {
        self.def.is_some()
    }

    pub fn kind(&self) -> Option<SpawnKind> {
        self.def.as_deref().map(SpawnPointDef::kind)
    }

    pub fn variant(&self) -> Option<SpawnVariant> {
        self.def.as_deref().and_then(SpawnPointDef::variant)
    }

    #[inline]
    pub fn dims(&self) -> (i32, i32) {
        (self.dx, self.dy)
    }

    #[inline]
    pub fn pos(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Position widened to floating point.
    #[inline]
    pub fn fpos(&self) -> (f64, f64) {
        (f64::from(self.x), f64::from(self.y))
    }

    /// Marker colour used when the placement is drawn as an icon.
    pub fn color(&self) -> Rgba {
        Rgba::WHITE
    }

    /// Overlay colour for the covered tiles, or `None` when unresolved.
    pub fn floor_color(&self) -> Option<Rgba> {
        self.kind().map(SpawnKind::floor_color)
    }

    /// Corners of the covered floor rectangle, counter-clockwise from `(x, y)`.
    ///
    /// Far corners saturate at the `i32` bounds.
    pub fn floor_quad(&self) -> [(i32, i32); 4] {
        let (x, y) = (self.x, self.y);
        let (x2, y2) = (x.saturating_add(self.dx), y.saturating_add(self.dy));
        [(x, y), (x, y2), (x2, y2), (x2, y)]
    }

    /// Translucent fill for the icon drawn by [`SpawnPoint::icon_quad`].
    pub fn icon_color(&self) -> Rgba {
        Rgba {
            a: Rgba::ICON_ALPHA,
            ..Rgba::WHITE
        }
    }

    /// Square icon of side `width`, centred horizontally on `pos` and
    /// extending `width` along y from it.
    pub fn icon_quad(&self, pos: (f32, f32), width: f32) -> [(f32, f32); 4] {
        let (px, py) = pos;
        let half = width / 2.0;
        [
            (px - half, py),
            (px - half, py + width),
            (px + half, py + width),
            (px + half, py),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::def::HauntPoint;

    #[test]
    fn unresolved_point_keeps_geometry() {
        let point = SpawnPoint::new("missing")
            .with_position(3, -4)
            .with_dims(2, 5);

        assert!(!point.is_resolved());
        assert_eq!(point.kind(), None);
        assert_eq!(point.floor_color(), None);
        assert_eq!(point.dims(), (2, 5));
        assert_eq!(point.pos(), (3, -4));
        assert_eq!(point.fpos(), (3.0, -4.0));
    }

    #[test]
    fn fpos_is_exact_widening() {
        for (x, y) in [(0, 0), (i32::MAX, i32::MIN), (-17, 123_456_789)] {
            let point = SpawnPoint::new("p").with_position(x, y);
            let (fx, fy) = point.fpos();
            assert_eq!(fx, x as f64);
            assert_eq!(fy, y as f64);
            assert_eq!(fx.fract(), 0.0);
            assert_eq!(fx as i32, x);
            assert_eq!(fy as i32, y);
        }
    }

    #[test]
    fn attached_definition_drives_kind() {
        let def = Arc::new(SpawnPointDef::with_variant(
            "crypt",
            SpawnVariant::Haunt(HauntPoint::new(true, true, false)),
        ));
        let mut point = SpawnPoint::new("crypt");
        point.attach(Arc::clone(&def));

        assert!(point.is_resolved());
        assert_eq!(point.kind(), Some(SpawnKind::Haunts));
        assert_eq!(point.floor_color(), Some(SpawnKind::Haunts.floor_color()));
        assert_eq!(point.color(), Rgba::WHITE);
        assert!(Arc::ptr_eq(point.definition().unwrap(), &def));
    }

    #[test]
    fn floor_quad_covers_footprint() {
        let point = SpawnPoint::new("q").with_position(1, 2).with_dims(3, 4);
        assert_eq!(point.floor_quad(), [(1, 2), (1, 6), (4, 6), (4, 2)]);
    }

    #[test]
    fn floor_quad_saturates_near_bounds() {
        let point = SpawnPoint::new("edge")
            .with_position(i32::MAX - 1, 0)
            .with_dims(4, 4);
        assert_eq!(
            point.floor_quad(),
            [(i32::MAX - 1, 0), (i32::MAX - 1, 4), (i32::MAX, 4), (i32::MAX, 0)]
        );

        let point = SpawnPoint::new("edge")
            .with_position(0, i32::MIN + 1)
            .with_dims(1, -4);
        assert_eq!(point.floor_quad()[1], (0, i32::MIN));
    }

    #[test]
    fn icon_is_centred_square() {
        let point = SpawnPoint::new("icon");
        assert_eq!(
            point.icon_quad((10.0, 5.0), 4.0),
            [(8.0, 5.0), (8.0, 9.0), (12.0, 9.0), (12.0, 5.0)]
        );
        assert_eq!(point.icon_color(), Rgba::new(255, 255, 255, Rgba::ICON_ALPHA));
    }
}
