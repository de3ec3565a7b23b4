use std::collections::HashMap;

use shared::{RoomElementKind, TileSettings};

/// Tiling configuration of each room surface
pub struct TileState {
    settings: HashMap<RoomElementKind, TileSettings>,
    enabled: HashMap<RoomElementKind, bool>,
}

impl Default for TileState {
    fn default() -> Self {
        Self {
            settings: RoomElementKind::ALL
                .iter()
                .map(|k| (*k, TileSettings::default()))
                .collect(),
            enabled: RoomElementKind::ALL
                .iter()
                .map(|k| (*k, *k == RoomElementKind::Floor))
                .collect(),
        }
    }
}

impl TileState {
    pub fn settings(&self, kind: RoomElementKind) -> TileSettings {
        self.settings.get(&kind).copied().unwrap_or_default()
    }

    pub fn set_tile_settings(&mut self, kind: RoomElementKind, settings: TileSettings) {
        self.settings.insert(kind, settings);
    }

    pub fn is_tiling_enabled(&self, kind: RoomElementKind) -> bool {
        self.enabled.get(&kind).copied().unwrap_or(false)
    }

    pub fn set_tiling_enabled(&mut self, kind: RoomElementKind, enabled: bool) {
        self.enabled.insert(kind, enabled);
    }

    pub fn toggle_tiling(&mut self, kind: RoomElementKind) -> bool {
        let enabled = !self.is_tiling_enabled(kind);
        self.set_tiling_enabled(kind, enabled);
        enabled
    }

    /// Tile edge length in metres, or None when the surface is untiled
    pub fn tile_step(&self, kind: RoomElementKind) -> Option<f32> {
        self.is_tiling_enabled(kind)
            .then(|| self.settings(kind).size.meters())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{TileSize, TileTexture};

    #[test]
    fn test_floor_tiled_by_default() {
        let t = TileState::default();
        assert!(t.is_tiling_enabled(RoomElementKind::Floor));
        assert!(!t.is_tiling_enabled(RoomElementKind::WallBack));
        assert_eq!(t.tile_step(RoomElementKind::Floor), Some(0.5));
        assert_eq!(t.tile_step(RoomElementKind::Ceiling), None);
    }

    #[test]
    fn test_set_settings_and_toggle() {
        let mut t = TileState::default();
        t.set_tile_settings(
            RoomElementKind::WallLeft,
            TileSettings {
                size: TileSize::Large,
                texture: TileTexture::Marble,
            },
        );
        assert!(t.toggle_tiling(RoomElementKind::WallLeft));
        assert_eq!(t.tile_step(RoomElementKind::WallLeft), Some(0.75));
        assert_eq!(t.settings(RoomElementKind::WallLeft).texture, TileTexture::Marble);
    }
}
