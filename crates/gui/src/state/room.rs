//! Room dimensions and per-element visibility

use std::collections::HashMap;

use shared::{RoomDimensions, RoomElementKind};

/// Partial update for [`RoomState::set_dimensions`]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DimensionsPatch {
    pub width: Option<f32>,
    pub length: Option<f32>,
    pub height: Option<f32>,
}

#[derive(Default)]
pub struct RoomState {
    dimensions: RoomDimensions,
}

impl RoomState {
    pub fn dimensions(&self) -> &RoomDimensions {
        &self.dimensions
    }

    /// Apply the given values. A non-positive or non-finite value rejects
    /// the whole update so the room never becomes degenerate.
    pub fn set_dimensions(&mut self, patch: DimensionsPatch) -> Result<(), String> {
        for (name, value) in [
            ("width", patch.width),
            ("length", patch.length),
            ("height", patch.height),
        ] {
            if let Some(v) = value {
                if !(v.is_finite() && v > 0.0) {
                    tracing::warn!("Rejected room {name} = {v}");
                    return Err(format!("Room {name} must be a positive number, got {v}"));
                }
            }
        }
        let d = &mut self.dimensions;
        d.width = patch.width.unwrap_or(d.width);
        d.length = patch.length.unwrap_or(d.length);
        d.height = patch.height.unwrap_or(d.height);
        tracing::info!("Room dimensions {}×{}×{}", d.width, d.length, d.height);
        Ok(())
    }
}

/// Visibility of the floor, walls and ceiling
pub struct RoomElementState {
    visibility: HashMap<RoomElementKind, bool>,
}

impl Default for RoomElementState {
    fn default() -> Self {
        Self {
            visibility: RoomElementKind::ALL.iter().map(|k| (*k, true)).collect(),
        }
    }
}

impl RoomElementState {
    pub fn is_visible(&self, kind: RoomElementKind) -> bool {
        self.visibility.get(&kind).copied().unwrap_or(true)
    }

    pub fn set_visibility(&mut self, kind: RoomElementKind, visible: bool) {
        self.visibility.insert(kind, visible);
    }

    /// Flip visibility and return the new value
    pub fn toggle_visibility(&mut self, kind: RoomElementKind) -> bool {
        let visible = !self.is_visible(kind);
        self.set_visibility(kind, visible);
        tracing::debug!("{} visible = {visible}", kind.key());
        visible
    }

    pub fn visible_elements(&self) -> impl Iterator<Item = RoomElementKind> + '_ {
        RoomElementKind::ALL
            .into_iter()
            .filter(|k| self.is_visible(*k))
    }
}
