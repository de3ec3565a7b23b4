//! Furniture collection: the single owner of every furniture item

use std::f32::consts::TAU;

use glam::Vec3;
use shared::{FurnitureId, FurnitureItem, FurnitureKind};

/// Offset applied to a duplicate so it does not overlap its source
const DUPLICATE_OFFSET: f32 = 0.5;

/// Partial update for [`FurnitureStore::update_item`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FurniturePatch {
    pub position: Option<Vec3>,
    pub rotation: Option<f32>,
    pub visible: Option<bool>,
}

impl FurniturePatch {
    pub fn position(position: Vec3) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }
}

/// Wrap an angle into [0, 2π)
pub fn normalize_rotation(angle: f32) -> f32 {
    let r = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if r >= TAU {
        0.0
    } else {
        r
    }
}

/// Extents of an item's bounding box once its yaw is applied
pub fn rotated_size(item: &FurnitureItem) -> Vec3 {
    let (s, c) = item.rotation.sin_cos();
    let (s, c) = (s.abs(), c.abs());
    Vec3::new(
        c * item.size.x + s * item.size.z,
        item.size.y,
        s * item.size.x + c * item.size.z,
    )
}

#[derive(Default)]
pub struct FurnitureStore {
    items: Vec<FurnitureItem>,
    /// Monotonically increasing version counter for cache invalidation
    version: u64,
}

impl FurnitureStore {
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn list(&self) -> &[FurnitureItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&FurnitureItem> {
        self.items.iter().find(|f| f.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut FurnitureItem> {
        self.items.iter_mut().find(|f| f.id == id)
    }

    /// Add a new item and return its id.
    /// Y is always reset so the item's base rests on the floor.
    pub fn add_item(&mut self, kind: FurnitureKind, position: Vec3, rotation: f32) -> FurnitureId {
        let id = uuid::Uuid::new_v4().to_string();
        let mut item = FurnitureItem::new(
            id.clone(),
            kind,
            Vec3::new(position.x, kind.rest_height(), position.z),
        );
        item.rotation = normalize_rotation(rotation);
        self.items.push(item);
        self.version += 1;
        tracing::info!("Added {} {}", kind.key(), id);
        id
    }

    /// Insert a fully formed item (used when loading fixtures and commands)
    pub fn insert(&mut self, item: FurnitureItem) {
        self.items.retain(|f| f.id != item.id);
        self.items.push(item);
        self.version += 1;
    }

    /// Apply a partial update. Returns false if the id is unknown.
    pub fn update_item(&mut self, id: &str, patch: FurniturePatch) -> bool {
        let Some(item) = self.get_mut(id) else {
            tracing::debug!("update_item: unknown furniture {id}");
            return false;
        };
        if let Some(position) = patch.position {
            item.position = position;
        }
        if let Some(rotation) = patch.rotation {
            item.rotation = normalize_rotation(rotation);
        }
        if let Some(visible) = patch.visible {
            item.visible = visible;
        }
        self.version += 1;
        true
    }

    pub fn remove_item(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|f| f.id != id);
        let removed = self.items.len() != before;
        if removed {
            self.version += 1;
            tracing::info!("Removed furniture {id}");
        }
        removed
    }

    /// Copy an item with a fresh id, shifted on X and Z
    pub fn duplicate(&mut self, id: &str) -> Option<FurnitureId> {
        let source = self.get(id)?.clone();
        let new_id = uuid::Uuid::new_v4().to_string();
        let mut copy = source;
        copy.id = new_id.clone();
        copy.position += Vec3::new(DUPLICATE_OFFSET, 0.0, DUPLICATE_OFFSET);
        self.items.push(copy);
        self.version += 1;
        Some(new_id)
    }

    pub fn rotate(&mut self, id: &str, delta: f32) -> bool {
        let Some(rotation) = self.get(id).map(|f| f.rotation) else {
            return false;
        };
        self.update_item(
            id,
            FurniturePatch {
                rotation: Some(rotation + delta),
                ..FurniturePatch::default()
            },
        )
    }

    pub fn toggle_visibility(&mut self, id: &str) -> bool {
        let Some(visible) = self.get(id).map(|f| f.visible) else {
            return false;
        };
        self.update_item(
            id,
            FurniturePatch {
                visible: Some(!visible),
                ..FurniturePatch::default()
            },
        )
    }

    /// Put the item back on the floor keeping X and Z
    pub fn snap_to_floor(&mut self, id: &str) -> bool {
        let Some(item) = self.get(id) else {
            return false;
        };
        let position = Vec3::new(item.position.x, item.kind.rest_height(), item.position.z);
        self.update_item(id, FurniturePatch::position(position))
    }

    pub fn clear(&mut self) {
        if !self.items.is_empty() {
            self.items.clear();
            self.version += 1;
        }
    }
}
