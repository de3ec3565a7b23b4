//! Factory functions for creating test data.
//!
//! Provides convenient helpers to construct furniture items, rooms, tagged
//! scene graphs and ray hits used in tests and by the scripting interface.

use glam::Vec3;
use shared::*;

use crate::viewport::picking::Aabb;
use crate::viewport::scene_graph::{RayHit, SceneGraph};

// ── Furniture factories ─────────────────────────────────────────

/// Create an item of `kind` standing on the floor at (x, z).
pub fn furniture_at(id: &str, kind: FurnitureKind, x: f32, z: f32) -> FurnitureItem {
    FurnitureItem::new(id.to_string(), kind, Vec3::new(x, kind.rest_height(), z))
}

/// Create a chair at the origin.
pub fn chair(id: &str) -> FurnitureItem {
    furniture_at(id, FurnitureKind::Chair, 0.0, 0.0)
}

/// One item of every catalogue kind, spread along X.
pub fn catalogue_row() -> Vec<FurnitureItem> {
    FurnitureKind::ALL
        .iter()
        .enumerate()
        .map(|(i, kind)| furniture_at(&format!("{}_{i}", kind.key()), *kind, -1.5 + i as f32 * 0.6, 0.0))
        .collect()
}

// ── Rooms ───────────────────────────────────────────────────────

/// The default 4 × 5 × 2.5 room.
pub fn default_room() -> RoomDimensions {
    RoomDimensions::default()
}

/// A square room with the given side and height.
pub fn square_room(side: f32, height: f32) -> RoomDimensions {
    RoomDimensions::new(side, side, height)
}

// ── Tagged hits ─────────────────────────────────────────────────

/// Description of one ray hit for [`tagged_hits`]
#[derive(Clone, Debug)]
pub struct HitSpec {
    pub tag: Option<SceneTag>,
    pub distance: f32,
}

/// A hit on furniture `id` at `distance`.
pub fn furniture_hit(id: &str, distance: f32) -> HitSpec {
    HitSpec {
        tag: Some(SceneTag::furniture(id)),
        distance,
    }
}

/// A hit on room element `element` at `distance`.
pub fn room_element_hit(element: RoomElementKind, distance: f32) -> HitSpec {
    HitSpec {
        tag: Some(SceneTag::room_element(element)),
        distance,
    }
}

/// A hit on non-interactive geometry at `distance`.
pub fn untagged_hit(distance: f32) -> HitSpec {
    HitSpec { tag: None, distance }
}

/// Build a scene graph where every hit lands on an untagged leaf below a
/// (possibly tagged) group, plus the matching ray hits in the given order.
pub fn tagged_hits(specs: &[HitSpec]) -> (SceneGraph, Vec<RayHit>) {
    let mut graph = SceneGraph::new();
    let leaf_bounds = Aabb::from_center_size(Vec3::ZERO, Vec3::splat(0.1));
    let hits = specs
        .iter()
        .enumerate()
        .map(|(i, wanted)| {
            let group = graph.add_group(format!("group{i}"), None, wanted.tag.clone());
            let leaf = graph.add_mesh(format!("leaf{i}"), Some(group), leaf_bounds);
            RayHit {
                node: leaf,
                distance: wanted.distance,
            }
        })
        .collect();
    (graph, hits)
}
