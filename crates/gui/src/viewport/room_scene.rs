//! Builds the pickable scene graph of the room from the current state.
//!
//! Room surfaces are thin one-sided slabs just outside the room volume,
//! each tagged with its [`RoomElementKind`]. Every visible furniture item
//! is a tagged group whose body mesh is an untagged child. Helpers such as
//! the floor grid and the drop preview are added without tags so they
//! never take part in selection.

use std::collections::HashMap;

use glam::Vec3;
use shared::{FurnitureId, FurnitureItem, FurnitureKind, RoomDimensions, RoomElementKind, SceneTag};

use super::picking::Aabb;
use super::scene_graph::SceneGraph;
use crate::state::furniture::rotated_size;
use crate::state::room::RoomElementState;

/// Thickness of the slabs that stand in for room surfaces
pub const SURFACE_THICKNESS: f32 = 0.02;

/// Non-interactive helpers added to the scene
#[derive(Debug, Clone, Default)]
pub struct SceneOverlays {
    pub grid: bool,
    pub drop_preview: Option<(FurnitureKind, Vec3)>,
}

/// Bounds and inward normal of one room surface
pub fn surface_bounds(room: &RoomDimensions, kind: RoomElementKind) -> (Aabb, Vec3) {
    let (hw, hl, h, t) = (room.half_width(), room.half_length(), room.height, SURFACE_THICKNESS);
    match kind {
        RoomElementKind::Floor => (
            Aabb::new(Vec3::new(-hw, -t, -hl), Vec3::new(hw, 0.0, hl)),
            Vec3::Y,
        ),
        RoomElementKind::Ceiling => (
            Aabb::new(Vec3::new(-hw, h, -hl), Vec3::new(hw, h + t, hl)),
            Vec3::NEG_Y,
        ),
        RoomElementKind::WallFront => (
            Aabb::new(Vec3::new(-hw, 0.0, hl), Vec3::new(hw, h, hl + t)),
            Vec3::NEG_Z,
        ),
        RoomElementKind::WallBack => (
            Aabb::new(Vec3::new(-hw, 0.0, -hl - t), Vec3::new(hw, h, -hl)),
            Vec3::Z,
        ),
        RoomElementKind::WallLeft => (
            Aabb::new(Vec3::new(-hw - t, 0.0, -hl), Vec3::new(-hw, h, hl)),
            Vec3::X,
        ),
        RoomElementKind::WallRight => (
            Aabb::new(Vec3::new(hw, 0.0, -hl), Vec3::new(hw + t, h, hl)),
            Vec3::NEG_X,
        ),
    }
}

/// World bounds of an item placed at `position`
pub fn furniture_bounds(item: &FurnitureItem, position: Vec3) -> Aabb {
    Aabb::from_center_size(position, rotated_size(item))
}

/// Build the scene graph used for raycasts.
///
/// `live_positions` overrides the stored position of items that are being
/// moved, so hover and picks follow what is on screen.
pub fn build_room_scene(
    room: &RoomDimensions,
    elements: &RoomElementState,
    furniture: &[FurnitureItem],
    live_positions: &HashMap<FurnitureId, Vec3>,
    overlays: &SceneOverlays,
) -> SceneGraph {
    let mut graph = SceneGraph::new();

    let room_root = graph.add_group("room", None, None);
    for kind in elements.visible_elements() {
        let (bounds, normal) = surface_bounds(room, kind);
        graph.add_surface(
            kind.key(),
            Some(room_root),
            Some(SceneTag::room_element(kind)),
            bounds,
            normal,
        );
    }

    let furniture_root = graph.add_group("furniture", None, None);
    for item in furniture.iter().filter(|f| f.visible) {
        let position = live_positions.get(&item.id).copied().unwrap_or(item.position);
        let group = graph.add_group(
            item.kind.key(),
            Some(furniture_root),
            Some(SceneTag::furniture(item.id.clone())),
        );
        graph.add_mesh("body", Some(group), furniture_bounds(item, position));
    }

    if overlays.grid {
        let (hw, hl) = (room.half_width(), room.half_length());
        graph.add_mesh(
            "grid",
            None,
            Aabb::new(Vec3::new(-hw, 0.0, -hl), Vec3::new(hw, 0.001, hl)),
        );
    }

    if let Some((kind, point)) = overlays.drop_preview {
        let size = kind.size();
        graph.add_mesh(
            "drop-preview",
            None,
            Aabb::from_center_size(Vec3::new(point.x, size.y * 0.5, point.z), size),
        );
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::furniture_at;
    use crate::viewport::picking::{resolve_selection, Ray};

    fn down_at(x: f32, z: f32) -> Ray {
        Ray::new(Vec3::new(x, 10.0, z), Vec3::NEG_Y)
    }

    #[test]
    fn test_click_on_furniture_from_above() {
        let room = RoomDimensions::default();
        let items = vec![furniture_at("c1", FurnitureKind::Chair, 1.0, 1.0)];
        let g = build_room_scene(
            &room,
            &RoomElementState::default(),
            &items,
            &HashMap::new(),
            &SceneOverlays::default(),
        );
        let pick = resolve_selection(&g, &g.intersect(&down_at(1.0, 1.0)));
        assert_eq!(pick.furniture_id.as_deref(), Some("c1"));

        let pick = resolve_selection(&g, &g.intersect(&down_at(-1.0, -1.0)));
        assert_eq!(pick.room_element, Some(RoomElementKind::Floor));
    }

    #[test]
    fn test_overlays_never_select() {
        let room = RoomDimensions::default();
        let mut elements = RoomElementState::default();
        elements.set_visibility(RoomElementKind::Floor, false);
        let overlays = SceneOverlays {
            grid: true,
            drop_preview: Some((FurnitureKind::Table, Vec3::new(0.0, 0.0, 0.0))),
        };
        let g = build_room_scene(&room, &elements, &[], &HashMap::new(), &overlays);
        let hits = g.intersect(&down_at(0.0, 0.0));
        assert!(!hits.is_empty());
        assert!(resolve_selection(&g, &hits).is_empty());
    }

    #[test]
    fn test_hidden_items_and_elements_are_skipped() {
        let room = RoomDimensions::default();
        let mut elements = RoomElementState::default();
        elements.set_visibility(RoomElementKind::WallBack, false);
        let mut chair = furniture_at("c1", FurnitureKind::Chair, 0.0, 0.0);
        chair.visible = false;

        let g = build_room_scene(&room, &elements, &[chair], &HashMap::new(), &SceneOverlays::default());
        let tags: Vec<_> = g.nodes().filter_map(|(_, n)| n.tag.clone()).collect();
        assert_eq!(tags.len(), 5);
        assert!(!tags.contains(&SceneTag::room_element(RoomElementKind::WallBack)));
        assert!(!tags.contains(&SceneTag::furniture("c1")));
    }

    #[test]
    fn test_live_position_overrides_store() {
        let room = RoomDimensions::default();
        let items = vec![furniture_at("c1", FurnitureKind::Chair, 0.0, 0.0)];
        let live = HashMap::from([("c1".to_string(), Vec3::new(1.5, 0.225, 1.5))]);
        let g = build_room_scene(&room, &RoomElementState::default(), &items, &live, &SceneOverlays::default());

        let at_store = resolve_selection(&g, &g.intersect(&down_at(0.0, 0.0)));
        assert!(at_store.furniture_id.is_none());
        let at_live = resolve_selection(&g, &g.intersect(&down_at(1.5, 1.5)));
        assert_eq!(at_live.furniture_id.as_deref(), Some("c1"));
    }

    #[test]
    fn test_walls_only_hit_from_inside() {
        let room = RoomDimensions::default();
        let g = build_room_scene(
            &room,
            &RoomElementState::default(),
            &[],
            &HashMap::new(),
            &SceneOverlays::default(),
        );
        // From outside the front wall, looking toward the back wall
        let ray = Ray::new(Vec3::new(0.0, 1.0, 10.0), Vec3::NEG_Z);
        let pick = resolve_selection(&g, &g.intersect(&ray));
        assert_eq!(pick.room_element, Some(RoomElementKind::WallBack));
    }
}
