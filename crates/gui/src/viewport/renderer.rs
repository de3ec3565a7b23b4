//! Wireframe rendering for the viewport

use egui::{Color32, Painter, Rect, Stroke, Ui};
use glam::{Quat, Vec3};
use shared::{FurnitureKind, RoomDimensions, RoomElementKind};

use super::camera::ArcBallCamera;
use super::controller::InteractionController;
use crate::state::settings::GridSettings;
use crate::state::AppState;

/// Box edges as index pairs into the corner list of [`box_corners`]
const BOX_EDGES: [(usize, usize); 12] = [
    (0, 1), (1, 3), (3, 2), (2, 0),
    (4, 5), (5, 7), (7, 6), (6, 4),
    (0, 4), (1, 5), (2, 6), (3, 7),
];

fn rgb(c: [u8; 3]) -> Color32 {
    Color32::from_rgb(c[0], c[1], c[2])
}

/// Paint the room and its furniture using egui's painter
pub fn paint_viewport(
    ui: &Ui,
    rect: Rect,
    camera: &ArcBallCamera,
    state: &AppState,
    controller: &InteractionController,
) {
    let painter = ui.painter_at(rect);
    let viewport = &state.settings.viewport;

    painter.rect_filled(rect, 0.0, rgb(viewport.background_color));

    let room = state.room.dimensions();
    if state.settings.grid.visible {
        draw_grid(&painter, rect, camera, room, &state.settings.grid, state.settings.snap.grid_size);
    }

    let selected_element = state.selection.selected_room_element();
    for kind in state.room_elements.visible_elements() {
        let selected = selected_element == Some(kind);
        let stroke = if selected {
            Stroke::new(2.0, rgb(viewport.selection_color))
        } else {
            Stroke::new(1.0, Color32::from_rgb(140, 140, 150))
        };
        let corners = surface_corners(room, kind);
        draw_loop(&painter, rect, camera, &corners, stroke);
        if let Some(step) = state.tiles.tile_step(kind) {
            draw_tiles(&painter, rect, camera, &corners, step);
        }
    }

    let selected = state.selection.selected_furniture();
    for item in state.furniture.list().iter().filter(|f| f.visible) {
        let color = if selected == Some(&item.id) {
            rgb(viewport.selection_color)
        } else if controller.hovered() == Some(&item.id) {
            rgb(viewport.furniture_color).gamma_multiply(1.4)
        } else {
            rgb(viewport.furniture_color)
        };
        let width = if selected == Some(&item.id) { 2.0 } else { 1.2 };
        let corners = box_corners(
            controller.display_position(item),
            item.size * controller.display_scale(&item.id),
            item.rotation,
        );
        draw_box(&painter, rect, camera, &corners, Stroke::new(width, color));
    }

    if let Some((kind, point)) = drop_preview(controller) {
        let size = kind.size();
        let corners = box_corners(Vec3::new(point.x, size.y * 0.5, point.z), size, 0.0);
        let color = rgb(viewport.preview_color).gamma_multiply(0.8);
        draw_box(&painter, rect, camera, &corners, Stroke::new(1.5, color));
    }
}

fn drop_preview(controller: &InteractionController) -> Option<(FurnitureKind, Vec3)> {
    let session = controller.drag_drop();
    match (session.drag_item(), session.drop_preview()) {
        (Some(super::drag_drop::DragItem::Furniture(kind)), Some(point)) => Some((kind, point)),
        _ => None,
    }
}

fn draw_grid(
    painter: &Painter,
    rect: Rect,
    camera: &ArcBallCamera,
    room: &RoomDimensions,
    settings: &GridSettings,
    step: f32,
) {
    if step <= 0.0 {
        return;
    }
    let alpha = (settings.opacity.clamp(0.0, 1.0) * 255.0) as u8;
    let stroke = Stroke::new(0.5, Color32::from_rgba_unmultiplied(90, 90, 90, alpha));
    let (hw, hl) = (room.half_width(), room.half_length());

    let mut x = (-hw / step).ceil() * step;
    while x <= hw {
        segment(painter, rect, camera, Vec3::new(x, 0.0, -hl), Vec3::new(x, 0.0, hl), stroke);
        x += step;
    }
    let mut z = (-hl / step).ceil() * step;
    while z <= hl {
        segment(painter, rect, camera, Vec3::new(-hw, 0.0, z), Vec3::new(hw, 0.0, z), stroke);
        z += step;
    }
}

/// Corners of a room surface, in loop order
pub fn surface_corners(room: &RoomDimensions, kind: RoomElementKind) -> [Vec3; 4] {
    let (hw, hl, h) = (room.half_width(), room.half_length(), room.height);
    match kind {
        RoomElementKind::Floor => [
            Vec3::new(-hw, 0.0, -hl),
            Vec3::new(hw, 0.0, -hl),
            Vec3::new(hw, 0.0, hl),
            Vec3::new(-hw, 0.0, hl),
        ],
        RoomElementKind::Ceiling => [
            Vec3::new(-hw, h, -hl),
            Vec3::new(hw, h, -hl),
            Vec3::new(hw, h, hl),
            Vec3::new(-hw, h, hl),
        ],
        RoomElementKind::WallFront => [
            Vec3::new(-hw, 0.0, hl),
            Vec3::new(hw, 0.0, hl),
            Vec3::new(hw, h, hl),
            Vec3::new(-hw, h, hl),
        ],
        RoomElementKind::WallBack => [
            Vec3::new(-hw, 0.0, -hl),
            Vec3::new(hw, 0.0, -hl),
            Vec3::new(hw, h, -hl),
            Vec3::new(-hw, h, -hl),
        ],
        RoomElementKind::WallLeft => [
            Vec3::new(-hw, 0.0, -hl),
            Vec3::new(-hw, 0.0, hl),
            Vec3::new(-hw, h, hl),
            Vec3::new(-hw, h, -hl),
        ],
        RoomElementKind::WallRight => [
            Vec3::new(hw, 0.0, -hl),
            Vec3::new(hw, 0.0, hl),
            Vec3::new(hw, h, hl),
            Vec3::new(hw, h, -hl),
        ],
    }
}

/// Tile joints across a surface quad
fn draw_tiles(painter: &Painter, rect: Rect, camera: &ArcBallCamera, corners: &[Vec3; 4], step: f32) {
    let stroke = Stroke::new(0.5, Color32::from_rgb(110, 100, 90));
    let u = corners[1] - corners[0];
    let v = corners[3] - corners[0];
    let (lu, lv) = (u.length(), v.length());
    if lu <= 0.0 || lv <= 0.0 || step <= 0.0 {
        return;
    }
    let mut s = step;
    while s < lu {
        let t = s / lu;
        segment(painter, rect, camera, corners[0] + u * t, corners[3] + u * t, stroke);
        s += step;
    }
    let mut s = step;
    while s < lv {
        let t = s / lv;
        segment(painter, rect, camera, corners[0] + v * t, corners[1] + v * t, stroke);
        s += step;
    }
}

/// Corners of a box rotated around Y, ordered by (x, y, z) sign bits
pub fn box_corners(center: Vec3, size: Vec3, rotation: f32) -> [Vec3; 8] {
    let half = size * 0.5;
    let rot = Quat::from_rotation_y(rotation);
    let mut corners = [Vec3::ZERO; 8];
    for (i, corner) in corners.iter_mut().enumerate() {
        let sx = if i & 4 != 0 { 1.0 } else { -1.0 };
        let sy = if i & 2 != 0 { 1.0 } else { -1.0 };
        let sz = if i & 1 != 0 { 1.0 } else { -1.0 };
        *corner = center + rot * Vec3::new(sx * half.x, sy * half.y, sz * half.z);
    }
    corners
}

fn draw_box(painter: &Painter, rect: Rect, camera: &ArcBallCamera, corners: &[Vec3; 8], stroke: Stroke) {
    for (a, b) in BOX_EDGES {
        segment(painter, rect, camera, corners[a], corners[b], stroke);
    }
}

fn draw_loop(painter: &Painter, rect: Rect, camera: &ArcBallCamera, corners: &[Vec3; 4], stroke: Stroke) {
    for i in 0..corners.len() {
        segment(painter, rect, camera, corners[i], corners[(i + 1) % corners.len()], stroke);
    }
}

pub(super) fn segment(painter: &Painter, rect: Rect, camera: &ArcBallCamera, a: Vec3, b: Vec3, stroke: Stroke) {
    if let (Some(pa), Some(pb)) = (camera.project(a, rect), camera.project(b, rect)) {
        if rect.contains(pa) || rect.contains(pb) {
            painter.line_segment([pa, pb], stroke);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_corners_unrotated() {
        let corners = box_corners(Vec3::new(1.0, 0.5, 0.0), Vec3::new(2.0, 1.0, 4.0), 0.0);
        assert!((corners[0] - Vec3::new(0.0, 0.0, -2.0)).length() < 1e-6);
        assert!((corners[7] - Vec3::new(2.0, 1.0, 2.0)).length() < 1e-6);
    }

    #[test]
    fn test_box_corners_quarter_turn_swaps_extents() {
        let corners = box_corners(Vec3::ZERO, Vec3::new(2.0, 1.0, 4.0), std::f32::consts::FRAC_PI_2);
        let max_x = corners.iter().map(|c| c.x).fold(f32::MIN, f32::max);
        let max_z = corners.iter().map(|c| c.z).fold(f32::MIN, f32::max);
        assert!((max_x - 2.0).abs() < 1e-5);
        assert!((max_z - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_surface_corners_lie_on_walls() {
        let room = RoomDimensions::default();
        for c in surface_corners(&room, RoomElementKind::WallLeft) {
            assert_eq!(c.x, -2.0);
        }
        for c in surface_corners(&room, RoomElementKind::Ceiling) {
            assert_eq!(c.y, 2.5);
        }
    }
}
