//! Viewport overlay drawing (axis labels, move guides, camera info)

use egui::{Color32, Painter, Stroke};
use glam::Vec3;
use shared::MovementAxis;

use crate::i18n::t;
use crate::state::AppState;

use super::camera::ArcBallCamera;
use super::controller::InteractionController;
use super::renderer::segment;

const AXIS_X: Color32 = Color32::from_rgb(220, 70, 70);
const AXIS_Y: Color32 = Color32::from_rgb(70, 200, 70);
const AXIS_Z: Color32 = Color32::from_rgb(70, 110, 220);

/// Draw axis labels in the viewport
pub fn draw_axis_labels(painter: &Painter, rect: egui::Rect, camera: &ArcBallCamera) {
    let labels = [
        (Vec3::new(1.0, 0.0, 0.0), "X", AXIS_X),
        (Vec3::new(0.0, 1.0, 0.0), "Y", AXIS_Y),
        (Vec3::new(0.0, 0.0, 1.0), "Z", AXIS_Z),
    ];

    let Some(origin) = camera.project(Vec3::ZERO, rect) else {
        return;
    };
    for (pos, label, color) in &labels {
        if let Some(screen) = camera.project(*pos, rect) {
            painter.line_segment([origin, screen], Stroke::new(1.5, *color));
            if rect.contains(screen) {
                painter.text(
                    screen,
                    egui::Align2::LEFT_BOTTOM,
                    *label,
                    egui::FontId::monospace(12.0),
                    *color,
                );
            }
        }
    }
}

/// Guide lines through the item being moved, one per allowed axis
pub fn draw_move_guides(
    painter: &Painter,
    rect: egui::Rect,
    camera: &ArcBallCamera,
    state: &AppState,
    controller: &InteractionController,
) {
    let Some(gesture) = controller.gesture().filter(|g| g.is_active()) else {
        return;
    };
    let Some(item) = state.furniture.get(&gesture.item_id) else {
        return;
    };
    let center = controller.display_position(item);
    let reach = state.room.dimensions().width.max(state.room.dimensions().length);

    let axes: &[(Vec3, Color32)] = match gesture.axis {
        MovementAxis::Xz => &[(Vec3::X, AXIS_X), (Vec3::Z, AXIS_Z)],
        MovementAxis::X => &[(Vec3::X, AXIS_X)],
        MovementAxis::Y => &[(Vec3::Y, AXIS_Y)],
        MovementAxis::Z => &[(Vec3::Z, AXIS_Z)],
    };
    for (dir, color) in axes {
        let stroke = Stroke::new(1.0, color.gamma_multiply(0.7));
        segment(painter, rect, camera, center - *dir * reach, center + *dir * reach, stroke);
    }

    if let Some(screen) = camera.project(center, rect) {
        painter.text(
            screen + egui::vec2(10.0, -10.0),
            egui::Align2::LEFT_BOTTOM,
            format!("{:.2}, {:.2}, {:.2}", center.x, center.y, center.z),
            egui::FontId::monospace(11.0),
            Color32::from_rgb(220, 220, 230),
        );
    }
}

pub fn draw_camera_info(painter: &Painter, rect: egui::Rect, camera: &ArcBallCamera) {
    let overlay_rect = egui::Rect::from_min_size(
        egui::pos2(rect.right() - 140.0, rect.top() + 4.0),
        egui::vec2(136.0, 44.0),
    );
    painter.rect_filled(
        overlay_rect,
        4.0,
        Color32::from_rgba_premultiplied(0, 0, 0, 140),
    );
    painter.text(
        overlay_rect.min + egui::vec2(6.0, 4.0),
        egui::Align2::LEFT_TOP,
        format!(
            "Dist: {:.1}\nYaw: {:.0}  Pitch: {:.0}",
            camera.distance,
            camera.yaw.to_degrees(),
            camera.pitch.to_degrees(),
        ),
        egui::FontId::monospace(10.0),
        Color32::from_rgb(160, 160, 170),
    );
}

/// Navigation hint shown while the room is empty
pub fn draw_nav_hint(painter: &Painter, rect: egui::Rect, state: &AppState) {
    if !state.furniture.is_empty() {
        return;
    }
    painter.text(
        egui::pos2(rect.center().x, rect.bottom() - 20.0),
        egui::Align2::CENTER_BOTTOM,
        t("status.nav_hint"),
        egui::FontId::proportional(11.0),
        Color32::from_rgb(100, 100, 110),
    );
}
