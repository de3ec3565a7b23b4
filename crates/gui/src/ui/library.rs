//! Furniture library: catalogue entries that can be dragged into the room

use egui::Ui;
use shared::FurnitureKind;

use crate::i18n::{furniture_name, t};
use crate::viewport::ViewportPanel;

pub fn show(ui: &mut Ui, viewport: &mut ViewportPanel) {
    ui.heading(t("lib.title"));
    ui.weak(t("lib.hint"));
    ui.separator();

    for kind in FurnitureKind::ALL {
        let size = kind.size();
        let response = ui
            .add(
                egui::Button::new(furniture_name(kind))
                    .min_size(egui::vec2(ui.available_width(), 28.0))
                    .sense(egui::Sense::drag()),
            )
            .on_hover_text(format!("{:.2} × {:.2} × {:.2} m", size.x, size.y, size.z));

        if response.drag_started() {
            viewport.begin_library_drag(kind);
        }
        if response.dragged() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
        } else if response.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
        }
    }
}
