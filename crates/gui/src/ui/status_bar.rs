use egui::Ui;

use crate::i18n::{element_name, furniture_name, t};
use crate::state::{AppState, Selection};

pub fn show(ui: &mut Ui, state: &AppState, moving: bool, dropping: bool) {
    ui.horizontal(|ui| {
        ui.weak(format!("{}: {}", t("status.items"), state.furniture.len()));

        ui.separator();

        let selected = match state.selection.current() {
            Selection::Furniture(id) => state
                .furniture
                .get(id)
                .map(|f| furniture_name(f.kind))
                .unwrap_or(t("status.nothing")),
            Selection::RoomElement(kind) => element_name(*kind),
            Selection::None => t("status.nothing"),
        };
        ui.label(format!("{}: {selected}", t("status.selected")));

        ui.separator();
        ui.weak(format!("{} {}", t("tb.axis"), state.view.movement_axis.label()));
        ui.separator();
        if state.settings.snap.enabled {
            ui.weak(format!("{} ({:.2} m)", t("status.snap_on"), state.settings.snap.grid_size));
        } else {
            ui.weak(t("status.snap_off"));
        }

        if moving {
            ui.separator();
            ui.colored_label(egui::Color32::from_rgb(255, 200, 100), t("status.moving"));
        } else if dropping {
            ui.separator();
            ui.colored_label(egui::Color32::from_rgb(120, 220, 120), t("status.dropping"));
        }

        // Right-aligned version
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak("Room Planner v0.1");
        });
    });
}
