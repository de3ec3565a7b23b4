//! Outliner panel: room elements and furniture with visibility toggles

use egui::Ui;
use shared::RoomElementKind;

use crate::i18n::{element_name, furniture_name, t};
use crate::state::AppState;

pub fn show(ui: &mut Ui, state: &mut AppState) {
    egui::ScrollArea::vertical()
        .id_salt("outliner_scroll")
        .show(ui, |ui| {
            egui::CollapsingHeader::new(t("tree.room"))
                .default_open(true)
                .show(ui, |ui| {
                    for kind in RoomElementKind::ALL {
                        room_element_row(ui, state, kind);
                    }
                });

            ui.add_space(4.0);

            let count = state.furniture.len();
            egui::CollapsingHeader::new(format!("{} ({count})", t("tree.furniture")))
                .default_open(true)
                .show(ui, |ui| {
                    if count == 0 {
                        ui.weak(t("tree.empty"));
                        return;
                    }
                    furniture_rows(ui, state);
                });
        });
}

fn visibility_button(ui: &mut Ui, visible: bool) -> bool {
    let (icon, tip) = if visible {
        ("👁", t("tree.hide"))
    } else {
        ("—", t("tree.show"))
    };
    ui.small_button(icon).on_hover_text(tip).clicked()
}

fn room_element_row(ui: &mut Ui, state: &mut AppState, kind: RoomElementKind) {
    ui.horizontal(|ui| {
        if visibility_button(ui, state.room_elements.is_visible(kind)) {
            state.room_elements.toggle_visibility(kind);
        }
        let selected = state.selection.selected_room_element() == Some(kind);
        if ui.selectable_label(selected, element_name(kind)).clicked() {
            state.selection.select_room_element(kind);
        }
    });
}

fn furniture_rows(ui: &mut Ui, state: &mut AppState) {
    // (id, kind, visible) snapshot to avoid borrow conflicts
    let rows: Vec<_> = state
        .furniture
        .list()
        .iter()
        .map(|f| (f.id.clone(), f.kind, f.visible))
        .collect();

    for (id, kind, visible) in rows {
        ui.horizontal(|ui| {
            if visibility_button(ui, visible) {
                state.furniture.toggle_visibility(&id);
            }
            let selected = state.selection.is_selected(&id);
            let short = id.get(..8).unwrap_or(&id);
            let label = ui
                .selectable_label(selected, furniture_name(kind))
                .on_hover_text(short);
            if label.clicked() {
                state.selection.select(id.clone());
            }
            label.context_menu(|ui| {
                if ui.button(t("ctx.duplicate")).clicked() {
                    if let Some(copy) = state.furniture.duplicate(&id) {
                        state.selection.select(copy);
                    }
                    ui.close_menu();
                }
                if ui.button(t("ctx.delete")).clicked() {
                    state.remove_furniture(&id);
                    ui.close_menu();
                }
            });
        });
    }
}
