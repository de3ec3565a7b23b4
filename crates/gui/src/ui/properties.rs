//! Properties panel for the selection and the room

use egui::Ui;
use shared::{FurnitureItem, RoomElementKind, TileSize, TileTexture};

use crate::i18n::{element_name, furniture_name, t, texture_name, tile_size_name};
use crate::state::{AppState, DimensionsPatch, FurniturePatch, Selection};

pub fn show(ui: &mut Ui, state: &mut AppState) {
    ui.heading(t("props.title"));
    ui.separator();

    match state.selection.current().clone() {
        Selection::Furniture(id) => {
            if let Some(item) = state.furniture.get(&id).cloned() {
                show_furniture(ui, state, &item);
            }
        }
        Selection::RoomElement(kind) => show_room_element(ui, state, kind),
        Selection::None => {
            ui.add_space(6.0);
            ui.vertical_centered(|ui| ui.weak(t("props.nothing")));
        }
    }

    ui.add_space(8.0);
    show_room(ui, state);
}

fn show_furniture(ui: &mut Ui, state: &mut AppState, item: &FurnitureItem) {
    ui.horizontal(|ui| {
        ui.strong(furniture_name(item.kind));
        ui.monospace(item.id.get(..8).unwrap_or(&item.id));
    });
    ui.add_space(4.0);

    let mut patch = FurniturePatch::default();
    egui::Grid::new("furniture_props")
        .num_columns(2)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            ui.label(t("props.position"));
            let mut p = item.position;
            let changed = ui
                .horizontal(|ui| {
                    let x = ui.add(egui::DragValue::new(&mut p.x).speed(0.01).prefix("x ")).changed();
                    let y = ui.add(egui::DragValue::new(&mut p.y).speed(0.01).prefix("y ")).changed();
                    let z = ui.add(egui::DragValue::new(&mut p.z).speed(0.01).prefix("z ")).changed();
                    x || y || z
                })
                .inner;
            if changed {
                patch.position = Some(p);
            }
            ui.end_row();

            ui.label(t("props.rotation"));
            let mut degrees = item.rotation.to_degrees();
            if ui
                .add(egui::DragValue::new(&mut degrees).speed(1.0).suffix("°"))
                .changed()
            {
                patch.rotation = Some(degrees.to_radians());
            }
            ui.end_row();

            ui.label(t("props.size"));
            ui.monospace(format!(
                "{:.2} × {:.2} × {:.2}",
                item.size.x, item.size.y, item.size.z
            ));
            ui.end_row();

            ui.label(t("props.visible"));
            let mut visible = item.visible;
            if ui.checkbox(&mut visible, "").changed() {
                patch.visible = Some(visible);
            }
            ui.end_row();
        });

    if patch != FurniturePatch::default() {
        state.furniture.update_item(&item.id, patch);
    }
}

fn show_room_element(ui: &mut Ui, state: &mut AppState, kind: RoomElementKind) {
    ui.strong(element_name(kind));
    ui.add_space(4.0);

    let mut visible = state.room_elements.is_visible(kind);
    if ui.checkbox(&mut visible, t("props.visible")).changed() {
        state.room_elements.set_visibility(kind, visible);
    }

    egui::CollapsingHeader::new(t("props.tiles"))
        .default_open(true)
        .show(ui, |ui| {
            let mut enabled = state.tiles.is_tiling_enabled(kind);
            if ui.checkbox(&mut enabled, t("props.tiling")).changed() {
                state.tiles.set_tiling_enabled(kind, enabled);
            }

            let current = state.tiles.settings(kind);
            let mut next = current;
            ui.add_enabled_ui(enabled, |ui| {
                egui::ComboBox::from_label(t("props.tile_size"))
                    .selected_text(tile_size_name(next.size))
                    .show_ui(ui, |ui| {
                        for size in TileSize::ALL {
                            ui.selectable_value(&mut next.size, size, tile_size_name(size));
                        }
                    });
                egui::ComboBox::from_label(t("props.texture"))
                    .selected_text(texture_name(next.texture))
                    .show_ui(ui, |ui| {
                        for texture in [TileTexture::Ceramic, TileTexture::Marble] {
                            ui.selectable_value(&mut next.texture, texture, texture_name(texture));
                        }
                    });
            });
            if next != current {
                state.tiles.set_tile_settings(kind, next);
            }
        });
}

fn show_room(ui: &mut Ui, state: &mut AppState) {
    egui::CollapsingHeader::new(t("props.room"))
        .id_salt("room_props")
        .default_open(true)
        .show(ui, |ui| {
            let room = *state.room.dimensions();
            let mut patch = DimensionsPatch::default();
            egui::Grid::new("room_props_grid")
                .num_columns(2)
                .spacing([8.0, 4.0])
                .show(ui, |ui| {
                    for (label, value, slot) in [
                        (t("props.width"), room.width, &mut patch.width),
                        (t("props.length"), room.length, &mut patch.length),
                        (t("props.height"), room.height, &mut patch.height),
                    ] {
                        ui.label(label);
                        let mut v = value;
                        if ui
                            .add(
                                egui::DragValue::new(&mut v)
                                    .speed(0.05)
                                    .range(0.5..=50.0)
                                    .suffix(" m"),
                            )
                            .changed()
                        {
                            *slot = Some(v);
                        }
                        ui.end_row();
                    }
                });
            if patch != DimensionsPatch::default() {
                if let Err(e) = state.room.set_dimensions(patch) {
                    tracing::warn!("{e}");
                }
            }
        });
}
