//! Viewport context menu

use egui::{Color32, RichText, Ui};
use shared::MovementAxis;

use crate::i18n::{axis_hint, element_name, furniture_name, t};
use crate::state::{AppState, ContextAction};

/// Show the context menu if it is open. Returns the chosen action and
/// whether the pointer is over the menu.
pub fn show(ctx: &egui::Context, state: &AppState) -> (Option<ContextAction>, bool) {
    if !state.context_menu.open {
        return (None, false);
    }
    let menu = &state.context_menu;
    let mut action = None;

    let area = egui::Area::new(egui::Id::new("viewport_context_menu"))
        .order(egui::Order::Foreground)
        .fixed_pos(egui::pos2(menu.x, menu.y))
        .show(ctx, |ui| {
            egui::Frame::menu(ui.style()).show(ui, |ui| {
                ui.set_min_width(180.0);
                action = menu_items(ui, state);
            });
        });

    (action, area.response.contains_pointer())
}

fn menu_items(ui: &mut Ui, state: &AppState) -> Option<ContextAction> {
    let menu = &state.context_menu;
    let mut action = None;

    if let Some(item) = menu.item_id.as_deref().and_then(|id| state.furniture.get(id)) {
        ui.label(RichText::new(furniture_name(item.kind)).strong());
        ui.separator();

        ui.label(RichText::new(t("ctx.axis")).small().weak());
        for axis in MovementAxis::ALL {
            let current = state.view.movement_axis == axis;
            if ui
                .selectable_label(current, format!("{}  {}", axis.label(), axis_hint(axis)))
                .clicked()
            {
                action = Some(ContextAction::SetMovementAxis(axis));
            }
        }
        ui.separator();

        if ui.button(t("ctx.duplicate")).clicked() {
            action = Some(ContextAction::Duplicate(item.id.clone()));
        }
        if ui.button(t("ctx.rotate")).clicked() {
            action = Some(ContextAction::Rotate90(item.id.clone()));
        }
        let label = if item.visible { t("ctx.hide") } else { t("ctx.show") };
        if ui.button(label).clicked() {
            action = Some(ContextAction::ToggleVisibility(item.id.clone()));
        }
        let label = if state.settings.snap.enabled {
            t("ctx.snapping_off")
        } else {
            t("ctx.snapping_on")
        };
        if ui.button(label).clicked() {
            action = Some(ContextAction::ToggleSnapping);
        }
        if ui.button(t("ctx.snap_floor")).clicked() {
            action = Some(ContextAction::SnapToFloor(item.id.clone()));
        }
        ui.separator();
        if ui
            .button(RichText::new(t("ctx.delete")).color(Color32::from_rgb(220, 80, 80)))
            .clicked()
        {
            action = Some(ContextAction::Delete(item.id.clone()));
        }
    } else if let Some(kind) = menu.room_element {
        ui.label(RichText::new(element_name(kind)).strong());
        ui.separator();

        let label = if state.room_elements.is_visible(kind) {
            t("ctx.hide")
        } else {
            t("ctx.show")
        };
        if ui.button(label).clicked() {
            action = Some(ContextAction::ToggleRoomElementVisibility(kind));
        }
        if ui.button(t("ctx.select")).clicked() {
            action = Some(ContextAction::SelectRoomElement(kind));
        }
    } else {
        ui.label(RichText::new(t("props.nothing")).weak());
    }

    action
}
