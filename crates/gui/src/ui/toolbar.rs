//! Toolbar actions and UI

use egui::Ui;
use shared::{MovementAxis, ViewPreset};

use crate::i18n::{axis_hint, preset_name, t};
use crate::state::AppState;
use crate::viewport::view_command::{ViewCommand, ViewCommandChannel};

// ── Public actions (callable from menus and shortcuts too) ───

pub fn action_duplicate(state: &mut AppState) {
    let Some(id) = state.selection.selected_furniture().cloned() else {
        return;
    };
    if let Some(copy) = state.furniture.duplicate(&id) {
        state.selection.select(copy);
    }
}

pub fn action_delete(state: &mut AppState) {
    if let Some(id) = state.selection.selected_furniture().cloned() {
        state.remove_furniture(&id);
    }
}

pub fn action_toggle_snap(state: &mut AppState) {
    let snap = &mut state.settings.snap;
    snap.enabled = !snap.enabled;
    tracing::info!("Snapping {}", if snap.enabled { "on" } else { "off" });
}

pub fn action_set_view(views: &ViewCommandChannel, preset: ViewPreset) {
    views.publish(ViewCommand::SetPreset(preset));
}

// ── UI ───────────────────────────────────────────────────────

pub fn show(ui: &mut Ui, state: &mut AppState, views: &ViewCommandChannel) {
    ui.horizontal(|ui| {
        ui.label(t("tb.axis")).on_hover_text(t("tip.axis"));
        for axis in MovementAxis::ALL {
            let current = state.view.movement_axis == axis;
            if ui
                .selectable_label(current, axis.label())
                .on_hover_text(axis_hint(axis))
                .clicked()
            {
                state.view.set_movement_axis(axis);
            }
        }

        ui.separator();

        let mut snap = state.settings.snap.enabled;
        if ui
            .toggle_value(&mut snap, t("tb.snap"))
            .on_hover_text(t("tip.snap"))
            .changed()
        {
            action_toggle_snap(state);
        }
        ui.toggle_value(&mut state.settings.grid.visible, t("tb.grid"));

        ui.separator();

        ui.label(t("tb.view")).on_hover_text(t("tip.view"));
        for preset in ViewPreset::ALL {
            let current = state.view.current_view == preset;
            if ui.selectable_label(current, preset_name(preset)).clicked() {
                action_set_view(views, preset);
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use shared::FurnitureKind;

    #[test]
    fn test_duplicate_selects_copy() {
        let mut state = AppState::default();
        let id = state.furniture.add_item(FurnitureKind::Sofa, Vec3::ZERO, 0.0);
        state.selection.select(id.clone());
        action_duplicate(&mut state);
        assert_eq!(state.furniture.len(), 2);
        assert_ne!(state.selection.selected_furniture(), Some(&id));
    }

    #[test]
    fn test_delete_clears_selection() {
        let mut state = AppState::default();
        let id = state.furniture.add_item(FurnitureKind::Lamp, Vec3::ZERO, 0.0);
        state.selection.select(id);
        action_delete(&mut state);
        assert!(state.furniture.is_empty());
        assert!(state.selection.is_empty());
    }

    #[test]
    fn test_set_view_goes_through_channel() {
        let views = ViewCommandChannel::new();
        action_set_view(&views, ViewPreset::Side);
        assert_eq!(views.drain(), vec![ViewCommand::SetPreset(ViewPreset::Side)]);
    }
}
