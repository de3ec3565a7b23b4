//! Keyboard shortcut handling

use eframe::egui;

use crate::state::AppState;
use crate::ui::toolbar;
use crate::viewport::ViewportPanel;

/// Handle keyboard shortcuts for the application
pub fn handle_keyboard(ctx: &egui::Context, state: &mut AppState, viewport: &mut ViewportPanel) {
    // Don't handle shortcuts when a text field is focused
    if ctx.memory(|m| m.focused().is_some()) {
        return;
    }

    let (escape, delete, duplicate, rotate) = ctx.input(|i| {
        (
            i.key_pressed(egui::Key::Escape),
            i.key_pressed(egui::Key::Delete) || i.key_pressed(egui::Key::Backspace),
            i.modifiers.command && i.key_pressed(egui::Key::D),
            !i.modifiers.command && i.key_pressed(egui::Key::R),
        )
    });

    // Escape: close menu, else abort a move, else deselect
    if escape {
        if state.context_menu.open {
            state.context_menu.close();
        } else if !viewport.cancel(state) {
            state.selection.clear();
        }
    }
    // Moving items are left alone until the move is released
    if viewport.is_moving() {
        return;
    }
    if delete {
        toolbar::action_delete(state);
    }
    if duplicate {
        toolbar::action_duplicate(state);
    }
    if rotate {
        if let Some(id) = state.selection.selected_furniture().cloned() {
            state.furniture.rotate(&id, std::f32::consts::FRAC_PI_2);
        }
    }
}
