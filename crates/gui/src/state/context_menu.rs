//! Context menu model and the actions it can trigger

use std::f32::consts::FRAC_PI_2;

use shared::{FurnitureId, MovementAxis, RoomElementKind};

use super::AppState;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContextMenuState {
    pub open: bool,
    /// Top-left corner of the menu in screen coordinates
    pub x: f32,
    pub y: f32,
    pub item_id: Option<FurnitureId>,
    pub room_element: Option<RoomElementKind>,
}

impl ContextMenuState {
    /// Open the menu at `pos`, shifted so a menu of `size` stays inside
    /// `viewport`
    pub fn open_at(
        &mut self,
        pos: egui::Pos2,
        viewport: egui::Rect,
        size: egui::Vec2,
        item_id: Option<FurnitureId>,
        room_element: Option<RoomElementKind>,
    ) {
        let max_x = (viewport.max.x - size.x).max(viewport.min.x);
        let max_y = (viewport.max.y - size.y).max(viewport.min.y);
        self.x = pos.x.clamp(viewport.min.x, max_x);
        self.y = pos.y.clamp(viewport.min.y, max_y);
        self.item_id = item_id;
        self.room_element = room_element;
        self.open = true;
        tracing::debug!("Context menu at ({:.0}, {:.0})", self.x, self.y);
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }
}

/// Everything the context menu can do
#[derive(Debug, Clone, PartialEq)]
pub enum ContextAction {
    Duplicate(FurnitureId),
    Delete(FurnitureId),
    ToggleVisibility(FurnitureId),
    Rotate90(FurnitureId),
    SnapToFloor(FurnitureId),
    SelectRoomElement(RoomElementKind),
    ToggleRoomElementVisibility(RoomElementKind),
    ToggleSnapping,
    SetMovementAxis(MovementAxis),
}

/// Apply a context menu action and close the menu.
/// Returns false when the action targeted an unknown item.
pub fn apply_context_action(state: &mut AppState, action: ContextAction) -> bool {
    let applied = match action {
        ContextAction::Duplicate(id) => match state.furniture.duplicate(&id) {
            Some(copy) => {
                state.selection.select(copy);
                true
            }
            None => false,
        },
        ContextAction::Delete(id) => state.remove_furniture(&id),
        ContextAction::ToggleVisibility(id) => state.furniture.toggle_visibility(&id),
        ContextAction::Rotate90(id) => state.furniture.rotate(&id, FRAC_PI_2),
        ContextAction::SnapToFloor(id) => state.furniture.snap_to_floor(&id),
        ContextAction::SelectRoomElement(kind) => {
            state.selection.select_room_element(kind);
            true
        }
        ContextAction::ToggleRoomElementVisibility(kind) => {
            state.room_elements.toggle_visibility(kind);
            true
        }
        ContextAction::ToggleSnapping => {
            state.settings.snap.enabled = !state.settings.snap.enabled;
            tracing::info!("Snapping {}", if state.settings.snap.enabled { "on" } else { "off" });
            true
        }
        ContextAction::SetMovementAxis(axis) => {
            state.view.set_movement_axis(axis);
            true
        }
    };
    state.context_menu.close();
    applied
}
