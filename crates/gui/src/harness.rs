//! Headless test harness for programmatic room manipulation.
//!
//! Owns the same pieces as the running app (state, interaction controller,
//! camera and the view command channel) over a fixed 800 × 600 viewport, so
//! pointer gestures can be replayed without a window.

use egui::{PointerButton, Pos2, Rect};
use glam::Vec3;
use shared::{FurnitureId, FurnitureItem, FurnitureKind, RoomElementKind, ViewPreset};

use crate::state::furniture::{rotated_size, FurniturePatch};
use crate::state::{AppSettings, AppState, DimensionsPatch};
use crate::viewport::camera::ArcBallCamera;
use crate::viewport::controller::{InteractionController, ViewportView};
use crate::viewport::solver::solve_position;
use crate::viewport::view_command::{ViewCommand, ViewCommandChannel};

/// Pointer moves generated between the ends of a scripted drag
const DRAG_STEPS: usize = 8;

/// Headless test harness — manages state, controller, camera and view commands
pub struct TestHarness {
    pub state: AppState,
    pub controller: InteractionController,
    pub camera: ArcBallCamera,
    pub rect: Rect,
    views: ViewCommandChannel,
}

impl TestHarness {
    /// Create a harness over the default room and settings.
    pub fn new() -> Self {
        Self::with_settings(AppSettings::default())
    }

    pub fn with_settings(settings: AppSettings) -> Self {
        let state = AppState::with_settings(settings);
        let camera = ArcBallCamera::for_room(state.room.dimensions());
        Self {
            state,
            controller: InteractionController::new(),
            camera,
            rect: Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(800.0, 600.0)),
            views: ViewCommandChannel::new(),
        }
    }

    // ── Furniture ─────────────────────────────────────────────

    /// Add an item standing on the floor at (x, z) and return its ID
    pub fn add_furniture(&mut self, kind: FurnitureKind, x: f32, z: f32) -> FurnitureId {
        self.state.furniture.add_item(kind, Vec3::new(x, 0.0, z), 0.0)
    }

    /// Insert a prepared item (see `fixtures`)
    pub fn insert(&mut self, item: FurnitureItem) -> FurnitureId {
        let id = item.id.clone();
        self.state.furniture.insert(item);
        id
    }

    pub fn remove(&mut self, id: &str) -> bool {
        self.state.remove_furniture(id)
    }

    pub fn position_of(&self, id: &str) -> Option<Vec3> {
        self.state.furniture.get(id).map(|f| f.position)
    }

    pub fn furniture_count(&self) -> usize {
        self.state.furniture.len()
    }

    /// Solve a raw world point for an item with the current axis and snap
    /// settings and commit it, as a finished drag would
    pub fn move_furniture(&mut self, id: &str, raw: Vec3) -> Option<Vec3> {
        let item = self.state.furniture.get(id)?;
        let target = solve_position(
            self.state.view.movement_axis,
            raw,
            item.position,
            rotated_size(item),
            self.state.room.dimensions(),
            &self.state.settings.snap.config(),
        );
        self.state
            .furniture
            .update_item(id, FurniturePatch::position(target))
            .then_some(target)
    }

    // ── Room and view ─────────────────────────────────────────

    pub fn set_room_dimensions(&mut self, patch: DimensionsPatch) -> Result<(), String> {
        self.state.room.set_dimensions(patch)?;
        self.set_view(self.state.view.current_view);
        Ok(())
    }

    /// Apply a preset immediately
    pub fn set_view(&mut self, preset: ViewPreset) {
        self.camera.apply_preset(preset, self.state.room.dimensions());
        self.state.view.current_view = preset;
    }

    /// Channel the toolbar would publish on
    pub fn view_commands(&self) -> ViewCommandChannel {
        self.views.clone()
    }

    /// One frame: apply pending view commands and advance interpolation
    pub fn frame(&mut self) {
        for command in self.views.drain() {
            match command {
                ViewCommand::SetPreset(preset) => self.set_view(preset),
            }
        }
        self.controller.frame(&self.state);
    }

    /// Run frames until live positions settle
    pub fn settle(&mut self) {
        for _ in 0..60 {
            self.frame();
        }
    }

    // ── Pointer ───────────────────────────────────────────────

    /// Screen position of a world point
    pub fn screen_of(&self, point: Vec3) -> Option<Pos2> {
        self.camera.project(point, self.rect)
    }

    pub fn press(&mut self, button: PointerButton, pos: Pos2) {
        let view = ViewportView {
            camera: &self.camera,
            rect: self.rect,
        };
        self.controller.pointer_down(&mut self.state, view, button, pos);
    }

    pub fn move_to(&mut self, pos: Pos2) {
        let view = ViewportView {
            camera: &self.camera,
            rect: self.rect,
        };
        self.controller.pointer_move(&mut self.state, view, pos);
    }

    pub fn release(&mut self, pos: Pos2) -> Option<FurnitureId> {
        let view = ViewportView {
            camera: &self.camera,
            rect: self.rect,
        };
        self.controller.pointer_up(&mut self.state, view, pos)
    }

    /// Left click at a screen position
    pub fn click(&mut self, pos: Pos2) {
        self.press(PointerButton::Primary, pos);
        self.release(pos);
    }

    /// Left click on whatever is drawn at a world point
    pub fn click_at(&mut self, point: Vec3) -> bool {
        let Some(pos) = self.screen_of(point) else {
            return false;
        };
        self.click(pos);
        true
    }

    pub fn right_click(&mut self, pos: Pos2) {
        self.press(PointerButton::Secondary, pos);
    }

    /// Hover without pressing
    pub fn hover(&mut self, pos: Pos2) {
        self.move_to(pos);
    }

    /// Press at `from`, move in steps to `to`, release there
    pub fn drag(&mut self, from: Pos2, to: Pos2) -> Option<FurnitureId> {
        self.press(PointerButton::Primary, from);
        for i in 1..=DRAG_STEPS {
            let t = i as f32 / DRAG_STEPS as f32;
            self.move_to(from.lerp(to, t));
            self.frame();
        }
        self.release(to)
    }

    /// Grab an item at its centre and drag it to the screen position of
    /// `point` taken at the item's height
    pub fn drag_item_to(&mut self, id: &str, x: f32, z: f32) -> Option<FurnitureId> {
        let center = self.position_of(id)?;
        let from = self.screen_of(center)?;
        let to = self.screen_of(Vec3::new(x, center.y, z))?;
        self.drag(from, to)
    }

    /// Drag a catalogue item from the library and drop it over the floor
    /// point (x, z)
    pub fn library_drop(&mut self, kind: FurnitureKind, x: f32, z: f32) -> Option<FurnitureId> {
        let pos = self.screen_of(Vec3::new(x, 0.0, z))?;
        self.controller.begin_library_drag(kind);
        let view = ViewportView {
            camera: &self.camera,
            rect: self.rect,
        };
        self.controller.library_drag_over(view, pos);
        self.release(pos)
    }

    // ── Selection ─────────────────────────────────────────────

    pub fn select(&mut self, id: &str) -> bool {
        if self.state.furniture.get(id).is_none() {
            return false;
        }
        self.state.selection.select(id.to_string());
        true
    }

    pub fn select_room_element(&mut self, kind: RoomElementKind) {
        self.state.selection.select_room_element(kind);
    }

    pub fn clear_selection(&mut self) {
        self.state.selection.clear();
    }

    pub fn selected_furniture(&self) -> Option<&FurnitureId> {
        self.state.selection.selected_furniture()
    }

    pub fn selected_room_element(&self) -> Option<RoomElementKind> {
        self.state.selection.selected_room_element()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
