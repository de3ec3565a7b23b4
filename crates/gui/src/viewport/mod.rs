//! 3D viewport panel: pointer input, camera and wireframe painting

mod context_menu;
mod overlays;
mod renderer;
pub use room_planner_lib::viewport::{camera, controller, drag_drop, view_command};

use egui::{PointerButton, Pos2, Rect, Ui};
use shared::{FurnitureKind, RoomDimensions};

use crate::state::{apply_context_action, AppState};
use camera::ArcBallCamera;
use controller::{InteractionController, ViewportView};
use view_command::{ViewCommand, ViewCommandChannel};

/// Orbit degrees per dragged pixel
const ORBIT_SPEED: f32 = 0.5;
/// Pan metres per dragged pixel
const PAN_SPEED: f32 = 0.01;
const ZOOM_SPEED: f32 = 0.001;

/// 3D viewport panel
pub struct ViewportPanel {
    camera: ArcBallCamera,
    controller: InteractionController,
    views: ViewCommandChannel,
    /// Room the camera limits were last derived from
    framed_room: RoomDimensions,
}

impl ViewportPanel {
    pub fn new(state: &AppState) -> Self {
        let room = *state.room.dimensions();
        let mut camera = ArcBallCamera::for_room(&room);
        camera.apply_preset(state.view.current_view, &room);
        Self {
            camera,
            controller: InteractionController::new(),
            views: ViewCommandChannel::new(),
            framed_room: room,
        }
    }

    /// Channel for toolbar and menu view requests
    pub fn view_commands(&self) -> ViewCommandChannel {
        self.views.clone()
    }

    pub fn begin_library_drag(&mut self, kind: FurnitureKind) {
        self.controller.begin_library_drag(kind);
    }

    pub fn is_library_dragging(&self) -> bool {
        self.controller.drag_drop().is_dragging()
    }

    pub fn is_moving(&self) -> bool {
        self.controller.is_moving()
    }

    /// Abort any move or library drag. Returns false when nothing was in
    /// progress.
    pub fn cancel(&mut self, state: &mut AppState) -> bool {
        let busy = self.controller.gesture().is_some() || self.is_library_dragging();
        self.controller.cancel(state);
        busy
    }

    pub fn show(&mut self, ui: &mut Ui, state: &mut AppState) {
        self.apply_view_commands(state);

        let (rect, response) =
            ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

        // ── Context menu ──────────────────────────────────
        let was_open = state.context_menu.open;
        let (action, over_menu) = context_menu::show(ui.ctx(), state);
        if let Some(action) = action {
            apply_context_action(state, action);
        } else if was_open
            && !over_menu
            && ui.input(|i| i.pointer.any_pressed())
            && !response.hovered()
        {
            state.context_menu.close();
        }

        // ── Pointer ───────────────────────────────────────
        if !over_menu {
            self.handle_library_drag(ui, rect, state);
            self.handle_pointer(ui, &response, rect, state);
        }
        self.handle_camera(ui, &response, state);

        self.controller.frame(state);
        if self.controller.gesture().is_some() || self.is_library_dragging() {
            ui.ctx().request_repaint();
        }

        if !ui.is_rect_visible(rect) {
            return;
        }

        renderer::paint_viewport(ui, rect, &self.camera, state, &self.controller);

        // ── Overlays ─────────────────────────────────────
        let painter = ui.painter_at(rect);
        overlays::draw_axis_labels(&painter, rect, &self.camera);
        overlays::draw_move_guides(&painter, rect, &self.camera, state, &self.controller);
        overlays::draw_camera_info(&painter, rect, &self.camera);
        overlays::draw_nav_hint(&painter, rect, state);
    }

    fn apply_view_commands(&mut self, state: &mut AppState) {
        let room = *state.room.dimensions();
        if room != self.framed_room {
            self.camera.apply_preset(state.view.current_view, &room);
            self.framed_room = room;
        }
        for command in self.views.drain() {
            match command {
                ViewCommand::SetPreset(preset) => {
                    self.camera.apply_preset(preset, &room);
                    state.view.current_view = preset;
                    tracing::debug!("View preset: {preset:?}");
                }
            }
        }
    }

    /// Library items are dragged from another panel, so egui routes the drag
    /// to that panel's widget; follow the raw pointer instead.
    fn handle_library_drag(&mut self, ui: &Ui, rect: Rect, state: &mut AppState) {
        if !self.is_library_dragging() {
            return;
        }
        let (pos, released) = ui.input(|i| (i.pointer.latest_pos(), i.pointer.any_released()));
        let inside = pos.filter(|p| rect.contains(*p));

        match inside {
            Some(p) => {
                let view = ViewportView {
                    camera: &self.camera,
                    rect,
                };
                self.controller.library_drag_over(view, p);
            }
            None => self.controller.library_drag_left(),
        }

        if released {
            if inside.is_some() {
                self.controller.drop(state);
            } else {
                self.controller.cancel(state);
            }
        }
    }

    fn handle_pointer(&mut self, ui: &Ui, response: &egui::Response, rect: Rect, state: &mut AppState) {
        if self.is_library_dragging() {
            return;
        }
        let (pressed, released, secondary, latest, origin) = ui.input(|i| {
            (
                i.pointer.button_pressed(PointerButton::Primary),
                i.pointer.button_released(PointerButton::Primary),
                i.pointer.button_pressed(PointerButton::Secondary),
                i.pointer.latest_pos(),
                i.pointer.press_origin(),
            )
        });

        if pressed && response.hovered() {
            if let Some(pos) = origin.or(latest) {
                let view = ViewportView {
                    camera: &self.camera,
                    rect,
                };
                self.controller
                    .pointer_down(state, view, PointerButton::Primary, pos);
            }
        }

        if let Some(pos) = latest {
            let tracking = self.controller.gesture().is_some();
            if tracking || response.hovered() {
                let view = ViewportView {
                    camera: &self.camera,
                    rect,
                };
                self.controller.pointer_move(state, view, pos);
            }
        }

        if released && self.controller.gesture().is_some() {
            let pos = latest.unwrap_or(rect.center());
            let view = ViewportView {
                camera: &self.camera,
                rect,
            };
            self.controller.pointer_up(state, view, pos);
        }

        if secondary && response.hovered() {
            if let Some(pos) = origin.or(latest) {
                self.open_context_menu(state, rect, pos);
            }
        }
    }

    fn open_context_menu(&mut self, state: &mut AppState, rect: Rect, pos: Pos2) {
        let view = ViewportView {
            camera: &self.camera,
            rect,
        };
        self.controller
            .pointer_down(state, view, PointerButton::Secondary, pos);
    }

    /// Orbit, pan and zoom. Suspended while furniture is being moved.
    fn handle_camera(&mut self, ui: &Ui, response: &egui::Response, state: &AppState) {
        if state.view.is_dragging || self.is_library_dragging() {
            return;
        }

        let primary_orbit =
            response.dragged_by(PointerButton::Primary) && self.controller.gesture().is_none();
        if primary_orbit || response.dragged_by(PointerButton::Middle) {
            let delta = response.drag_delta();
            self.camera.rotate(-delta.x * ORBIT_SPEED, delta.y * ORBIT_SPEED);
        }

        if response.dragged_by(PointerButton::Secondary) {
            let delta = response.drag_delta();
            self.camera.pan(-delta.x * PAN_SPEED, delta.y * PAN_SPEED);
        }

        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll.abs() > 0.1 {
                self.camera.zoom(scroll * ZOOM_SPEED);
            }
        }
    }
}
