//! Pointer interaction controller.
//!
//! Routes pointer events from the viewport to selection, the move gesture
//! and the library drag-and-drop session. Positions of items being moved
//! live here as ephemeral interpolated values; the furniture store is only
//! written when a move or drop is released.

use std::collections::HashMap;

use egui::{PointerButton, Pos2, Rect};
use glam::Vec3;
use shared::{FurnitureId, FurnitureItem, FurnitureKind};

use super::camera::ArcBallCamera;
use super::drag_drop::{drop_position, DragDropSession, DragItem};
use super::move_gesture::{MoveContext, MoveGesture};
use super::picking::{resolve_selection, PickResult, Ray};
use super::room_scene::{build_room_scene, SceneOverlays};
use super::scene_graph::SceneGraph;
use crate::state::furniture::{rotated_size, FurniturePatch};
use crate::state::AppState;

/// Hover scale interpolation factor per frame
const SCALE_SMOOTHING: f32 = 0.1;
const SELECTED_SCALE: f32 = 1.2;
const HOVERED_SCALE: f32 = 1.1;
/// Distance under which a released item snaps onto its committed position
const SETTLE_EPSILON: f32 = 1e-3;

/// The camera and screen area the pointer events refer to
#[derive(Clone, Copy)]
pub struct ViewportView<'a> {
    pub camera: &'a ArcBallCamera,
    pub rect: Rect,
}

impl ViewportView<'_> {
    pub fn ray(&self, pos: Pos2) -> Ray {
        self.camera.screen_ray(pos, self.rect)
    }
}

/// Ephemeral position of an item being moved: the interpolated value drawn
/// on screen and the solved value it converges to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiveTransform {
    pub live: Vec3,
    pub target: Vec3,
}

#[derive(Default)]
pub struct InteractionController {
    gesture: Option<MoveGesture>,
    drag_drop: DragDropSession,
    live: HashMap<FurnitureId, LiveTransform>,
    hovered: Option<FurnitureId>,
    display_scales: HashMap<FurnitureId, f32>,
    /// Set when the current pointer-down selected something
    hit: bool,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Queries ──────────────────────────────────────────────

    pub fn hovered(&self) -> Option<&FurnitureId> {
        self.hovered.as_ref()
    }

    pub fn is_moving(&self) -> bool {
        self.gesture.as_ref().is_some_and(|g| g.is_active())
    }

    pub fn gesture(&self) -> Option<&MoveGesture> {
        self.gesture.as_ref()
    }

    pub fn drag_drop(&self) -> &DragDropSession {
        &self.drag_drop
    }

    pub fn live_transform(&self, id: &str) -> Option<&LiveTransform> {
        self.live.get(id)
    }

    /// Where an item is drawn this frame
    pub fn display_position(&self, item: &FurnitureItem) -> Vec3 {
        self.live.get(&item.id).map(|t| t.live).unwrap_or(item.position)
    }

    pub fn display_scale(&self, id: &str) -> f32 {
        self.display_scales.get(id).copied().unwrap_or(1.0)
    }

    /// Scene graph as currently displayed, including the drop preview
    pub fn scene(&self, state: &AppState) -> SceneGraph {
        let live: HashMap<FurnitureId, Vec3> =
            self.live.iter().map(|(id, t)| (id.clone(), t.live)).collect();
        let drop_preview = match (self.drag_drop.drag_item(), self.drag_drop.drop_preview()) {
            (Some(DragItem::Furniture(kind)), Some(point)) => Some((kind, point)),
            _ => None,
        };
        build_room_scene(
            state.room.dimensions(),
            &state.room_elements,
            state.furniture.list(),
            &live,
            &SceneOverlays {
                grid: state.settings.grid.visible,
                drop_preview,
            },
        )
    }

    /// Resolve what lies under a screen position
    pub fn pick(&self, state: &AppState, view: ViewportView, pos: Pos2) -> PickResult {
        let graph = self.scene(state);
        resolve_selection(&graph, &graph.intersect(&view.ray(pos)))
    }

    // ── Pointer events ───────────────────────────────────────

    pub fn pointer_down(
        &mut self,
        state: &mut AppState,
        view: ViewportView,
        button: PointerButton,
        pos: Pos2,
    ) -> PickResult {
        match button {
            PointerButton::Primary => self.primary_down(state, view, pos),
            PointerButton::Secondary => {
                let pick = self.pick(state, view, pos);
                let [w, h] = state.settings.interaction.context_menu_size;
                state.context_menu.open_at(
                    pos,
                    view.rect,
                    egui::vec2(w, h),
                    pick.furniture_id.clone(),
                    pick.room_element,
                );
                pick
            }
            _ => PickResult::default(),
        }
    }

    fn primary_down(&mut self, state: &mut AppState, view: ViewportView, pos: Pos2) -> PickResult {
        if state.context_menu.open {
            state.context_menu.close();
        }
        self.hit = false;

        let graph = self.scene(state);
        let ray = view.ray(pos);
        let hits = graph.intersect(&ray);
        let pick = resolve_selection(&graph, &hits);

        if let Some(id) = &pick.furniture_id {
            state.selection.select(id.clone());
            self.hit = true;
            if let Some(item) = state.furniture.get(id) {
                self.gesture = Some(MoveGesture::begin(
                    id.clone(),
                    pos,
                    &ray,
                    view.camera.eye_position(),
                    self.display_position(item),
                    rotated_size(item),
                    state.view.movement_axis,
                ));
            }
        } else if let Some(kind) = pick.room_element {
            state.selection.select_room_element(kind);
            self.hit = true;
        } else {
            state.selection.clear();
        }

        if hits.is_empty() {
            self.pointer_missed(state);
        }
        pick
    }

    /// The press hit no geometry at all. Clears the selection unless this
    /// same press already selected something.
    pub fn pointer_missed(&mut self, state: &mut AppState) {
        if !self.hit {
            state.selection.clear();
        }
    }

    pub fn pointer_move(&mut self, state: &mut AppState, view: ViewportView, pos: Pos2) {
        let ray = view.ray(pos);

        if self.drag_drop.is_dragging() {
            self.track_drop(&ray);
            return;
        }

        if let Some(gesture) = self.gesture.as_mut() {
            let snap = state.settings.snap.config();
            let ctx = MoveContext {
                room: state.room.dimensions(),
                snap: &snap,
                eye: view.camera.eye_position(),
                threshold_px: state.settings.interaction.drag_threshold_px,
            };
            let was_active = gesture.is_active();
            if let Some(target) = gesture.update(pos, &ray, &ctx) {
                let start = gesture.start_position;
                self.live
                    .entry(gesture.item_id.clone())
                    .or_insert(LiveTransform { live: start, target: start })
                    .target = target;
            }
            if gesture.is_active() && !was_active {
                state.view.is_dragging = true;
                self.hovered = None;
            }
            return;
        }

        self.hovered = self.pick(state, view, pos).furniture_id;
    }

    /// Release: commit an active move or a library drop. Returns the id of
    /// the item written to the store, if any.
    pub fn pointer_up(&mut self, state: &mut AppState, view: ViewportView, pos: Pos2) -> Option<FurnitureId> {
        if self.drag_drop.is_dragging() {
            self.track_drop(&view.ray(pos));
            return self.drop(state);
        }

        let gesture = self.gesture.take()?;
        state.view.is_dragging = false;
        if !gesture.is_active() {
            return None;
        }

        let target = gesture.target();
        if !state
            .furniture
            .update_item(&gesture.item_id, FurniturePatch::position(target))
        {
            self.live.remove(&gesture.item_id);
            return None;
        }
        if let Some(t) = self.live.get_mut(&gesture.item_id) {
            t.target = target;
        }
        tracing::info!(
            "Moved {} to ({:.2}, {:.2}, {:.2})",
            gesture.item_id,
            target.x,
            target.y,
            target.z
        );
        Some(gesture.item_id)
    }

    /// Abort a move without touching the store
    pub fn cancel(&mut self, state: &mut AppState) {
        if let Some(gesture) = self.gesture.take() {
            self.live.remove(&gesture.item_id);
            tracing::debug!("Move cancelled: {}", gesture.item_id);
        }
        self.drag_drop.on_drag_end();
        state.view.is_dragging = false;
    }

    // ── Library drag and drop ────────────────────────────────

    pub fn begin_library_drag(&mut self, kind: FurnitureKind) {
        self.drag_drop.on_drag_start(DragItem::Furniture(kind));
    }

    /// Pointer over the viewport while a library item is dragged
    pub fn library_drag_over(&mut self, view: ViewportView, pos: Pos2) {
        if self.drag_drop.is_dragging() {
            self.track_drop(&view.ray(pos));
        }
    }

    /// Move the drop preview to where `ray` meets the floor. A ray that
    /// misses the floor keeps the last preview.
    fn track_drop(&mut self, ray: &Ray) {
        if let Some(point) = drop_position(ray) {
            self.drag_drop.update_drop_preview(Some(point));
        }
    }

    /// Pointer left the viewport while dragging: no valid drop target
    pub fn library_drag_left(&mut self) {
        self.drag_drop.update_drop_preview(None);
    }

    /// Commit the library drag at its preview, or cancel it if there is none
    pub fn drop(&mut self, state: &mut AppState) -> Option<FurnitureId> {
        let id = self.drag_drop.commit(&mut state.furniture)?;
        state.selection.select(id.clone());
        Some(id)
    }

    // ── Per frame ────────────────────────────────────────────

    /// Advance interpolation. Safe to call every frame whether or not any
    /// target changed.
    pub fn frame(&mut self, state: &AppState) {
        let smoothing = state.settings.interaction.drag_smoothing.clamp(0.0, 1.0);
        let moving = self.gesture.as_ref().map(|g| g.item_id.clone());

        self.live.retain(|id, t| {
            if state.furniture.get(id).is_none() {
                return false;
            }
            t.live = t.live.lerp(t.target, smoothing);
            let settled = t.live.distance(t.target) < SETTLE_EPSILON;
            !(settled && moving.as_deref() != Some(id.as_str()))
        });

        let selected = state.selection.selected_furniture();
        let hovered = self.hovered.as_ref();
        let mut scales = HashMap::with_capacity(state.furniture.len());
        for item in state.furniture.list() {
            let goal = if selected == Some(&item.id) {
                SELECTED_SCALE
            } else if hovered == Some(&item.id) {
                HOVERED_SCALE
            } else {
                1.0
            };
            let current = self.display_scale(&item.id);
            scales.insert(item.id.clone(), current + (goal - current) * SCALE_SMOOTHING);
        }
        self.display_scales = scales;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{RoomElementKind, ViewPreset};

    fn rect() -> Rect {
        Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(800.0, 600.0))
    }

    fn top_camera(state: &AppState) -> ArcBallCamera {
        let mut cam = ArcBallCamera::for_room(state.room.dimensions());
        cam.apply_preset(ViewPreset::Top, state.room.dimensions());
        cam
    }

    fn front_camera(state: &AppState) -> ArcBallCamera {
        let mut cam = ArcBallCamera::for_room(state.room.dimensions());
        cam.apply_preset(ViewPreset::Front, state.room.dimensions());
        cam
    }

    fn screen_of(cam: &ArcBallCamera, p: Vec3) -> Pos2 {
        cam.project(p, rect()).unwrap()
    }

    #[test]
    fn test_click_selects_furniture_then_floor() {
        let mut state = AppState::default();
        let id = state.furniture.add_item(FurnitureKind::Bed, Vec3::ZERO, 0.0);
        let cam = top_camera(&state);
        let view = ViewportView { camera: &cam, rect: rect() };
        let mut c = InteractionController::new();

        let pos = screen_of(&cam, Vec3::new(0.0, 0.3, 0.0));
        c.pointer_down(&mut state, view, PointerButton::Primary, pos);
        c.pointer_up(&mut state, view, pos);
        assert_eq!(state.selection.selected_furniture(), Some(&id));

        let floor = screen_of(&cam, Vec3::new(-1.5, 0.0, 2.0));
        c.pointer_down(&mut state, view, PointerButton::Primary, floor);
        c.pointer_up(&mut state, view, floor);
        assert!(state.selection.selected_furniture().is_none());
        assert_eq!(state.selection.selected_room_element(), Some(RoomElementKind::Floor));
    }

    #[test]
    fn test_click_on_nothing_clears() {
        let mut state = AppState::default();
        state.selection.select_room_element(RoomElementKind::WallLeft);
        let cam = front_camera(&state);
        let view = ViewportView { camera: &cam, rect: rect() };
        let mut c = InteractionController::new();

        // From the front, the top edge of the screen looks over the room
        c.pointer_down(&mut state, view, PointerButton::Primary, egui::pos2(400.0, 1.0));
        assert!(state.selection.is_empty());
    }

    #[test]
    fn test_missed_does_not_undo_hit() {
        let mut state = AppState::default();
        let cam = top_camera(&state);
        let view = ViewportView { camera: &cam, rect: rect() };
        let mut c = InteractionController::new();

        let floor = screen_of(&cam, Vec3::new(1.0, 0.0, 1.0));
        c.pointer_down(&mut state, view, PointerButton::Primary, floor);
        c.pointer_missed(&mut state);
        assert_eq!(state.selection.selected_room_element(), Some(RoomElementKind::Floor));
    }

    #[test]
    fn test_right_click_opens_menu_without_selecting() {
        let mut state = AppState::default();
        let id = state.furniture.add_item(FurnitureKind::Sofa, Vec3::ZERO, 0.0);
        let cam = top_camera(&state);
        let view = ViewportView { camera: &cam, rect: rect() };
        let mut c = InteractionController::new();

        let pos = screen_of(&cam, Vec3::new(0.0, 0.6, 0.0));
        c.pointer_down(&mut state, view, PointerButton::Secondary, pos);
        assert!(state.context_menu.open);
        assert_eq!(state.context_menu.item_id.as_ref(), Some(&id));
        assert!(state.selection.is_empty());

        // A left press anywhere closes it
        c.pointer_down(&mut state, view, PointerButton::Primary, egui::pos2(1.0, 1.0));
        assert!(!state.context_menu.open);
    }

    #[test]
    fn test_small_motion_is_a_click() {
        let mut state = AppState::default();
        let id = state.furniture.add_item(FurnitureKind::Chair, Vec3::ZERO, 0.0);
        let cam = top_camera(&state);
        let view = ViewportView { camera: &cam, rect: rect() };
        let mut c = InteractionController::new();

        let pos = screen_of(&cam, Vec3::new(0.0, 0.225, 0.0));
        c.pointer_down(&mut state, view, PointerButton::Primary, pos);
        c.pointer_move(&mut state, view, pos + egui::vec2(3.0, -3.0));
        assert!(!state.view.is_dragging);
        assert!(c.pointer_up(&mut state, view, pos).is_none());
        assert_eq!(state.furniture.get(&id).unwrap().position, Vec3::new(0.0, 0.225, 0.0));
        assert_eq!(state.selection.selected_furniture(), Some(&id));
    }

    #[test]
    fn test_drag_commits_once_on_release() {
        let mut state = AppState::default();
        let id = state.furniture.add_item(FurnitureKind::Chair, Vec3::ZERO, 0.0);
        let cam = top_camera(&state);
        let view = ViewportView { camera: &cam, rect: rect() };
        let mut c = InteractionController::new();

        let start = screen_of(&cam, Vec3::new(0.0, 0.225, 0.0));
        let end = screen_of(&cam, Vec3::new(1.2, 0.225, 0.9));
        let version = state.furniture.version();

        c.pointer_down(&mut state, view, PointerButton::Primary, start);
        c.pointer_move(&mut state, view, end);
        assert!(state.view.is_dragging);
        c.frame(&state);
        // Store untouched while dragging, live value moving toward target
        assert_eq!(state.furniture.version(), version);
        let live = *c.live_transform(&id).unwrap();
        assert!((live.target - Vec3::new(1.0, 0.225, 1.0)).length() < 1e-3);
        assert!(live.live.x > 0.0 && live.live.x < live.target.x);

        assert_eq!(c.pointer_up(&mut state, view, end).as_ref(), Some(&id));
        assert!(!state.view.is_dragging);
        assert_eq!(state.furniture.version(), version + 1);
        let committed = state.furniture.get(&id).unwrap().position;
        assert!((committed - Vec3::new(1.0, 0.225, 1.0)).length() < 1e-3);
    }

    #[test]
    fn test_live_value_settles_and_is_dropped() {
        let mut state = AppState::default();
        let id = state.furniture.add_item(FurnitureKind::Chair, Vec3::ZERO, 0.0);
        let cam = top_camera(&state);
        let view = ViewportView { camera: &cam, rect: rect() };
        let mut c = InteractionController::new();

        let start = screen_of(&cam, Vec3::new(0.0, 0.225, 0.0));
        let end = screen_of(&cam, Vec3::new(-1.0, 0.225, -1.0));
        c.pointer_down(&mut state, view, PointerButton::Primary, start);
        c.pointer_move(&mut state, view, end);
        c.pointer_up(&mut state, view, end);

        for _ in 0..100 {
            c.frame(&state);
        }
        assert!(c.live_transform(&id).is_none());
        let item = state.furniture.get(&id).unwrap();
        assert_eq!(c.display_position(item), item.position);
    }

    #[test]
    fn test_cancel_leaves_store_untouched() {
        let mut state = AppState::default();
        let id = state.furniture.add_item(FurnitureKind::Chair, Vec3::ZERO, 0.0);
        let cam = top_camera(&state);
        let view = ViewportView { camera: &cam, rect: rect() };
        let mut c = InteractionController::new();

        let start = screen_of(&cam, Vec3::new(0.0, 0.225, 0.0));
        c.pointer_down(&mut state, view, PointerButton::Primary, start);
        c.pointer_move(&mut state, view, start + egui::vec2(60.0, 0.0));
        c.cancel(&mut state);
        assert!(!state.view.is_dragging);
        assert!(c.pointer_up(&mut state, view, start).is_none());
        assert_eq!(state.furniture.get(&id).unwrap().position, Vec3::new(0.0, 0.225, 0.0));
    }

    #[test]
    fn test_library_drop_adds_and_selects() {
        let mut state = AppState::default();
        let cam = top_camera(&state);
        let view = ViewportView { camera: &cam, rect: rect() };
        let mut c = InteractionController::new();

        c.begin_library_drag(FurnitureKind::Table);
        let pos = screen_of(&cam, Vec3::new(0.5, 0.0, -0.5));
        c.library_drag_over(view, pos);
        assert!(c.drag_drop().drop_preview().is_some());

        let id = c.pointer_up(&mut state, view, pos).unwrap();
        let item = state.furniture.get(&id).unwrap();
        assert!((item.position.x - 0.5).abs() < 1e-3);
        assert!((item.position.z + 0.5).abs() < 1e-3);
        assert!((item.position.y - 0.05).abs() < 1e-6);
        assert_eq!(state.selection.selected_furniture(), Some(&id));
        assert!(!c.drag_drop().is_dragging());
    }

    #[test]
    fn test_library_drop_keeps_preview_when_floor_is_missed() {
        let mut state = AppState::default();
        let cam = front_camera(&state);
        let view = ViewportView { camera: &cam, rect: rect() };
        let mut c = InteractionController::new();

        c.begin_library_drag(FurnitureKind::Chair);
        c.library_drag_over(view, screen_of(&cam, Vec3::new(0.5, 0.0, 0.5)));
        let before = c.drag_drop().drop_preview();
        assert!(before.is_some());

        // Above the horizon the ray never reaches the floor
        let sky = egui::pos2(400.0, 1.0);
        c.pointer_move(&mut state, view, sky);
        assert_eq!(c.drag_drop().drop_preview(), before);

        let id = c.pointer_up(&mut state, view, sky).unwrap();
        let item = state.furniture.get(&id).unwrap();
        assert!((item.position.x - 0.5).abs() < 1e-3);
        assert!((item.position.z - 0.5).abs() < 1e-3);
        assert_eq!(state.furniture.len(), 1);
    }

    #[test]
    fn test_library_drag_left_cancels_on_drop() {
        let mut state = AppState::default();
        let mut c = InteractionController::new();
        c.begin_library_drag(FurnitureKind::Lamp);
        c.library_drag_left();
        assert!(c.drop(&mut state).is_none());
        assert!(state.furniture.is_empty());
        assert!(!c.drag_drop().is_dragging());
    }

    #[test]
    fn test_hover_and_display_scale() {
        let mut state = AppState::default();
        let id = state.furniture.add_item(FurnitureKind::Wardrobe, Vec3::ZERO, 0.0);
        let cam = top_camera(&state);
        let view = ViewportView { camera: &cam, rect: rect() };
        let mut c = InteractionController::new();

        c.pointer_move(&mut state, view, screen_of(&cam, Vec3::new(0.0, 2.0, 0.0)));
        assert_eq!(c.hovered(), Some(&id));
        c.frame(&state);
        assert!((c.display_scale(&id) - 1.01).abs() < 1e-5);

        state.selection.select(id.clone());
        for _ in 0..200 {
            c.frame(&state);
        }
        assert!((c.display_scale(&id) - SELECTED_SCALE).abs() < 1e-3);
    }
}
