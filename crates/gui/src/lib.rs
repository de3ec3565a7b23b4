// Library crate: exposes testable modules for integration tests and the scripting interface.
// GUI-specific modules (app, ui, viewport painting) remain in the binary crate.

pub mod command;
pub mod fixtures;
pub mod harness;
pub mod state;

/// Interaction core of the viewport: picking, solving, gestures and camera.
/// Painting and egui widgets stay in the binary crate.
pub mod viewport {
    pub mod camera;
    pub mod controller;
    pub mod drag_drop;
    pub mod move_gesture;
    pub mod picking;
    pub mod room_scene;
    pub mod scene_graph;
    pub mod solver;
    pub mod view_command;
}
