//! JSON command protocol for scripting the planner.
//!
//! Each command maps onto the same store and solver calls the viewport
//! makes, so scripted sessions and pointer sessions end in the same state.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use shared::{FurnitureKind, MovementAxis, RoomElementKind, ViewPreset};

use crate::harness::TestHarness;
use crate::state::DimensionsPatch;

/// A command a script can execute.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum AgentCommand {
    /// Add a catalogue item at (x, z); it always rests on the floor
    AddFurniture {
        #[serde(rename = "type")]
        kind: FurnitureKind,
        #[serde(default)]
        x: f32,
        #[serde(default)]
        z: f32,
        #[serde(default)]
        rotation: f32,
    },
    /// Remove an item by ID
    RemoveFurniture {
        id: String,
    },
    /// Move an item toward a raw world point through the axis solver
    MoveFurniture {
        id: String,
        position: [f32; 3],
    },
    /// Rotate an item by `degrees` around Y
    RotateFurniture {
        id: String,
        degrees: f32,
    },
    DuplicateFurniture {
        id: String,
    },
    SetMovementAxis {
        axis: MovementAxis,
    },
    /// Change snapping; omitted fields keep their value
    SetSnap {
        #[serde(default)]
        enabled: Option<bool>,
        #[serde(default)]
        grid_size: Option<f32>,
    },
    SetRoomDimensions {
        #[serde(default)]
        width: Option<f32>,
        #[serde(default)]
        length: Option<f32>,
        #[serde(default)]
        height: Option<f32>,
    },
    /// Select a furniture item by ID
    Select {
        id: String,
    },
    SelectRoomElement {
        element: RoomElementKind,
    },
    /// Clear selection.
    ClearSelection,
    SetView {
        preset: ViewPreset,
    },
    /// Inspect the room: dimensions, items and selection.
    Inspect,
}

/// Response from executing a command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl CommandResponse {
    fn ok() -> Self {
        Self {
            success: true,
            error: None,
            data: None,
        }
    }

    fn ok_with_data(data: serde_json::Value) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(msg.into()),
            data: None,
        }
    }
}

fn unknown(id: &str) -> CommandResponse {
    CommandResponse::err(format!("Unknown furniture id: {id}"))
}

/// Execute a single command on the harness.
pub fn execute_command(harness: &mut TestHarness, cmd: AgentCommand) -> CommandResponse {
    match cmd {
        AgentCommand::AddFurniture { kind, x, z, rotation } => {
            let id = harness
                .state
                .furniture
                .add_item(kind, Vec3::new(x, 0.0, z), rotation.to_radians());
            CommandResponse::ok_with_data(serde_json::json!({ "id": id }))
        }

        AgentCommand::RemoveFurniture { id } => {
            if harness.remove(&id) {
                CommandResponse::ok()
            } else {
                unknown(&id)
            }
        }

        AgentCommand::MoveFurniture { id, position } => {
            match harness.move_furniture(&id, Vec3::from_array(position)) {
                Some(p) => CommandResponse::ok_with_data(serde_json::json!({ "position": p.to_array() })),
                None => unknown(&id),
            }
        }

        AgentCommand::RotateFurniture { id, degrees } => {
            if harness.state.furniture.rotate(&id, degrees.to_radians()) {
                let rotation = harness.state.furniture.get(&id).map(|f| f.rotation);
                CommandResponse::ok_with_data(serde_json::json!({ "rotation": rotation }))
            } else {
                unknown(&id)
            }
        }

        AgentCommand::DuplicateFurniture { id } => match harness.state.furniture.duplicate(&id) {
            Some(copy) => CommandResponse::ok_with_data(serde_json::json!({ "id": copy })),
            None => unknown(&id),
        },

        AgentCommand::SetMovementAxis { axis } => {
            harness.state.view.set_movement_axis(axis);
            CommandResponse::ok()
        }

        AgentCommand::SetSnap { enabled, grid_size } => {
            let snap = &mut harness.state.settings.snap;
            if let Some(size) = grid_size {
                if !(size.is_finite() && size > 0.0) {
                    return CommandResponse::err(format!("Grid size must be positive, got {size}"));
                }
                snap.grid_size = size;
            }
            if let Some(enabled) = enabled {
                snap.enabled = enabled;
            }
            CommandResponse::ok_with_data(serde_json::json!({
                "enabled": snap.enabled,
                "grid_size": snap.grid_size,
            }))
        }

        AgentCommand::SetRoomDimensions { width, length, height } => {
            match harness.set_room_dimensions(DimensionsPatch { width, length, height }) {
                Ok(()) => CommandResponse::ok(),
                Err(e) => CommandResponse::err(e),
            }
        }

        AgentCommand::Select { id } => {
            if harness.select(&id) {
                CommandResponse::ok_with_data(serde_json::json!({ "selected": id }))
            } else {
                unknown(&id)
            }
        }

        AgentCommand::SelectRoomElement { element } => {
            harness.select_room_element(element);
            CommandResponse::ok()
        }

        AgentCommand::ClearSelection => {
            harness.clear_selection();
            CommandResponse::ok()
        }

        AgentCommand::SetView { preset } => {
            harness.set_view(preset);
            CommandResponse::ok()
        }

        AgentCommand::Inspect => {
            let state = &harness.state;
            let room = state.room.dimensions();
            let furniture: Vec<serde_json::Value> = state
                .furniture
                .list()
                .iter()
                .map(|f| {
                    serde_json::json!({
                        "id": f.id,
                        "type": f.kind,
                        "position": f.position.to_array(),
                        "rotation": f.rotation,
                        "visible": f.visible,
                    })
                })
                .collect();
            CommandResponse::ok_with_data(serde_json::json!({
                "room": room,
                "furniture_count": furniture.len(),
                "furniture": furniture,
                "selected_furniture": state.selection.selected_furniture(),
                "selected_room_element": state.selection.selected_room_element(),
                "movement_axis": state.view.movement_axis,
                "snap_enabled": state.settings.snap.enabled,
                "view": state.view.current_view,
            }))
        }
    }
}

/// Parse and execute a single JSON command string.
pub fn execute_json(harness: &mut TestHarness, json: &str) -> Result<CommandResponse, String> {
    let cmd: AgentCommand =
        serde_json::from_str(json).map_err(|e| format!("Invalid command JSON: {e}"))?;
    Ok(execute_command(harness, cmd))
}

/// Parse and execute multiple JSON commands (array).
pub fn execute_json_batch(
    harness: &mut TestHarness,
    json: &str,
) -> Result<Vec<CommandResponse>, String> {
    let cmds: Vec<AgentCommand> =
        serde_json::from_str(json).map_err(|e| format!("Invalid commands JSON: {e}"))?;
    Ok(cmds
        .into_iter()
        .map(|cmd| execute_command(harness, cmd))
        .collect())
}
