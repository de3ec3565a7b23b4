//! Integration tests for the AgentCommand JSON protocol.
//!
//! Tests the full command pipeline: JSON string -> parse -> execute -> response.

use room_planner_lib::command::{execute_json, execute_json_batch};
use room_planner_lib::harness::TestHarness;
use shared::{MovementAxis, RoomElementKind, ViewPreset};

fn add(h: &mut TestHarness, json: &str) -> String {
    let resp = execute_json(h, json).unwrap();
    assert!(resp.success, "{:?}", resp.error);
    resp.data.unwrap()["id"].as_str().unwrap().to_string()
}

fn position(h: &TestHarness, id: &str) -> [f32; 3] {
    h.position_of(id).unwrap().to_array()
}

fn close(a: [f32; 3], b: [f32; 3]) -> bool {
    a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-4)
}

#[test]
fn test_command_add_rests_on_floor() {
    let mut h = TestHarness::new();
    let id = add(
        &mut h,
        r#"{"command": "add_furniture", "type": "wardrobe", "x": -1.0, "z": 2.0, "rotation": 90}"#,
    );
    assert!(close(position(&h, &id), [-1.0, 1.0, 2.0]));
    let rot = h.state.furniture.get(&id).unwrap().rotation;
    assert!((rot - std::f32::consts::FRAC_PI_2).abs() < 1e-5);
}

#[test]
fn test_command_move_snaps_to_grid() {
    let mut h = TestHarness::new();
    let id = add(&mut h, r#"{"command": "add_furniture", "type": "chair"}"#);

    let json = format!(r#"{{"command": "move_furniture", "id": "{id}", "position": [1.2, 3.0, 0.9]}}"#);
    let resp = execute_json(&mut h, &json).unwrap();
    assert!(resp.success);
    let data = resp.data.unwrap();
    let p = data["position"].as_array().unwrap();
    assert!((p[0].as_f64().unwrap() - 1.0).abs() < 1e-4);
    assert!((p[1].as_f64().unwrap() - 0.225).abs() < 1e-4);
    assert!((p[2].as_f64().unwrap() - 1.0).abs() < 1e-4);
    assert!(close(position(&h, &id), [1.0, 0.225, 1.0]));
}

#[test]
fn test_command_move_on_single_axis() {
    let mut h = TestHarness::new();
    let id = add(&mut h, r#"{"command": "add_furniture", "type": "chair", "x": 0.5, "z": -0.5}"#);

    execute_json(&mut h, r#"{"command": "set_movement_axis", "axis": "z"}"#).unwrap();
    assert_eq!(h.state.view.movement_axis, MovementAxis::Z);

    let json = format!(r#"{{"command": "move_furniture", "id": "{id}", "position": [-1.7, 2.0, 1.4]}}"#);
    execute_json(&mut h, &json).unwrap();
    assert!(close(position(&h, &id), [0.5, 0.225, 1.5]));
}

#[test]
fn test_command_move_without_snap_only_clamps() {
    let mut h = TestHarness::new();
    let id = add(&mut h, r#"{"command": "add_furniture", "type": "table"}"#);
    let resp = execute_json(&mut h, r#"{"command": "set_snap", "enabled": false}"#).unwrap();
    assert_eq!(resp.data.unwrap()["enabled"], false);

    let json = format!(r#"{{"command": "move_furniture", "id": "{id}", "position": [0.37, 0.0, 9.0]}}"#);
    execute_json(&mut h, &json).unwrap();
    // Table is 1.2 × 0.8; back wall at z = 2.5, margin 0.05
    assert!(close(position(&h, &id), [0.37, 0.05, 2.05]));
}

#[test]
fn test_command_rotate_and_duplicate() {
    let mut h = TestHarness::new();
    let id = add(&mut h, r#"{"command": "add_furniture", "type": "sofa"}"#);

    let json = format!(r#"{{"command": "rotate_furniture", "id": "{id}", "degrees": -90}}"#);
    let resp = execute_json(&mut h, &json).unwrap();
    let rotation = resp.data.unwrap()["rotation"].as_f64().unwrap() as f32;
    assert!((rotation - 3.0 * std::f32::consts::FRAC_PI_2).abs() < 1e-4);

    let json = format!(r#"{{"command": "duplicate_furniture", "id": "{id}"}}"#);
    let resp = execute_json(&mut h, &json).unwrap();
    let copy = resp.data.unwrap()["id"].as_str().unwrap().to_string();
    assert_ne!(copy, id);
    assert_eq!(h.furniture_count(), 2);
    assert!(close(position(&h, &copy), [0.5, 0.3, 0.5]));
}

#[test]
fn test_command_selection_cycle() {
    let mut h = TestHarness::new();
    let id = add(&mut h, r#"{"command": "add_furniture", "type": "bed"}"#);

    let json = format!(r#"{{"command": "select", "id": "{id}"}}"#);
    assert!(execute_json(&mut h, &json).unwrap().success);
    assert_eq!(h.selected_furniture(), Some(&id));

    execute_json(&mut h, r#"{"command": "select_room_element", "element": "ceiling"}"#).unwrap();
    assert!(h.selected_furniture().is_none());
    assert_eq!(h.selected_room_element(), Some(RoomElementKind::Ceiling));

    execute_json(&mut h, r#"{"command": "clear_selection"}"#).unwrap();
    assert!(h.state.selection.is_empty());

    let resp = execute_json(&mut h, r#"{"command": "select", "id": "missing"}"#).unwrap();
    assert!(!resp.success);
}

#[test]
fn test_command_remove_clears_selection() {
    let mut h = TestHarness::new();
    let id = add(&mut h, r#"{"command": "add_furniture", "type": "lamp"}"#);
    h.select(&id);

    let json = format!(r#"{{"command": "remove_furniture", "id": "{id}"}}"#);
    assert!(execute_json(&mut h, &json).unwrap().success);
    assert_eq!(h.furniture_count(), 0);
    assert!(h.selected_furniture().is_none());

    let resp = execute_json(&mut h, &json).unwrap();
    assert!(!resp.success);
}

#[test]
fn test_command_room_dimensions() {
    let mut h = TestHarness::new();
    let resp =
        execute_json(&mut h, r#"{"command": "set_room_dimensions", "width": 6.0, "height": 3.0}"#)
            .unwrap();
    assert!(resp.success);
    let room = h.state.room.dimensions();
    assert_eq!((room.width, room.length, room.height), (6.0, 5.0, 3.0));

    let resp = execute_json(&mut h, r#"{"command": "set_room_dimensions", "length": -2.0}"#).unwrap();
    assert!(!resp.success);
    assert!(resp.error.is_some());
    assert_eq!(h.state.room.dimensions().length, 5.0);
}

#[test]
fn test_command_set_view() {
    let mut h = TestHarness::new();
    let resp = execute_json(&mut h, r#"{"command": "set_view", "preset": "side"}"#).unwrap();
    assert!(resp.success);
    assert_eq!(h.state.view.current_view, ViewPreset::Side);
}

#[test]
fn test_command_inspect_reports_state() {
    let mut h = TestHarness::new();
    let id = add(&mut h, r#"{"command": "add_furniture", "type": "chair", "x": 1.0}"#);
    h.select(&id);
    execute_json(&mut h, r#"{"command": "set_movement_axis", "axis": "y"}"#).unwrap();

    let data = execute_json(&mut h, r#"{"command": "inspect"}"#)
        .unwrap()
        .data
        .unwrap();
    assert_eq!(data["furniture_count"], 1);
    assert_eq!(data["furniture"][0]["type"], "chair");
    assert_eq!(data["furniture"][0]["visible"], true);
    assert_eq!(data["selected_furniture"], id.as_str());
    assert!(data["selected_room_element"].is_null());
    assert_eq!(data["movement_axis"], "y");
    assert_eq!(data["snap_enabled"], true);
    assert_eq!(data["view"], "corner");
    assert_eq!(data["room"]["length"], 5.0);
}

#[test]
fn test_command_batch() {
    let mut h = TestHarness::new();
    let json = r#"[
        {"command": "add_furniture", "type": "table", "x": -1.0, "z": -1.0},
        {"command": "add_furniture", "type": "chair", "x": -1.0, "z": -0.2},
        {"command": "set_snap", "grid_size": 0.25},
        {"command": "remove_furniture", "id": "nope"},
        {"command": "inspect"}
    ]"#;

    let responses = execute_json_batch(&mut h, json).unwrap();
    assert_eq!(responses.len(), 5);
    assert!(responses[..3].iter().all(|r| r.success));
    assert!(!responses[3].success);
    assert_eq!(responses[4].data.as_ref().unwrap()["furniture_count"], 2);
    assert_eq!(h.state.settings.snap.grid_size, 0.25);
}

#[test]
fn test_command_invalid_json() {
    let mut h = TestHarness::new();
    assert!(execute_json(&mut h, "{").is_err());
    assert!(execute_json(&mut h, r#"{"command": "add_furniture", "type": "piano"}"#).is_err());

    let err = execute_json_batch(&mut h, r#"{"command": "inspect"}"#).unwrap_err();
    assert!(err.contains("Invalid commands JSON"));
    assert_eq!(h.furniture_count(), 0);
}
