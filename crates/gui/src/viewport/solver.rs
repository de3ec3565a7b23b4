//! Axis-constrained furniture placement.
//!
//! Turns a raw world-space point into the final position of an item:
//! project onto the plane of the active [`MovementAxis`], then resolve each
//! free coordinate against the room walls with edge, centre and grid snaps.

use glam::Vec3;
use shared::{MovementAxis, RoomDimensions};

use super::picking::{ray_plane_point, Plane, Ray};

/// Distance within which an edge or centre snap engages
pub const SNAP_THRESHOLD: f32 = 0.25;
/// Gap kept between an item and the walls when clamping
pub const BOUNDARY_MARGIN: f32 = 0.05;
pub const DEFAULT_GRID_SIZE: f32 = 0.5;

/// Snapping parameters for one solve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapConfig {
    pub enabled: bool,
    pub grid_size: f32,
    pub threshold: f32,
    pub margin: f32,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            grid_size: DEFAULT_GRID_SIZE,
            threshold: SNAP_THRESHOLD,
            margin: BOUNDARY_MARGIN,
        }
    }
}

impl SnapConfig {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}

/// Wall coordinates bounding one axis of the room
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSpan {
    pub min_wall: f32,
    pub max_wall: f32,
}

impl AxisSpan {
    pub fn x(room: &RoomDimensions) -> Self {
        Self {
            min_wall: -room.half_width(),
            max_wall: room.half_width(),
        }
    }

    pub fn y(room: &RoomDimensions) -> Self {
        Self {
            min_wall: 0.0,
            max_wall: room.height,
        }
    }

    pub fn z(room: &RoomDimensions) -> Self {
        Self {
            min_wall: -room.half_length(),
            max_wall: room.half_length(),
        }
    }
}

/// Order a pair of bounds; an inverted pair collapses to its midpoint
fn ordered(lo: f32, hi: f32) -> (f32, f32) {
    if lo <= hi {
        (lo, hi)
    } else {
        let mid = (lo + hi) * 0.5;
        (mid, mid)
    }
}

fn snap_to_grid(v: f32, grid_size: f32) -> f32 {
    if grid_size > 0.0 && grid_size.is_finite() {
        (v / grid_size).round() * grid_size
    } else {
        v
    }
}

/// Resolve a single coordinate of an item centre.
///
/// Snap priority: near edge flush, far edge flush, centre on near wall,
/// centre on far wall, then grid. Edge snaps return the flush value exactly;
/// everything else is clamped to the margin-inset bounds.
pub fn resolve_axis(v: f32, half_extent: f32, span: AxisSpan, snap: &SnapConfig) -> f32 {
    let half = half_extent.abs();
    let (lo, hi) = ordered(
        span.min_wall + half + snap.margin,
        span.max_wall - half - snap.margin,
    );

    if !snap.enabled {
        return v.clamp(lo, hi);
    }

    let edge_near = span.min_wall + half;
    let edge_far = span.max_wall - half;

    if edge_near <= edge_far {
        if (v - edge_near).abs() <= snap.threshold {
            return edge_near;
        }
        if (v - edge_far).abs() <= snap.threshold {
            return edge_far;
        }
    }
    if (v - span.min_wall).abs() <= snap.threshold {
        return span.min_wall.clamp(lo, hi);
    }
    if (v - span.max_wall).abs() <= snap.threshold {
        return span.max_wall.clamp(lo, hi);
    }

    snap_to_grid(v, snap.grid_size).clamp(lo, hi)
}

/// Resolve a raw world point into the committed position of an item.
///
/// Only the coordinates freed by `axis` are taken from `raw`; the others
/// keep their `current` value. A non-finite raw point leaves the item where
/// it is.
pub fn solve_position(
    axis: MovementAxis,
    raw: Vec3,
    current: Vec3,
    item_size: Vec3,
    room: &RoomDimensions,
    snap: &SnapConfig,
) -> Vec3 {
    if !raw.is_finite() {
        return current;
    }

    let half = item_size.abs() * 0.5;
    let mut out = current;

    match axis {
        MovementAxis::Xz => {
            out.x = resolve_axis(raw.x, half.x, AxisSpan::x(room), snap);
            out.z = resolve_axis(raw.z, half.z, AxisSpan::z(room), snap);
        }
        MovementAxis::X => {
            out.x = resolve_axis(raw.x, half.x, AxisSpan::x(room), snap);
        }
        MovementAxis::Z => {
            out.z = resolve_axis(raw.z, half.z, AxisSpan::z(room), snap);
        }
        MovementAxis::Y => {
            out.y = resolve_axis(raw.y, half.y, AxisSpan::y(room), snap);
        }
    }

    out
}

/// Plane a drag ray is projected onto for the given constraint.
///
/// `Xz` uses the horizontal plane through the item, `X` the vertical plane
/// facing Z, `Z` the vertical plane facing X, and `Y` a vertical plane
/// through the item turned toward the camera. Returns None when the camera
/// looks straight down on the item under the `Y` constraint.
pub fn constraint_plane(axis: MovementAxis, current: Vec3, eye: Vec3) -> Option<Plane> {
    match axis {
        MovementAxis::Xz => Some(Plane::new(current, Vec3::Y)),
        MovementAxis::X => Some(Plane::new(current, Vec3::Z)),
        MovementAxis::Z => Some(Plane::new(current, Vec3::X)),
        MovementAxis::Y => {
            let to_camera = eye - current;
            let horizontal = Vec3::new(to_camera.x, 0.0, to_camera.z);
            if horizontal.length_squared() < 1e-8 {
                return None;
            }
            Some(Plane::new(current, horizontal))
        }
    }
}

/// Intersect a ray with the constraint plane of `axis`
pub fn project_onto_constraint(
    axis: MovementAxis,
    ray: &Ray,
    current: Vec3,
    eye: Vec3,
) -> Option<Vec3> {
    let plane = constraint_plane(axis, current, eye)?;
    ray_plane_point(ray, &plane)
}
