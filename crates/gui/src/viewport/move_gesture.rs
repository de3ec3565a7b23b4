//! Moving an existing furniture item with the pointer.
//!
//! A gesture starts on a press over an item but stays passive until the
//! pointer travels past the drag threshold, so a plain click only selects.
//! Once active, every pointer move is projected onto the constraint plane
//! and solved into a target position.

use glam::Vec3;
use shared::{FurnitureId, MovementAxis, RoomDimensions};

use super::picking::Ray;
use super::solver::{project_onto_constraint, solve_position, SnapConfig};

/// Per-move inputs that can change while the gesture runs
pub struct MoveContext<'a> {
    pub room: &'a RoomDimensions,
    pub snap: &'a SnapConfig,
    /// Camera eye, used to orient the vertical plane of the Y constraint
    pub eye: Vec3,
    pub threshold_px: f32,
}

#[derive(Debug, Clone)]
pub struct MoveGesture {
    pub item_id: FurnitureId,
    pub start_pointer: egui::Pos2,
    pub start_position: Vec3,
    /// Rotated bounding size of the item
    pub item_size: Vec3,
    /// Constraint captured when the gesture started
    pub axis: MovementAxis,
    /// Item position minus the first constrained hit, kept for the whole
    /// gesture so the item does not jump under the cursor
    grab_offset: Vec3,
    active: bool,
    target: Vec3,
}

impl MoveGesture {
    pub fn begin(
        item_id: FurnitureId,
        pointer: egui::Pos2,
        press_ray: &Ray,
        eye: Vec3,
        position: Vec3,
        item_size: Vec3,
        axis: MovementAxis,
    ) -> Self {
        let grab_offset = project_onto_constraint(axis, press_ray, position, eye)
            .map(|hit| position - hit)
            .unwrap_or(Vec3::ZERO);
        Self {
            item_id,
            start_pointer: pointer,
            start_position: position,
            item_size,
            axis,
            grab_offset,
            active: false,
            target: position,
        }
    }

    /// True once the pointer has moved past the threshold
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Last solved position
    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn exceeds_threshold(&self, pointer: egui::Pos2, threshold_px: f32) -> bool {
        let d = pointer - self.start_pointer;
        d.x.abs() > threshold_px || d.y.abs() > threshold_px
    }

    /// Feed a pointer move. Returns the new target, or None while the
    /// gesture is below threshold or the ray misses the constraint plane.
    pub fn update(&mut self, pointer: egui::Pos2, ray: &Ray, ctx: &MoveContext) -> Option<Vec3> {
        if !self.active {
            if !self.exceeds_threshold(pointer, ctx.threshold_px) {
                return None;
            }
            self.active = true;
            tracing::debug!("Move started: {} along {}", self.item_id, self.axis.label());
        }

        let hit = project_onto_constraint(self.axis, ray, self.start_position, ctx.eye)?;
        self.target = solve_position(
            self.axis,
            hit + self.grab_offset,
            self.start_position,
            self.item_size,
            ctx.room,
            ctx.snap,
        );
        Some(self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room() -> RoomDimensions {
        RoomDimensions::default()
    }

    fn down_at(x: f32, z: f32) -> Ray {
        Ray::new(Vec3::new(x, 10.0, z), Vec3::NEG_Y)
    }

    fn chair_gesture(axis: MovementAxis) -> MoveGesture {
        let position = Vec3::new(0.0, 0.225, 0.0);
        MoveGesture::begin(
            "c1".into(),
            egui::pos2(100.0, 100.0),
            &down_at(0.1, 0.0),
            Vec3::new(0.0, 10.0, 0.0),
            position,
            Vec3::new(0.5, 0.45, 0.5),
            axis,
        )
    }

    #[test]
    fn test_below_threshold_does_nothing() {
        let snap = SnapConfig::default();
        let ctx = MoveContext {
            room: &room(),
            snap: &snap,
            eye: Vec3::new(0.0, 10.0, 0.0),
            threshold_px: 5.0,
        };
        let mut g = chair_gesture(MovementAxis::Xz);
        assert!(g.update(egui::pos2(104.0, 96.0), &down_at(1.0, 1.0), &ctx).is_none());
        assert!(!g.is_active());
        assert_eq!(g.target(), g.start_position);

        assert!(g.update(egui::pos2(106.0, 100.0), &down_at(1.1, 1.0), &ctx).is_some());
        assert!(g.is_active());
    }

    #[test]
    fn test_grab_offset_is_kept() {
        let snap = SnapConfig::disabled();
        let ctx = MoveContext {
            room: &room(),
            snap: &snap,
            eye: Vec3::new(0.0, 10.0, 0.0),
            threshold_px: 5.0,
        };
        // Grabbed 0.1 right of the centre: moving the pointer to x=1.1
        // puts the centre at x=1.0
        let mut g = chair_gesture(MovementAxis::Xz);
        let target = g.update(egui::pos2(150.0, 100.0), &down_at(1.1, 0.5), &ctx).unwrap();
        assert!((target.x - 1.0).abs() < 1e-5);
        assert!((target.z - 0.5).abs() < 1e-5);
        assert_eq!(target.y, 0.225);
    }

    #[test]
    fn test_miss_keeps_previous_target() {
        let snap = SnapConfig::default();
        let ctx = MoveContext {
            room: &room(),
            snap: &snap,
            eye: Vec3::new(0.0, 10.0, 0.0),
            threshold_px: 5.0,
        };
        let mut g = chair_gesture(MovementAxis::Xz);
        let first = g.update(egui::pos2(150.0, 100.0), &down_at(1.1, 1.0), &ctx).unwrap();
        let skyward = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::Y);
        assert!(g.update(egui::pos2(160.0, 100.0), &skyward, &ctx).is_none());
        assert_eq!(g.target(), first);
    }

    #[test]
    fn test_axis_captured_at_start() {
        let snap = SnapConfig::disabled();
        let ctx = MoveContext {
            room: &room(),
            snap: &snap,
            eye: Vec3::new(0.0, 1.0, 10.0),
            threshold_px: 5.0,
        };
        let mut g = chair_gesture(MovementAxis::X);
        // Ray from the front toward the X plane through z = 0
        let ray = Ray::new(Vec3::new(1.0, 1.0, 10.0), Vec3::NEG_Z);
        let target = g.update(egui::pos2(150.0, 100.0), &ray, &ctx).unwrap();
        assert_eq!(g.axis, MovementAxis::X);
        assert_eq!(target.z, 0.0);
        assert_eq!(target.y, 0.225);
        assert!(target.x > 0.5);
    }
}
