use glam::{Mat4, Vec3, Vec4};
use shared::{RoomDimensions, ViewPreset};

use super::picking::Ray;

/// Pitch limit that keeps the view matrix away from the up-vector singularity
const PITCH_LIMIT: f32 = 1.5;
const MIN_DISTANCE: f32 = 1.0;

/// Arc-ball camera for 3D viewport
pub struct ArcBallCamera {
    /// Horizontal rotation angle (radians)
    pub yaw: f32,
    /// Vertical rotation angle (radians)
    pub pitch: f32,
    /// Distance from target
    pub distance: f32,
    /// Camera target point
    pub target: Vec3,
    /// Vertical field of view (radians)
    pub fov: f32,
    /// Upper zoom bound, derived from the room width
    pub max_distance: f32,
}

impl Default for ArcBallCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl ArcBallCamera {
    pub fn new() -> Self {
        Self {
            yaw: 0.6,
            pitch: 0.4,
            distance: 6.0,
            target: Vec3::ZERO,
            fov: 45.0_f32.to_radians(),
            max_distance: 100.0,
        }
    }

    /// Initial framing: from (1.5w, 1.5h, 1.5l) toward the origin
    pub fn for_room(room: &RoomDimensions) -> Self {
        let mut camera = Self::new();
        camera.max_distance = (room.width * 3.0).max(MIN_DISTANCE);
        camera.look_from(
            Vec3::new(room.width * 1.5, room.height * 1.5, room.length * 1.5),
            Vec3::ZERO,
        );
        camera
    }

    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw += dx.to_radians();
        self.pitch = (self.pitch + dy.to_radians()).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance * (1.0 - delta)).clamp(MIN_DISTANCE, self.max_distance);
    }

    pub fn pan(&mut self, dx: f32, dy: f32) {
        let right = self.right_vector();
        let up = self.up_vector();
        let offset = right * dx + up * dy;
        self.target += offset;
    }

    /// Place the eye at `eye` looking at `target`.
    /// Pitch is limited and distance clamped to the zoom range.
    pub fn look_from(&mut self, eye: Vec3, target: Vec3) {
        let offset = eye - target;
        let distance = offset.length();
        if !distance.is_finite() || distance < 1e-6 {
            return;
        }
        self.target = target;
        self.distance = distance.clamp(MIN_DISTANCE, self.max_distance);
        self.pitch = (offset.y / distance).clamp(-1.0, 1.0).asin().clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.yaw = offset.x.atan2(offset.z);
    }

    /// Jump to one of the preset views of the room
    pub fn apply_preset(&mut self, preset: ViewPreset, room: &RoomDimensions) {
        self.max_distance = (room.width * 3.0).max(MIN_DISTANCE);
        let (w, h, l) = (room.width, room.height, room.length);
        let target = Vec3::new(0.0, h * 0.5, 0.0);
        let eye = match preset {
            ViewPreset::Top => Vec3::new(0.0, h * 2.0, 0.0),
            ViewPreset::Front => Vec3::new(0.0, h * 0.5, l * 1.5),
            ViewPreset::Side => Vec3::new(w * 1.5, h * 0.5, 0.0),
            ViewPreset::Corner => Vec3::new(w, h, l),
        };
        self.look_from(eye, target);
    }

    /// Camera position in world space
    pub fn eye_position(&self) -> Vec3 {
        let cy = self.yaw.cos();
        let sy = self.yaw.sin();
        let cp = self.pitch.cos();
        let sp = self.pitch.sin();

        self.target
            + Vec3::new(
                self.distance * cp * sy,
                self.distance * sp,
                self.distance * cp * cy,
            )
    }

    /// View matrix (world -> camera)
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye_position(), self.target, Vec3::Y)
    }

    /// Projection matrix (camera -> clip)
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov, aspect, 0.1, 200.0)
    }

    /// Combined view-projection matrix
    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }

    fn right_vector(&self) -> Vec3 {
        let fwd = (self.target - self.eye_position()).normalize_or_zero();
        fwd.cross(Vec3::Y).normalize_or_zero()
    }

    fn up_vector(&self) -> Vec3 {
        let fwd = (self.target - self.eye_position()).normalize_or_zero();
        let right = self.right_vector();
        right.cross(fwd).normalize_or_zero()
    }

    /// Project a 3D point to 2D screen coords
    pub fn project(&self, point: Vec3, rect: egui::Rect) -> Option<egui::Pos2> {
        let aspect = rect.width() / rect.height();
        let vp = self.view_projection(aspect);
        let p = vp * point.extend(1.0);
        if p.w <= 0.0 {
            return None;
        }
        let ndc = p.truncate() / p.w;
        let screen_x = rect.center().x + ndc.x * rect.width() * 0.5;
        let screen_y = rect.center().y - ndc.y * rect.height() * 0.5;
        Some(egui::pos2(screen_x, screen_y))
    }

    /// Cast a ray from a screen position into the 3D scene
    pub fn screen_ray(&self, screen_pos: egui::Pos2, rect: egui::Rect) -> Ray {
        let aspect = rect.width() / rect.height();

        // Screen → NDC
        let ndc_x = (screen_pos.x - rect.center().x) / (rect.width() * 0.5);
        let ndc_y = -(screen_pos.y - rect.center().y) / (rect.height() * 0.5);

        let vp_inv = self.view_projection(aspect).inverse();

        let near_world = vp_inv * Vec4::new(ndc_x, ndc_y, -1.0, 1.0);
        let far_world = vp_inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);

        let near = near_world.truncate() / near_world.w;
        let far = far_world.truncate() / far_world.w;

        Ray::new(self.eye_position(), far - near)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(800.0, 600.0))
    }

    fn approx_v(a: Vec3, b: Vec3, eps: f32) -> bool {
        (a - b).length() < eps
    }

    #[test]
    fn test_initial_room_framing() {
        let room = RoomDimensions::default();
        let cam = ArcBallCamera::for_room(&room);
        assert_eq!(cam.target, Vec3::ZERO);
        assert!(approx_v(cam.eye_position(), Vec3::new(6.0, 3.75, 7.5), 1e-3));
    }

    #[test]
    fn test_front_and_side_presets() {
        let room = RoomDimensions::default();
        let mut cam = ArcBallCamera::for_room(&room);

        cam.apply_preset(ViewPreset::Front, &room);
        assert_eq!(cam.target, Vec3::new(0.0, 1.25, 0.0));
        assert!(approx_v(cam.eye_position(), Vec3::new(0.0, 1.25, 7.5), 1e-3));

        cam.apply_preset(ViewPreset::Side, &room);
        assert!(approx_v(cam.eye_position(), Vec3::new(6.0, 1.25, 0.0), 1e-3));
    }

    #[test]
    fn test_top_preset_looks_down() {
        let room = RoomDimensions::default();
        let mut cam = ArcBallCamera::for_room(&room);
        cam.apply_preset(ViewPreset::Top, &room);
        assert!((cam.pitch - PITCH_LIMIT).abs() < 1e-6);
        assert!((cam.distance - 3.75).abs() < 1e-4);
        assert!(cam.eye_position().y > 4.9);
    }

    #[test]
    fn test_distance_clamped_to_room() {
        let room = RoomDimensions::new(1.0, 10.0, 2.5);
        let mut cam = ArcBallCamera::for_room(&room);
        cam.apply_preset(ViewPreset::Front, &room);
        assert!(cam.distance <= 3.0 + 1e-6);
        cam.zoom(-10.0);
        assert!(cam.distance <= 3.0 + 1e-6);
        cam.zoom(0.99);
        assert!(cam.distance >= MIN_DISTANCE);
    }

    #[test]
    fn test_center_ray_hits_target() {
        let room = RoomDimensions::default();
        let cam = ArcBallCamera::for_room(&room);
        let ray = cam.screen_ray(rect().center(), rect());
        let to_target = (cam.target - ray.origin).normalize();
        assert!(ray.direction.dot(to_target) > 0.999);
    }

    #[test]
    fn test_project_then_ray_passes_through_point() {
        let room = RoomDimensions::default();
        let cam = ArcBallCamera::for_room(&room);
        let point = Vec3::new(1.0, 0.3, -0.5);
        let screen = cam.project(point, rect()).unwrap();
        let ray = cam.screen_ray(screen, rect());
        let t = (point - ray.origin).dot(ray.direction);
        assert!(approx_v(ray.point_at(t), point, 1e-2));
    }

    #[test]
    fn test_point_behind_camera_not_projected() {
        let room = RoomDimensions::default();
        let cam = ArcBallCamera::for_room(&room);
        let behind = cam.eye_position() * 2.0;
        assert!(cam.project(behind, rect()).is_none());
    }
}
