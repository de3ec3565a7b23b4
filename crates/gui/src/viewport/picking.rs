use glam::Vec3;
use shared::{FurnitureId, RoomElementKind, SceneTag};

use super::scene_graph::{RayHit, SceneGraph};

/// A ray in world space
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point at distance `t` along the ray
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Infinite plane given by a point on it and its normal
#[derive(Clone, Copy, Debug)]
pub struct Plane {
    pub point: Vec3,
    pub normal: Vec3,
}

impl Plane {
    pub fn new(point: Vec3, normal: Vec3) -> Self {
        Self {
            point,
            normal: normal.normalize_or_zero(),
        }
    }

    /// Horizontal plane at height `y`
    pub fn horizontal(y: f32) -> Self {
        Self::new(Vec3::new(0.0, y, 0.0), Vec3::Y)
    }
}

/// Axis-aligned bounding box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size.abs() * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Center of the bounding box
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

/// Ray-AABB intersection using the slab method.
/// Returns the distance along the ray to the nearest hit, or None.
pub fn ray_aabb(ray: &Ray, aabb: &Aabb) -> Option<f32> {
    let inv_dir = Vec3::new(
        1.0 / ray.direction.x,
        1.0 / ray.direction.y,
        1.0 / ray.direction.z,
    );

    let t1 = (aabb.min.x - ray.origin.x) * inv_dir.x;
    let t2 = (aabb.max.x - ray.origin.x) * inv_dir.x;
    let t3 = (aabb.min.y - ray.origin.y) * inv_dir.y;
    let t4 = (aabb.max.y - ray.origin.y) * inv_dir.y;
    let t5 = (aabb.min.z - ray.origin.z) * inv_dir.z;
    let t6 = (aabb.max.z - ray.origin.z) * inv_dir.z;

    let tmin = t1.min(t2).max(t3.min(t4)).max(t5.min(t6));
    let tmax = t1.max(t2).min(t3.max(t4)).min(t5.max(t6));

    if tmax.is_nan() || tmin.is_nan() || tmax < 0.0 || tmin > tmax {
        return None;
    }

    Some(if tmin < 0.0 { tmax } else { tmin })
}

/// Ray-plane intersection.
/// Returns the distance along the ray, or None when the ray is parallel to
/// the plane or the plane lies behind the ray origin.
pub fn ray_plane(ray: &Ray, plane: &Plane) -> Option<f32> {
    const EPSILON: f32 = 1e-6;

    let denom = plane.normal.dot(ray.direction);
    if denom.abs() < EPSILON {
        return None;
    }

    let t = plane.normal.dot(plane.point - ray.origin) / denom;
    if t < 0.0 || !t.is_finite() {
        return None;
    }

    Some(t)
}

/// Point where the ray meets the plane, if any
pub fn ray_plane_point(ray: &Ray, plane: &Plane) -> Option<Vec3> {
    ray_plane(ray, plane).map(|t| ray.point_at(t))
}

// ── Selection resolution ─────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct FurnitureHit {
    pub furniture_id: FurnitureId,
    pub distance: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RoomElementHit {
    pub element: RoomElementKind,
    pub distance: f32,
}

/// Hits split by semantic kind, each bucket sorted nearest first
#[derive(Clone, Debug, Default)]
pub struct PartitionedHits {
    pub furniture: Vec<FurnitureHit>,
    pub room_elements: Vec<RoomElementHit>,
}

/// What a pointer ray resolved to. At most one field is set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PickResult {
    pub furniture_id: Option<FurnitureId>,
    pub room_element: Option<RoomElementKind>,
}

impl PickResult {
    pub fn is_empty(&self) -> bool {
        self.furniture_id.is_none() && self.room_element.is_none()
    }
}

/// Partition raw ray hits by walking each hit node up to its nearest tag.
/// Hits whose ancestry carries no tag are non-interactive and dropped.
pub fn extract_hits(graph: &SceneGraph, hits: &[RayHit]) -> PartitionedHits {
    let mut out = PartitionedHits::default();

    for hit in hits {
        match graph.find_tag(hit.node) {
            Some(SceneTag::Furniture { furniture_id }) => out.furniture.push(FurnitureHit {
                furniture_id: furniture_id.clone(),
                distance: hit.distance,
            }),
            Some(SceneTag::RoomElement { element }) => out.room_elements.push(RoomElementHit {
                element: *element,
                distance: hit.distance,
            }),
            None => {}
        }
    }

    // Stable sorts keep traversal order for equal distances
    out.furniture
        .sort_by(|a, b| a.distance.total_cmp(&b.distance));
    out.room_elements
        .sort_by(|a, b| a.distance.total_cmp(&b.distance));
    out
}

/// Resolve the selection target of a ray.
///
/// Furniture always outranks room elements: if any furniture was hit, the
/// closest furniture wins even when a wall is nearer to the camera. Room
/// elements only win when no furniture was hit at all.
pub fn resolve_selection(graph: &SceneGraph, hits: &[RayHit]) -> PickResult {
    let PartitionedHits {
        furniture,
        room_elements,
    } = extract_hits(graph, hits);

    if let Some(first) = furniture.into_iter().next() {
        return PickResult {
            furniture_id: Some(first.furniture_id),
            room_element: None,
        };
    }
    if let Some(first) = room_elements.first() {
        return PickResult {
            furniture_id: None,
            room_element: Some(first.element),
        };
    }
    PickResult::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{furniture_hit, room_element_hit, untagged_hit};

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_ray_plane_hits_floor() {
        let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        let p = ray_plane_point(&ray, &Plane::horizontal(0.0)).unwrap();
        assert!(approx(p.y, 0.0));
        assert!(approx(ray_plane(&ray, &Plane::horizontal(0.0)).unwrap(), 5.0));
    }

    #[test]
    fn test_ray_plane_parallel_is_none() {
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::X);
        assert!(ray_plane(&ray, &Plane::horizontal(0.0)).is_none());
    }

    #[test]
    fn test_ray_plane_behind_origin_is_none() {
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::Y);
        assert!(ray_plane(&ray, &Plane::horizontal(0.0)).is_none());
    }

    #[test]
    fn test_ray_aabb_hit_and_miss() {
        let aabb = Aabb::from_center_size(Vec3::ZERO, Vec3::ONE);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(approx(ray_aabb(&ray, &aabb).unwrap(), 4.5));

        let miss = Ray::new(Vec3::new(3.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(ray_aabb(&miss, &aabb).is_none());
    }

    #[test]
    fn test_extract_hits_sorts_each_bucket() {
        let (graph, hits) = crate::fixtures::tagged_hits(&[
            furniture_hit("chair", 4.0),
            room_element_hit(RoomElementKind::WallFront, 2.0),
            furniture_hit("table", 1.0),
            room_element_hit(RoomElementKind::WallBack, 3.0),
        ]);
        let parts = extract_hits(&graph, &hits);
        let ids: Vec<&str> = parts.furniture.iter().map(|h| h.furniture_id.as_str()).collect();
        assert_eq!(ids, vec!["table", "chair"]);
        let elems: Vec<RoomElementKind> = parts.room_elements.iter().map(|h| h.element).collect();
        assert_eq!(elems, vec![RoomElementKind::WallFront, RoomElementKind::WallBack]);
    }

    #[test]
    fn test_furniture_beats_nearer_wall() {
        let (graph, hits) = crate::fixtures::tagged_hits(&[
            room_element_hit(RoomElementKind::WallLeft, 1.0),
            furniture_hit("sofa", 10.0),
        ]);
        let result = resolve_selection(&graph, &hits);
        assert_eq!(result.furniture_id.as_deref(), Some("sofa"));
        assert_eq!(result.room_element, None);
    }

    #[test]
    fn test_nearest_furniture_wins() {
        let (graph, hits) = crate::fixtures::tagged_hits(&[
            furniture_hit("A", 4.0),
            furniture_hit("B", 1.0),
        ]);
        let result = resolve_selection(&graph, &hits);
        assert_eq!(result.furniture_id.as_deref(), Some("B"));
    }

    #[test]
    fn test_room_element_when_no_furniture() {
        let (graph, hits) = crate::fixtures::tagged_hits(&[
            room_element_hit(RoomElementKind::Floor, 1.0),
            room_element_hit(RoomElementKind::WallRight, 3.0),
        ]);
        let result = resolve_selection(&graph, &hits);
        assert_eq!(result.furniture_id, None);
        assert_eq!(result.room_element, Some(RoomElementKind::Floor));
    }

    #[test]
    fn test_empty_input_resolves_to_nothing() {
        let graph = SceneGraph::new();
        let result = resolve_selection(&graph, &[]);
        assert!(result.is_empty());
    }

    #[test]
    fn test_untagged_hits_are_ignored() {
        let (graph, hits) = crate::fixtures::tagged_hits(&[
            untagged_hit(0.5),
            room_element_hit(RoomElementKind::Ceiling, 2.0),
        ]);
        let result = resolve_selection(&graph, &hits);
        assert_eq!(result.room_element, Some(RoomElementKind::Ceiling));

        let (graph, hits) = crate::fixtures::tagged_hits(&[untagged_hit(0.5)]);
        assert!(resolve_selection(&graph, &hits).is_empty());
    }
}
