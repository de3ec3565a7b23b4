//! Typed scene graph used for pointer raycasts.
//!
//! Nodes live in an arena and refer to their parent by index, so walking
//! upward never needs ownership. A node may carry a [`SceneTag`]; untagged
//! leaves inherit the tag of their nearest tagged ancestor.

use glam::Vec3;
use shared::SceneTag;

use super::picking::{ray_aabb, Aabb, Ray};

/// Index of a node inside its [`SceneGraph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct SceneNode {
    pub name: String,
    pub parent: Option<NodeId>,
    pub tag: Option<SceneTag>,
    /// World-space bounds of this node's own geometry (groups have none)
    pub bounds: Option<Aabb>,
    /// One-sided geometry: only rays travelling against this normal hit it
    pub front_face: Option<Vec3>,
}

/// One primitive crossed by a ray
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub node: NodeId,
    pub distance: f32,
}

#[derive(Debug, Clone, Default)]
pub struct SceneGraph {
    nodes: Vec<SceneNode>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add a node. A parent that does not belong to this graph is ignored,
    /// which keeps every parent index smaller than its child's.
    pub fn add_node(
        &mut self,
        name: impl Into<String>,
        parent: Option<NodeId>,
        tag: Option<SceneTag>,
        bounds: Option<Aabb>,
    ) -> NodeId {
        let parent = parent.filter(|p| p.0 < self.nodes.len());
        let id = NodeId(self.nodes.len());
        self.nodes.push(SceneNode {
            name: name.into(),
            parent,
            tag,
            bounds,
            front_face: None,
        });
        id
    }

    /// Add a tagged surface that can only be hit from the side `normal`
    /// points to, like a wall seen from inside the room
    pub fn add_surface(
        &mut self,
        name: impl Into<String>,
        parent: Option<NodeId>,
        tag: Option<SceneTag>,
        bounds: Aabb,
        normal: Vec3,
    ) -> NodeId {
        let id = self.add_node(name, parent, tag, Some(bounds));
        self.nodes[id.0].front_face = Some(normal);
        id
    }

    /// Add a geometry-less grouping node
    pub fn add_group(
        &mut self,
        name: impl Into<String>,
        parent: Option<NodeId>,
        tag: Option<SceneTag>,
    ) -> NodeId {
        self.add_node(name, parent, tag, None)
    }

    /// Add an untagged leaf with geometry
    pub fn add_mesh(&mut self, name: impl Into<String>, parent: Option<NodeId>, bounds: Aabb) -> NodeId {
        self.add_node(name, parent, None, Some(bounds))
    }

    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id.0)
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &SceneNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Walk from `id` toward the root and return the first tag found
    pub fn find_tag(&self, id: NodeId) -> Option<&SceneTag> {
        let mut current = Some(id);
        // Parents always precede children, so the walk is bounded by the
        // node count even if indices were tampered with.
        for _ in 0..=self.nodes.len() {
            let node = self.nodes.get(current?.0)?;
            if let Some(tag) = &node.tag {
                return Some(tag);
            }
            current = node.parent;
        }
        None
    }

    /// Intersect a ray with every node that owns geometry.
    /// Results are sorted nearest first; equal distances keep insertion order.
    pub fn intersect(&self, ray: &Ray) -> Vec<RayHit> {
        let mut hits: Vec<RayHit> = self
            .nodes()
            .filter_map(|(id, node)| {
                let bounds = node.bounds.as_ref()?;
                if node.front_face.is_some_and(|n| ray.direction.dot(n) >= 0.0) {
                    return None;
                }
                ray_aabb(ray, bounds).map(|distance| RayHit { node: id, distance })
            })
            .collect();
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::RoomElementKind;

    #[test]
    fn test_find_tag_walks_parents() {
        let mut g = SceneGraph::new();
        let group = g.add_group("chair", None, Some(SceneTag::furniture("c1")));
        let inner = g.add_group("legs", Some(group), None);
        let leaf = g.add_mesh("leg0", Some(inner), Aabb::from_center_size(Vec3::ZERO, Vec3::ONE));

        assert_eq!(g.find_tag(leaf), Some(&SceneTag::furniture("c1")));
    }

    #[test]
    fn test_find_tag_prefers_nearest_ancestor() {
        let mut g = SceneGraph::new();
        let room = g.add_group("room", None, Some(SceneTag::room_element(RoomElementKind::Floor)));
        let item = g.add_group("item", Some(room), Some(SceneTag::furniture("x")));
        let leaf = g.add_mesh("body", Some(item), Aabb::from_center_size(Vec3::ZERO, Vec3::ONE));

        assert_eq!(g.find_tag(leaf), Some(&SceneTag::furniture("x")));
    }

    #[test]
    fn test_untagged_chain_has_no_tag() {
        let mut g = SceneGraph::new();
        let root = g.add_group("grid", None, None);
        let leaf = g.add_mesh("line", Some(root), Aabb::from_center_size(Vec3::ZERO, Vec3::ONE));
        assert!(g.find_tag(leaf).is_none());
    }

    #[test]
    fn test_foreign_parent_is_dropped() {
        let mut g = SceneGraph::new();
        let id = g.add_group("orphan", Some(NodeId(42)), None);
        assert!(g.node(id).unwrap().parent.is_none());
    }

    #[test]
    fn test_intersect_sorted_nearest_first() {
        let mut g = SceneGraph::new();
        let far = g.add_mesh("far", None, Aabb::from_center_size(Vec3::new(0.0, 0.0, -5.0), Vec3::ONE));
        let near = g.add_mesh("near", None, Aabb::from_center_size(Vec3::new(0.0, 0.0, -2.0), Vec3::ONE));
        g.add_mesh("off", None, Aabb::from_center_size(Vec3::new(9.0, 0.0, -2.0), Vec3::ONE));
        g.add_group("group", None, None);

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let hits = g.intersect(&ray);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].node, near);
        assert_eq!(hits[1].node, far);
        assert!(hits[0].distance < hits[1].distance);
    }

    #[test]
    fn test_surface_hit_only_from_front() {
        let mut g = SceneGraph::new();
        let floor = g.add_surface(
            "floor",
            None,
            Some(SceneTag::room_element(RoomElementKind::Floor)),
            Aabb::new(Vec3::new(-1.0, -0.02, -1.0), Vec3::new(1.0, 0.0, 1.0)),
            Vec3::Y,
        );

        let from_above = Ray::new(Vec3::new(0.0, 3.0, 0.0), Vec3::NEG_Y);
        assert_eq!(g.intersect(&from_above).first().map(|h| h.node), Some(floor));

        let from_below = Ray::new(Vec3::new(0.0, -3.0, 0.0), Vec3::Y);
        assert!(g.intersect(&from_below).is_empty());
    }
}
