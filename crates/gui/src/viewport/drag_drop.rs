//! Drag-and-drop of new furniture from the library into the room.
//!
//! `Idle -> Dragging -> (Committed | Cancelled) -> Idle`. Nothing in the
//! furniture store changes until commit; while dragging only the drop
//! preview moves.

use glam::Vec3;
use shared::{FurnitureId, FurnitureKind};

use super::picking::{ray_plane_point, Plane, Ray};
use crate::state::furniture::FurnitureStore;

/// What is being dragged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragItem {
    Furniture(FurnitureKind),
}

#[derive(Debug, Default)]
pub struct DragDropSession {
    drag_item: Option<DragItem>,
    is_dragging: bool,
    drop_preview: Option<Vec3>,
}

impl DragDropSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    pub fn drag_item(&self) -> Option<DragItem> {
        self.drag_item
    }

    pub fn drop_preview(&self) -> Option<Vec3> {
        self.drop_preview
    }

    pub fn on_drag_start(&mut self, item: DragItem) {
        self.drag_item = Some(item);
        self.drop_preview = None;
        self.is_dragging = true;
        tracing::debug!("Drag started: {:?}", item);
    }

    /// Store the preview point. Ignored unless a drag is in progress, so a
    /// preview never outlives its drag.
    pub fn update_drop_preview(&mut self, point: Option<Vec3>) {
        if !self.is_dragging {
            return;
        }
        self.drop_preview = point;
    }

    /// End the drag with or without a commit. Idempotent.
    pub fn on_drag_end(&mut self) {
        if self.drag_item.is_none() && !self.is_dragging {
            return;
        }
        // Preview first: it must never be set while not dragging
        self.drop_preview = None;
        self.is_dragging = false;
        self.drag_item = None;
        tracing::debug!("Drag ended");
    }

    /// Add the dragged item at the preview position and end the drag.
    /// Without a preview the drag is cancelled and nothing is added.
    pub fn commit(&mut self, store: &mut FurnitureStore) -> Option<FurnitureId> {
        let result = match (self.is_dragging, self.drag_item, self.drop_preview) {
            (true, Some(DragItem::Furniture(kind)), Some(point)) => {
                let id = store.add_item(kind, point, 0.0);
                tracing::info!("Dropped {} at ({:.2}, {:.2})", kind.key(), point.x, point.z);
                Some(id)
            }
            _ => None,
        };
        self.on_drag_end();
        result
    }
}

/// Where a pointer ray lands on the floor (y = 0)
pub fn drop_position(ray: &Ray) -> Option<Vec3> {
    ray_plane_point(ray, &Plane::horizontal(0.0))
}
