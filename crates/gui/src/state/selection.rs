use shared::{FurnitureId, RoomElementKind};

/// What is currently selected. Furniture and room elements exclude each
/// other, so the state is a single enum rather than two nullable fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    None,
    Furniture(FurnitureId),
    RoomElement(RoomElementKind),
}

/// Selection state shared by the viewport, panels and commands
#[derive(Default)]
pub struct SelectionState {
    current: Selection,
    /// Version counter for selection changes (for cache invalidation)
    version: u64,
}

impl SelectionState {
    pub fn current(&self) -> &Selection {
        &self.current
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn selected_furniture(&self) -> Option<&FurnitureId> {
        match &self.current {
            Selection::Furniture(id) => Some(id),
            _ => None,
        }
    }

    pub fn selected_room_element(&self) -> Option<RoomElementKind> {
        match self.current {
            Selection::RoomElement(kind) => Some(kind),
            _ => None,
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_furniture().is_some_and(|s| s == id)
    }

    pub fn is_empty(&self) -> bool {
        self.current == Selection::None
    }

    fn set(&mut self, next: Selection) {
        if self.current != next {
            self.current = next;
            self.version += 1;
        }
    }

    /// Select a furniture item (clears any room element)
    pub fn select(&mut self, id: FurnitureId) {
        self.set(Selection::Furniture(id));
    }

    /// Select a room element (clears any furniture)
    pub fn select_room_element(&mut self, kind: RoomElementKind) {
        self.set(Selection::RoomElement(kind));
    }

    /// Clear all selection
    pub fn clear(&mut self) {
        self.set(Selection::None);
    }

    /// Drop the furniture selection if it points at `id`
    pub fn forget_furniture(&mut self, id: &str) {
        if self.is_selected(id) {
            self.clear();
        }
    }
}
