pub mod context_menu;
pub mod furniture;
pub mod room;
pub mod selection;
pub mod settings;
pub mod tiles;
pub mod view;

pub use context_menu::{apply_context_action, ContextAction, ContextMenuState};
pub use furniture::{FurniturePatch, FurnitureStore};
pub use room::{DimensionsPatch, RoomElementState, RoomState};
pub use selection::{Selection, SelectionState};
pub use settings::{AppSettings, Language};
pub use tiles::TileState;
pub use view::{PanelVisibility, ViewState};

/// Combined application state
#[derive(Default)]
pub struct AppState {
    pub furniture: FurnitureStore,
    pub room: RoomState,
    pub room_elements: RoomElementState,
    pub tiles: TileState,
    pub selection: SelectionState,
    pub view: ViewState,
    pub context_menu: ContextMenuState,
    pub settings: AppSettings,
}

impl AppState {
    pub fn with_settings(settings: AppSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Remove an item and drop it from the selection
    pub fn remove_furniture(&mut self, id: &str) -> bool {
        let removed = self.furniture.remove_item(id);
        if removed {
            self.selection.forget_furniture(id);
        }
        removed
    }
}
