use shared::{MovementAxis, ViewPreset};

/// Panel visibility flags
pub struct PanelVisibility {
    pub library: bool,
    pub outliner: bool,
    pub properties: bool,
}

impl Default for PanelVisibility {
    fn default() -> Self {
        Self {
            library: true,
            outliner: true,
            properties: true,
        }
    }
}

/// Interaction mode shared by the viewport, toolbar and commands
#[derive(Default)]
pub struct ViewState {
    /// Constraint applied to furniture moves
    pub movement_axis: MovementAxis,
    /// Last preset applied to the camera
    pub current_view: ViewPreset,
    /// Set while a furniture move is past its drag threshold; camera
    /// orbit, pan and zoom are suspended meanwhile
    pub is_dragging: bool,
    pub panels: PanelVisibility,
    /// Show settings window
    pub show_settings_window: bool,
}

impl ViewState {
    pub fn set_movement_axis(&mut self, axis: MovementAxis) {
        if self.movement_axis != axis {
            tracing::info!("Movement axis: {}", axis.label());
            self.movement_axis = axis;
        }
    }
}
