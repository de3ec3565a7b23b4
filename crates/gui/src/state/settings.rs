//! Application settings

use serde::{Deserialize, Serialize};

use crate::viewport::solver::{SnapConfig, BOUNDARY_MARGIN, DEFAULT_GRID_SIZE, SNAP_THRESHOLD};

/// Interface language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    En,
    It,
}

impl Language {
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::It => "Italiano",
        }
    }

    pub fn all() -> &'static [Language] {
        &[Language::En, Language::It]
    }
}

/// Furniture snapping
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapSettings {
    /// Enable snapping
    pub enabled: bool,
    /// Grid step in metres
    pub grid_size: f32,
    /// Distance at which wall snaps engage
    pub edge_threshold: f32,
    /// Gap kept between furniture and walls
    pub boundary_margin: f32,
}

impl Default for SnapSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            grid_size: DEFAULT_GRID_SIZE,
            edge_threshold: SNAP_THRESHOLD,
            boundary_margin: BOUNDARY_MARGIN,
        }
    }
}

impl SnapSettings {
    pub fn config(&self) -> SnapConfig {
        SnapConfig {
            enabled: self.enabled,
            grid_size: self.grid_size,
            threshold: self.edge_threshold,
            margin: self.boundary_margin,
        }
    }
}

/// Pointer interaction tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionSettings {
    /// Screen distance a press must travel before it becomes a move
    pub drag_threshold_px: f32,
    /// Per-frame interpolation factor toward the drag target
    pub drag_smoothing: f32,
    /// Assumed context menu size in pixels (width, height)
    pub context_menu_size: [f32; 2],
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            drag_threshold_px: 5.0,
            drag_smoothing: 0.3,
            context_menu_size: [200.0, 300.0],
        }
    }
}

/// Grid display settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Show grid
    pub visible: bool,
    /// Grid line opacity (0.0 - 1.0)
    pub opacity: f32,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            visible: true,
            opacity: 0.5,
        }
    }
}

/// Viewport settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportSettings {
    /// Background color RGB
    pub background_color: [u8; 3],
    /// Selection color RGB
    pub selection_color: [u8; 3],
    pub furniture_color: [u8; 3],
    /// Drop preview color RGB
    pub preview_color: [u8; 3],
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            background_color: [30, 30, 35],
            selection_color: [0, 220, 255],
            furniture_color: [200, 170, 120],
            preview_color: [120, 220, 120],
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    pub language: Language,
    pub dark_theme: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            language: Language::En,
            dark_theme: true,
        }
    }
}

/// All application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Snap settings
    pub snap: SnapSettings,
    pub interaction: InteractionSettings,
    /// Grid settings
    pub grid: GridSettings,
    /// Viewport settings
    pub viewport: ViewportSettings,
    /// UI settings
    pub ui: UiSettings,
}

impl AppSettings {
    fn config_dir() -> Option<std::path::PathBuf> {
        directories::ProjectDirs::from("com", "roomplanner", "room-planner")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Load settings from file, or return default if not found
    pub fn load() -> Self {
        let Some(dir) = Self::config_dir() else {
            return Self::default();
        };
        let config_path = dir.join("settings.json");
        match std::fs::read_to_string(&config_path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    tracing::info!("Loaded settings from {}", config_path.display());
                    settings
                }
                Err(e) => {
                    tracing::warn!("{e}; using defaults");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Save settings to file
    pub fn save(&self) -> Result<(), String> {
        let dir = Self::config_dir().ok_or("No config directory")?;
        std::fs::create_dir_all(&dir).map_err(|e| format!("Failed to create {}: {e}", dir.display()))?;
        let config_path = dir.join("settings.json");
        let json = serde_json::to_string_pretty(self).map_err(|e| format!("Serialize error: {e}"))?;
        std::fs::write(&config_path, json)
            .map_err(|e| format!("Failed to write {}: {e}", config_path.display()))?;
        tracing::info!("Saved settings to {}", config_path.display());
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Invalid settings JSON: {e}"))
    }
}
