use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Уникальный идентификатор предмета мебели (UUID в строковом виде)
pub type FurnitureId = String;

/// Элемент комнаты: пол, четыре стены и потолок
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoomElementKind {
    Floor,
    WallFront,
    WallBack,
    WallLeft,
    WallRight,
    Ceiling,
}

impl RoomElementKind {
    pub const ALL: [RoomElementKind; 6] = [
        RoomElementKind::Floor,
        RoomElementKind::WallFront,
        RoomElementKind::WallBack,
        RoomElementKind::WallLeft,
        RoomElementKind::WallRight,
        RoomElementKind::Ceiling,
    ];

    /// Стабильный строковый ключ (совпадает с serde-представлением)
    pub fn key(&self) -> &'static str {
        match self {
            RoomElementKind::Floor => "floor",
            RoomElementKind::WallFront => "wall-front",
            RoomElementKind::WallBack => "wall-back",
            RoomElementKind::WallLeft => "wall-left",
            RoomElementKind::WallRight => "wall-right",
            RoomElementKind::Ceiling => "ceiling",
        }
    }

    pub fn is_wall(&self) -> bool {
        matches!(
            self,
            RoomElementKind::WallFront
                | RoomElementKind::WallBack
                | RoomElementKind::WallLeft
                | RoomElementKind::WallRight
        )
    }
}

/// Тип мебели из каталога
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FurnitureKind {
    Chair,
    Table,
    Sofa,
    Bed,
    Wardrobe,
    Lamp,
}

impl FurnitureKind {
    pub const ALL: [FurnitureKind; 6] = [
        FurnitureKind::Chair,
        FurnitureKind::Table,
        FurnitureKind::Sofa,
        FurnitureKind::Bed,
        FurnitureKind::Wardrobe,
        FurnitureKind::Lamp,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            FurnitureKind::Chair => "chair",
            FurnitureKind::Table => "table",
            FurnitureKind::Sofa => "sofa",
            FurnitureKind::Bed => "bed",
            FurnitureKind::Wardrobe => "wardrobe",
            FurnitureKind::Lamp => "lamp",
        }
    }

    /// Габариты (ширина × высота × глубина) в метрах
    pub fn size(&self) -> Vec3 {
        match self {
            FurnitureKind::Chair => Vec3::new(0.5, 0.45, 0.5),
            FurnitureKind::Table => Vec3::new(1.2, 0.1, 0.8),
            FurnitureKind::Sofa => Vec3::new(1.5, 0.6, 0.7),
            FurnitureKind::Bed => Vec3::new(2.0, 0.3, 1.0),
            FurnitureKind::Wardrobe => Vec3::new(1.0, 2.0, 0.5),
            FurnitureKind::Lamp => Vec3::new(0.4, 1.0, 0.4),
        }
    }

    /// Высота центра над полом, при которой основание стоит на полу
    pub fn rest_height(&self) -> f32 {
        self.size().y * 0.5
    }
}

/// Предмет мебели в комнате
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FurnitureItem {
    pub id: FurnitureId,
    #[serde(rename = "type")]
    pub kind: FurnitureKind,
    /// Центр ограничивающего параллелепипеда
    pub position: Vec3,
    /// Поворот вокруг оси Y, радианы в диапазоне [0, 2π)
    #[serde(default)]
    pub rotation: f32,
    #[serde(default = "default_true")]
    pub visible: bool,
    pub size: Vec3,
}

impl FurnitureItem {
    pub fn new(id: FurnitureId, kind: FurnitureKind, position: Vec3) -> Self {
        Self {
            id,
            kind,
            position,
            rotation: 0.0,
            visible: true,
            size: kind.size(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Размеры комнаты. Комната центрирована в начале координат по X/Z,
/// пол на Y=0, потолок на Y=height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomDimensions {
    pub width: f32,
    pub length: f32,
    pub height: f32,
}

impl Default for RoomDimensions {
    fn default() -> Self {
        Self {
            width: 4.0,
            length: 5.0,
            height: 2.5,
        }
    }
}

impl RoomDimensions {
    pub fn new(width: f32, length: f32, height: f32) -> Self {
        Self {
            width,
            length,
            height,
        }
    }

    pub fn half_width(&self) -> f32 {
        self.width * 0.5
    }

    pub fn half_length(&self) -> f32 {
        self.length * 0.5
    }
}

/// Ограничение перемещения мебели
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementAxis {
    /// Плоскость пола
    #[default]
    Xz,
    X,
    Y,
    Z,
}

impl MovementAxis {
    pub const ALL: [MovementAxis; 4] = [
        MovementAxis::Xz,
        MovementAxis::X,
        MovementAxis::Y,
        MovementAxis::Z,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MovementAxis::Xz => "XZ",
            MovementAxis::X => "X",
            MovementAxis::Y => "Y",
            MovementAxis::Z => "Z",
        }
    }
}

/// Предустановленные виды камеры
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewPreset {
    Top,
    Front,
    Side,
    #[default]
    Corner,
}

impl ViewPreset {
    pub const ALL: [ViewPreset; 4] = [
        ViewPreset::Top,
        ViewPreset::Front,
        ViewPreset::Side,
        ViewPreset::Corner,
    ];
}

/// Семантическая метка узла сцены
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SceneTag {
    Furniture {
        #[serde(rename = "furnitureId")]
        furniture_id: FurnitureId,
    },
    RoomElement { element: RoomElementKind },
}

impl SceneTag {
    pub fn furniture(id: impl Into<FurnitureId>) -> Self {
        SceneTag::Furniture {
            furniture_id: id.into(),
        }
    }

    pub fn room_element(element: RoomElementKind) -> Self {
        SceneTag::RoomElement { element }
    }
}

// ============================================================================
// Плитка
// ============================================================================

/// Размер плитки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TileSize {
    Small,
    #[default]
    Medium,
    Large,
    ExtraLarge,
}

impl TileSize {
    pub const ALL: [TileSize; 4] = [
        TileSize::Small,
        TileSize::Medium,
        TileSize::Large,
        TileSize::ExtraLarge,
    ];

    /// Сторона плитки в метрах
    pub fn meters(&self) -> f32 {
        match self {
            TileSize::Small => 0.25,
            TileSize::Medium => 0.5,
            TileSize::Large => 0.75,
            TileSize::ExtraLarge => 1.0,
        }
    }
}

/// Текстура плитки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileTexture {
    Marble,
    #[default]
    Ceramic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TileSettings {
    pub size: TileSize,
    pub texture: TileTexture,
}
