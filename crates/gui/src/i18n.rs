use std::sync::atomic::{AtomicU8, Ordering};

use shared::{FurnitureKind, MovementAxis, RoomElementKind, TileSize, TileTexture, ViewPreset};

use crate::state::Language;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    En,
    It,
}

impl From<Language> for Lang {
    fn from(language: Language) -> Self {
        match language {
            Language::En => Lang::En,
            Language::It => Lang::It,
        }
    }
}

static CURRENT_LANG: AtomicU8 = AtomicU8::new(0); // 0=En (default)

pub fn lang() -> Lang {
    match CURRENT_LANG.load(Ordering::Relaxed) {
        1 => Lang::It,
        _ => Lang::En,
    }
}

pub fn set_lang(l: Lang) {
    CURRENT_LANG.store(
        match l {
            Lang::En => 0,
            Lang::It => 1,
        },
        Ordering::Relaxed,
    );
}

/// Translate a key to the current language.
pub fn t(key: &str) -> &'static str {
    let it = lang() == Lang::It;
    match key {
        // ── Main menus ──────────────────────────────────────
        "menu.edit" => if it { "Modifica" } else { "Edit" },
        "menu.duplicate" => if it { "Duplica  Ctrl+D" } else { "Duplicate  Ctrl+D" },
        "menu.delete" => if it { "Elimina  Canc" } else { "Delete  Del" },
        "menu.deselect" => if it { "Deseleziona  Esc" } else { "Deselect  Esc" },
        "menu.clear_room" => if it { "Svuota stanza" } else { "Clear room" },

        "menu.view" => if it { "Vista" } else { "View" },
        "menu.library" => if it { "Catalogo" } else { "Library" },
        "menu.outliner" => if it { "Struttura" } else { "Outliner" },
        "menu.properties" => if it { "Proprietà" } else { "Properties" },
        "menu.camera" => if it { "Telecamera" } else { "Camera" },
        "menu.language" => if it { "Lingua" } else { "Language" },

        "menu.settings" => if it { "Impostazioni" } else { "Settings" },
        "menu.preferences" => if it { "Preferenze..." } else { "Preferences..." },

        // ── Toolbar ─────────────────────────────────────────
        "tb.axis" => if it { "Asse" } else { "Axis" },
        "tb.snap" => if it { "Aggancio" } else { "Snap" },
        "tb.view" => if it { "Vista" } else { "View" },
        "tb.grid" => if it { "Griglia" } else { "Grid" },

        "tip.axis" => if it { "Vincolo di spostamento dei mobili" } else { "Constrain furniture moves" },
        "tip.snap" => if it { "Aggancia a griglia e pareti" } else { "Snap to grid and walls" },
        "tip.view" => if it { "Posiziona la telecamera" } else { "Move the camera to a preset" },

        // ── Library ─────────────────────────────────────────
        "lib.title" => if it { "Catalogo" } else { "Library" },
        "lib.hint" => if it { "Trascina un mobile nella stanza" } else { "Drag an item into the room" },

        // ── Outliner ────────────────────────────────────────
        "tree.room" => if it { "Stanza" } else { "Room" },
        "tree.furniture" => if it { "Mobili" } else { "Furniture" },
        "tree.empty" => if it { "Nessun mobile." } else { "No furniture yet." },
        "tree.show" => if it { "Mostra" } else { "Show" },
        "tree.hide" => if it { "Nascondi" } else { "Hide" },

        // ── Properties ──────────────────────────────────────
        "props.title" => if it { "Proprietà" } else { "Properties" },
        "props.nothing" => if it { "Nessuna selezione" } else { "Nothing selected" },
        "props.position" => if it { "Posizione" } else { "Position" },
        "props.rotation" => if it { "Rotazione" } else { "Rotation" },
        "props.size" => if it { "Dimensioni" } else { "Size" },
        "props.visible" => if it { "Visibile" } else { "Visible" },
        "props.room" => if it { "Stanza" } else { "Room" },
        "props.width" => if it { "Larghezza" } else { "Width" },
        "props.length" => if it { "Lunghezza" } else { "Length" },
        "props.height" => if it { "Altezza" } else { "Height" },
        "props.tiles" => if it { "Piastrelle" } else { "Tiles" },
        "props.tiling" => if it { "Piastrellatura" } else { "Tiling" },
        "props.tile_size" => if it { "Formato" } else { "Tile size" },
        "props.texture" => if it { "Materiale" } else { "Texture" },

        // ── Context menu ────────────────────────────────────
        "ctx.duplicate" => if it { "Duplica" } else { "Duplicate" },
        "ctx.delete" => if it { "Elimina" } else { "Delete" },
        "ctx.hide" => if it { "Nascondi" } else { "Hide" },
        "ctx.show" => if it { "Mostra" } else { "Show" },
        "ctx.rotate" => if it { "Ruota di 90°" } else { "Rotate 90°" },
        "ctx.snap_floor" => if it { "Appoggia al pavimento" } else { "Snap to floor" },
        "ctx.select" => if it { "Seleziona" } else { "Select" },
        "ctx.snapping_on" => if it { "Attiva aggancio" } else { "Enable snapping" },
        "ctx.snapping_off" => if it { "Disattiva aggancio" } else { "Disable snapping" },
        "ctx.axis" => if it { "Asse di spostamento" } else { "Movement axis" },

        // ── Status bar ──────────────────────────────────────
        "status.items" => if it { "Mobili" } else { "Items" },
        "status.selected" => if it { "Selezionato" } else { "Selected" },
        "status.nothing" => if it { "nessuno" } else { "none" },
        "status.moving" => if it { "Spostamento" } else { "Moving" },
        "status.dropping" => if it { "Rilascia per aggiungere" } else { "Release to add" },
        "status.snap_on" => if it { "aggancio attivo" } else { "snap on" },
        "status.snap_off" => if it { "aggancio spento" } else { "snap off" },
        "status.nav_hint" => if it {
            "Trascina il vuoto per ruotare, tasto destro per spostare, rotella per lo zoom"
        } else {
            "Drag empty space to orbit, right-drag to pan, scroll to zoom"
        },

        // ── Settings ────────────────────────────────────────
        "settings.title" => if it { "Preferenze" } else { "Preferences" },
        "settings.snap" => if it { "Aggancio" } else { "Snapping" },
        "settings.snap_enabled" => if it { "Attiva aggancio" } else { "Enable snapping" },
        "settings.grid_size" => if it { "Passo griglia (m)" } else { "Grid step (m)" },
        "settings.edge_threshold" => if it { "Soglia pareti (m)" } else { "Wall threshold (m)" },
        "settings.margin" => if it { "Distanza dalle pareti (m)" } else { "Wall margin (m)" },
        "settings.interaction" => if it { "Interazione" } else { "Interaction" },
        "settings.drag_threshold" => if it { "Soglia trascinamento (px)" } else { "Drag threshold (px)" },
        "settings.smoothing" => if it { "Fluidità" } else { "Smoothing" },
        "settings.grid" => if it { "Griglia" } else { "Grid" },
        "settings.grid_visible" => if it { "Mostra griglia" } else { "Show grid" },
        "settings.grid_opacity" => if it { "Opacità" } else { "Opacity" },
        "settings.viewport" => if it { "Vista 3D" } else { "Viewport" },
        "settings.bg_color" => if it { "Colore sfondo" } else { "Background color" },
        "settings.sel_color" => if it { "Colore selezione" } else { "Selection color" },
        "settings.furniture_color" => if it { "Colore mobili" } else { "Furniture color" },
        "settings.ui" => if it { "Interfaccia" } else { "Interface" },
        "settings.dark_theme" => if it { "Tema scuro" } else { "Dark theme" },
        "settings.save" => if it { "Salva" } else { "Save" },
        "settings.reset" => if it { "Ripristina" } else { "Reset" },
        "settings.close" => if it { "Chiudi" } else { "Close" },

        // ── Fallback ────────────────────────────────────────
        _ => "???",
    }
}

pub fn furniture_name(kind: FurnitureKind) -> &'static str {
    let it = lang() == Lang::It;
    match kind {
        FurnitureKind::Chair => if it { "Sedia" } else { "Chair" },
        FurnitureKind::Table => if it { "Tavolo" } else { "Table" },
        FurnitureKind::Sofa => if it { "Divano" } else { "Sofa" },
        FurnitureKind::Bed => if it { "Letto" } else { "Bed" },
        FurnitureKind::Wardrobe => if it { "Armadio" } else { "Wardrobe" },
        FurnitureKind::Lamp => if it { "Lampada" } else { "Lamp" },
    }
}

pub fn element_name(kind: RoomElementKind) -> &'static str {
    let it = lang() == Lang::It;
    match kind {
        RoomElementKind::Floor => if it { "Pavimento" } else { "Floor" },
        RoomElementKind::WallFront => if it { "Parete frontale" } else { "Front wall" },
        RoomElementKind::WallBack => if it { "Parete di fondo" } else { "Back wall" },
        RoomElementKind::WallLeft => if it { "Parete sinistra" } else { "Left wall" },
        RoomElementKind::WallRight => if it { "Parete destra" } else { "Right wall" },
        RoomElementKind::Ceiling => if it { "Soffitto" } else { "Ceiling" },
    }
}

pub fn preset_name(preset: ViewPreset) -> &'static str {
    let it = lang() == Lang::It;
    match preset {
        ViewPreset::Top => if it { "Alto" } else { "Top" },
        ViewPreset::Front => if it { "Fronte" } else { "Front" },
        ViewPreset::Side => if it { "Lato" } else { "Side" },
        ViewPreset::Corner => if it { "Angolo" } else { "Corner" },
    }
}

pub fn axis_hint(axis: MovementAxis) -> &'static str {
    let it = lang() == Lang::It;
    match axis {
        MovementAxis::Xz => if it { "Sul pavimento" } else { "Along the floor" },
        MovementAxis::X => if it { "Solo larghezza" } else { "Width only" },
        MovementAxis::Y => if it { "Solo altezza" } else { "Height only" },
        MovementAxis::Z => if it { "Solo profondità" } else { "Depth only" },
    }
}

pub fn tile_size_name(size: TileSize) -> &'static str {
    match size {
        TileSize::Small => "25 cm",
        TileSize::Medium => "50 cm",
        TileSize::Large => "75 cm",
        TileSize::ExtraLarge => "100 cm",
    }
}

pub fn texture_name(texture: TileTexture) -> &'static str {
    let it = lang() == Lang::It;
    match texture {
        TileTexture::Marble => if it { "Marmo" } else { "Marble" },
        TileTexture::Ceramic => if it { "Ceramica" } else { "Ceramic" },
    }
}
