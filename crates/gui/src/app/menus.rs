//! Application menu bar and settings window

use eframe::egui;
use shared::ViewPreset;

use crate::i18n::{preset_name, set_lang, t};
use crate::state::settings::AppSettings;
use crate::state::{AppState, Language};
use crate::ui::toolbar;
use crate::viewport::view_command::ViewCommandChannel;

/// Show the edit menu
pub fn edit_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button(t("menu.edit"), |ui| {
        let has_item = state.selection.selected_furniture().is_some();
        if ui
            .add_enabled(has_item, egui::Button::new(t("menu.duplicate")))
            .clicked()
        {
            toolbar::action_duplicate(state);
            ui.close_menu();
        }
        if ui
            .add_enabled(has_item, egui::Button::new(t("menu.delete")))
            .clicked()
        {
            toolbar::action_delete(state);
            ui.close_menu();
        }
        ui.separator();
        if ui.button(t("menu.deselect")).clicked() {
            state.selection.clear();
            ui.close_menu();
        }
        if ui
            .add_enabled(!state.furniture.is_empty(), egui::Button::new(t("menu.clear_room")))
            .clicked()
        {
            state.furniture.clear();
            state.selection.clear();
            ui.close_menu();
        }
    });
}

/// Show the view menu
pub fn view_menu(ui: &mut egui::Ui, state: &mut AppState, views: &ViewCommandChannel) {
    ui.menu_button(t("menu.view"), |ui| {
        let panels = &mut state.view.panels;
        ui.checkbox(&mut panels.library, t("menu.library"));
        ui.checkbox(&mut panels.outliner, t("menu.outliner"));
        ui.checkbox(&mut panels.properties, t("menu.properties"));
        ui.separator();
        ui.menu_button(t("menu.camera"), |ui| {
            for preset in ViewPreset::ALL {
                if ui
                    .selectable_label(state.view.current_view == preset, preset_name(preset))
                    .clicked()
                {
                    toolbar::action_set_view(views, preset);
                    ui.close_menu();
                }
            }
        });
        ui.separator();
        ui.menu_button(t("menu.language"), |ui| {
            for language in Language::all() {
                let current = state.settings.ui.language == *language;
                if ui.selectable_label(current, language.display_name()).clicked() {
                    state.settings.ui.language = *language;
                    set_lang((*language).into());
                    ui.close_menu();
                }
            }
        });
    });
}

/// Show the settings menu
pub fn settings_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button(t("menu.settings"), |ui| {
        if ui.button(t("menu.preferences")).clicked() {
            state.view.show_settings_window = true;
            ui.close_menu();
        }
    });
}

/// Show the settings window
pub fn settings_window(ctx: &egui::Context, state: &mut AppState) {
    let mut open = state.view.show_settings_window;
    egui::Window::new(t("settings.title"))
        .open(&mut open)
        .resizable(true)
        .default_width(360.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                show_snap_settings(ui, &mut state.settings);
                show_interaction_settings(ui, &mut state.settings);
                show_grid_settings(ui, &mut state.settings);
                show_viewport_settings(ui, &mut state.settings);
                show_ui_settings(ui, &mut state.settings);
                show_settings_buttons(ui, state);
            });
        });
    state.view.show_settings_window &= open;
}

fn show_snap_settings(ui: &mut egui::Ui, settings: &mut AppSettings) {
    ui.heading(t("settings.snap"));
    let snap = &mut settings.snap;
    ui.checkbox(&mut snap.enabled, t("settings.snap_enabled"));

    ui.horizontal(|ui| {
        ui.label(t("settings.grid_size"));
        ui.add(
            egui::DragValue::new(&mut snap.grid_size)
                .speed(0.05)
                .range(0.05..=5.0),
        );
    });
    ui.horizontal(|ui| {
        ui.label(t("settings.edge_threshold"));
        ui.add(
            egui::DragValue::new(&mut snap.edge_threshold)
                .speed(0.01)
                .range(0.0..=1.0),
        );
    });
    ui.horizontal(|ui| {
        ui.label(t("settings.margin"));
        ui.add(
            egui::DragValue::new(&mut snap.boundary_margin)
                .speed(0.01)
                .range(0.0..=0.5),
        );
    });
    ui.add_space(10.0);
}

fn show_interaction_settings(ui: &mut egui::Ui, settings: &mut AppSettings) {
    ui.heading(t("settings.interaction"));
    let interaction = &mut settings.interaction;
    ui.horizontal(|ui| {
        ui.label(t("settings.drag_threshold"));
        ui.add(
            egui::DragValue::new(&mut interaction.drag_threshold_px)
                .speed(0.5)
                .range(0.0..=50.0),
        );
    });
    ui.horizontal(|ui| {
        ui.label(t("settings.smoothing"));
        ui.add(egui::Slider::new(&mut interaction.drag_smoothing, 0.05..=1.0));
    });
    ui.add_space(10.0);
}

fn show_grid_settings(ui: &mut egui::Ui, settings: &mut AppSettings) {
    ui.heading(t("settings.grid"));
    ui.checkbox(&mut settings.grid.visible, t("settings.grid_visible"));
    ui.horizontal(|ui| {
        ui.label(t("settings.grid_opacity"));
        ui.add(egui::Slider::new(&mut settings.grid.opacity, 0.0..=1.0));
    });
    ui.add_space(10.0);
}

fn color_row(ui: &mut egui::Ui, label: &str, rgb: &mut [u8; 3]) {
    ui.horizontal(|ui| {
        ui.label(label);
        let mut color = egui::Color32::from_rgb(rgb[0], rgb[1], rgb[2]);
        if ui.color_edit_button_srgba(&mut color).changed() {
            *rgb = [color.r(), color.g(), color.b()];
        }
    });
}

fn show_viewport_settings(ui: &mut egui::Ui, settings: &mut AppSettings) {
    ui.heading(t("settings.viewport"));
    let viewport = &mut settings.viewport;
    color_row(ui, t("settings.bg_color"), &mut viewport.background_color);
    color_row(ui, t("settings.sel_color"), &mut viewport.selection_color);
    color_row(ui, t("settings.furniture_color"), &mut viewport.furniture_color);
    ui.add_space(10.0);
}

fn show_ui_settings(ui: &mut egui::Ui, settings: &mut AppSettings) {
    ui.heading(t("settings.ui"));
    ui.checkbox(&mut settings.ui.dark_theme, t("settings.dark_theme"));
    ui.add_space(10.0);
}

fn show_settings_buttons(ui: &mut egui::Ui, state: &mut AppState) {
    ui.separator();
    ui.horizontal(|ui| {
        if ui.button(t("settings.save")).clicked() {
            if let Err(e) = state.settings.save() {
                tracing::error!("{e}");
            }
        }
        if ui.button(t("settings.reset")).clicked() {
            let language = state.settings.ui.language;
            state.settings = AppSettings::default();
            state.settings.ui.language = language;
        }
        if ui.button(t("settings.close")).clicked() {
            state.view.show_settings_window = false;
        }
    });
}
