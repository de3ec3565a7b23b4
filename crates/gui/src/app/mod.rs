//! Main application module

mod keyboard;
mod menus;
mod styles;

use eframe::egui;

use crate::i18n::set_lang;
use crate::state::{AppSettings, AppState};
use crate::ui::{library, properties, scene_tree, status_bar, toolbar};
use crate::viewport::ViewportPanel;

/// Main application
pub struct PlannerApp {
    state: AppState,
    viewport: ViewportPanel,
    /// Last applied theme (to detect changes)
    dark_theme: bool,
}

impl PlannerApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let state = AppState::with_settings(AppSettings::load());
        set_lang(state.settings.ui.language.into());

        let dark_theme = state.settings.ui.dark_theme;
        styles::configure_styles(&cc.egui_ctx, dark_theme);

        let viewport = ViewportPanel::new(&state);
        Self {
            state,
            viewport,
            dark_theme,
        }
    }
}

impl eframe::App for PlannerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply theme if changed
        if self.state.settings.ui.dark_theme != self.dark_theme {
            self.dark_theme = self.state.settings.ui.dark_theme;
            styles::configure_styles(ctx, self.dark_theme);
        }

        keyboard::handle_keyboard(ctx, &mut self.state, &mut self.viewport);

        let views = self.viewport.view_commands();

        // ── Menu bar ──────────────────────────────────────────
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                menus::edit_menu(ui, &mut self.state);
                menus::view_menu(ui, &mut self.state, &views);
                menus::settings_menu(ui, &mut self.state);
            });
        });

        // ── Settings window ──────────────────────────────────
        menus::settings_window(ctx, &mut self.state);

        // ── Toolbar ───────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .frame(
                egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                toolbar::show(ui, &mut self.state, &views);
            });

        // ── Status bar ───────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(22.0)
            .frame(
                egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(8, 2)),
            )
            .show(ctx, |ui| {
                status_bar::show(
                    ui,
                    &self.state,
                    self.viewport.is_moving(),
                    self.viewport.is_library_dragging(),
                );
            });

        // ── Left panel: Library + Outliner ───────────────────
        let panels = &self.state.view.panels;
        if panels.library || panels.outliner {
            let (show_library, show_outliner) = (panels.library, panels.outliner);
            egui::SidePanel::left("left_panel")
                .default_width(210.0)
                .width_range(160.0..=360.0)
                .resizable(true)
                .frame(
                    egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::same(6)),
                )
                .show(ctx, |ui| {
                    if show_library {
                        library::show(ui, &mut self.viewport);
                        ui.add_space(6.0);
                    }
                    if show_outliner {
                        ui.separator();
                        scene_tree::show(ui, &mut self.state);
                    }
                });
        }

        // ── Right panel: Properties ──────────────────────────
        if self.state.view.panels.properties {
            egui::SidePanel::right("right_panel")
                .default_width(270.0)
                .width_range(200.0..=420.0)
                .resizable(true)
                .frame(
                    egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::same(6)),
                )
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical()
                        .id_salt("props_scroll")
                        .show(ui, |ui| {
                            properties::show(ui, &mut self.state);
                        });
                });
        }

        // ── Central panel: 3D viewport ───────────────────────
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.viewport.show(ui, &mut self.state);
            });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(e) = self.state.settings.save() {
            tracing::warn!("Failed to save settings: {e}");
        }
    }
}
