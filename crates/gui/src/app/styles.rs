//! Application style configuration

use eframe::egui;

/// Configure application styles for the chosen theme
pub fn configure_styles(ctx: &egui::Context, dark: bool) {
    let mut style = (*ctx.style()).clone();

    if dark {
        style.visuals = egui::Visuals::dark();
        style.visuals.panel_fill = egui::Color32::from_rgb(30, 30, 34);
        style.visuals.window_fill = egui::Color32::from_rgb(35, 35, 40);
        style.visuals.selection.bg_fill = egui::Color32::from_rgb(40, 80, 140);
    } else {
        style.visuals = egui::Visuals::light();
        style.visuals.selection.bg_fill = egui::Color32::from_rgb(150, 190, 240);
    }

    // Rounding
    style.visuals.window_corner_radius = egui::CornerRadius::same(6);
    style.visuals.menu_corner_radius = egui::CornerRadius::same(4);
    style.visuals.widgets.noninteractive.corner_radius = egui::CornerRadius::same(3);
    style.visuals.widgets.inactive.corner_radius = egui::CornerRadius::same(3);
    style.visuals.widgets.hovered.corner_radius = egui::CornerRadius::same(3);
    style.visuals.widgets.active.corner_radius = egui::CornerRadius::same(3);

    // Spacing
    style.spacing.item_spacing = egui::vec2(6.0, 4.0);
    style.spacing.button_padding = egui::vec2(6.0, 3.0);
    style.spacing.menu_margin = egui::Margin::same(4);

    ctx.set_style(style);
}
