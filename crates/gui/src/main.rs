mod app;
pub mod i18n;
mod ui;
mod viewport;

// Re-export library modules so that `crate::state` resolves to the lib crate
// types everywhere in the binary.
pub use room_planner_lib::state;

use app::PlannerApp;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "room_planner=info,room_planner_lib=info".into()),
        )
        .init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Room Planner")
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "room-planner",
        native_options,
        Box::new(|cc| Ok(Box::new(PlannerApp::new(cc)))),
    ) {
        tracing::error!("Failed to start application: {e}");
    }
}
