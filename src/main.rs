mod aggregate;
mod app;
mod config;
mod format;
mod github;
mod language;
mod model;
mod platform;

use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1180.0, 820.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Vulnerability Sentinel",
        native_options,
        Box::new(|_cc| Box::new(app::AppState::default())),
    )
}
