use clap::Parser;
use eframe::egui;

use sensor_view::app::SensorViewApp;
use sensor_view::config::{Cli, ViewerConfig};
use sensor_view::state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    let cli = Cli::parse();
    let config = ViewerConfig::from_cli(&cli).unwrap_or_else(|e| {
        log::error!("{e}; using defaults");
        ViewerConfig::default()
    });

    let mut state = AppState::new(config.data_source(), config.language);
    state.load();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Sensor View",
        options,
        Box::new(|_cc| Ok(Box::new(SensorViewApp::new(state)))),
    )
}
