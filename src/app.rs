use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SensorViewApp {
    pub state: AppState,
}

impl SensorViewApp {
    /// Wrap a state whose initial load has already run.
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for SensorViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: statistics ----
        egui::TopBottomPanel::bottom("stats_panel").show(ctx, |ui| {
            panels::stats_panel(ui, &self.state);
        });

        // ---- Chart above, table below ----
        egui::TopBottomPanel::top("chart_panel")
            .resizable(true)
            .default_height(ctx.screen_rect().height() * 0.4)
            .show(ctx, |ui| {
                plot::time_series_plot(ui, &self.state);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            table::reading_table(ui, &mut self.state);
        });
    }
}
