//! GUI entry point for the garage tracker

mod app;
mod records_panel;
mod status;
mod vehicle_panel;

use app::GarageApp;
use eframe::egui;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Fast and Furious Garage",
        options,
        Box::new(|cc| Ok(Box::new(GarageApp::new(cc)))),
    )
}
