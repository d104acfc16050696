#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod analysis;
mod app;
mod constants;
mod data;
mod error;
mod state;
mod ui;

use app::TwinPlot;

fn main() {
    env_logger::init();

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "TwinPlot - Dual Axis Channel Viewer",
        options,
        Box::new(|_| Ok(Box::new(TwinPlot::default()))),
    )
    .unwrap();
}
