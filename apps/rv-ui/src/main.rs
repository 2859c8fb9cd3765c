#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod colormap;
mod input_helper;
mod views;

use app::ReyviewApp;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_title("Reyview"),
        ..Default::default()
    };

    eframe::run_native(
        "Reyview",
        options,
        Box::new(|cc| Ok(Box::new(ReyviewApp::new(cc)))),
    )
}
