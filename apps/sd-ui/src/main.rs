#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod views;

use app::SalesDashApp;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_title("Sales Performance Dashboard"),
        ..Default::default()
    };

    eframe::run_native(
        "Sales Performance Dashboard",
        options,
        Box::new(|cc| Ok(Box::new(SalesDashApp::new(cc)))),
    )
}
