//! Areal desktop application using egui/eframe.
//!
//! This is the main entry point for the desktop Areal application.

use areal_app::app::ArealApp;

fn main() -> eframe::Result<()> {
    const APP_ID: &str = "io.github.areal-app.areal";

    better_panic::install();
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_app_id(APP_ID)
            .with_resizable(true)
            .with_position([100.0, 100.0])
            .with_inner_size((400.0, 300.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Area Calculator",
        options,
        Box::new(|cc| Ok(Box::new(ArealApp::new(cc)))),
    )
}
