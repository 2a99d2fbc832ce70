//! k-in-a-row GUI
//!
//! Play Connect Four, Gomoku or tic-tac-toe against the engine or another
//! player. Set `RUST_LOG=kinarow=debug` to follow the search.

use kinarow::ui::KinarowApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("k-in-a-row"),
        ..Default::default()
    };

    eframe::run_native(
        "kinarow",
        options,
        Box::new(|cc| Ok(Box::new(KinarowApp::new(cc)))),
    )
}
