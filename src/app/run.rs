use crate::app::SituationRoomApp;
use eframe::egui;

pub fn run() -> eframe::Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("The Situation Room")
            .with_inner_size([1280.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "The Situation Room",
        native_options,
        Box::new(|_cc| Box::<SituationRoomApp>::default()),
    )
}
