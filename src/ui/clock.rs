use crate::app::SituationRoomApp;
use crate::util::time::{clock_date, clock_time};
use eframe::egui;

pub fn clock_widget(ui: &mut egui::Ui, app: &SituationRoomApp) {
    let now = app.ui.clock.time();

    ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
        ui.label(egui::RichText::new("ZULU TIME").weak().small());
        ui.label(
            egui::RichText::new(clock_time(now))
                .monospace()
                .size(22.0)
                .color(egui::Color32::from_rgb(0, 255, 65)),
        );
        ui.label(egui::RichText::new(clock_date(now)).monospace().weak());
    });
}
