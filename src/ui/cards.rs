use crate::app::SituationRoomApp;
use crate::model::{Situation, Trend};
use crate::util::time::ping_time;
use eframe::egui;

const CARD_WIDTH: f32 = 240.0;

pub fn situation_grid(ui: &mut egui::Ui, app: &SituationRoomApp) {
    egui::ScrollArea::vertical()
        .id_source("situation_grid_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.add_space(6.0);
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing = egui::vec2(10.0, 10.0);
                for s in app.board.iter() {
                    situation_card(ui, s, app.ui.flash_on(s.id));
                }
            });
        });
}

fn situation_card(ui: &mut egui::Ui, s: &Situation, flash: bool) {
    let color = super::status_color(s.status);

    // Flashing cards swap to a hot fill and a heavier border.
    let fill = if flash {
        egui::Color32::from_rgb(58, 8, 18)
    } else {
        ui.visuals().extreme_bg_color
    };
    let stroke_width = if flash { 2.0 } else { 1.0 };

    egui::Frame::none()
        .fill(fill)
        .stroke(egui::Stroke::new(stroke_width, color))
        .rounding(egui::Rounding::same(4.0))
        .inner_margin(egui::Margin::same(10.0))
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);

            ui.horizontal(|ui| {
                ui.monospace(format!("[{:03}]", s.id.0));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(s.status.label())
                            .monospace()
                            .color(color)
                            .strong(),
                    );
                });
            });

            ui.label(egui::RichText::new(&s.title).strong().size(16.0));
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&s.value).monospace().size(15.0));
                ui.label(
                    egui::RichText::new(s.trend.glyph()).color(trend_color(s.trend)),
                );
            });

            ui.add_space(6.0);
            ui.label(
                egui::RichText::new(format!("LAST PING: {}", ping_time(s.last_update)))
                    .weak()
                    .small(),
            );
        });
}

fn trend_color(trend: Trend) -> egui::Color32 {
    match trend {
        Trend::Up => egui::Color32::from_rgb(0, 255, 65),
        Trend::Down => egui::Color32::from_rgb(255, 7, 58),
        Trend::Stable => egui::Color32::from_gray(150),
    }
}
