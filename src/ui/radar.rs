use std::time::Instant;

use crate::app::SituationRoomApp;
use eframe::egui;

const SCOPE_GREEN: egui::Color32 = egui::Color32::from_rgb(0, 255, 65);

pub fn radar_panel(ui: &mut egui::Ui, app: &mut SituationRoomApp) {
    ui.add_space(8.0);
    ui.label(egui::RichText::new("SECTOR SCAN").weak().small());
    ui.add_space(4.0);

    scope(ui, app);
    ui.add_space(12.0);
    stats(ui, app);
}

fn scope(ui: &mut egui::Ui, app: &SituationRoomApp) {
    let size = ui.available_width().clamp(120.0, 300.0);
    let (rect, _) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());
    let painter = ui.painter_at(rect);

    let center = rect.center();
    let radius = size * 0.5 - 4.0;
    let dim = SCOPE_GREEN.gamma_multiply(0.35);

    painter.rect_filled(rect, egui::Rounding::same(4.0), egui::Color32::from_gray(12));
    for f in [1.0, 0.66, 0.33] {
        painter.circle_stroke(center, radius * f, egui::Stroke::new(1.0, dim));
    }
    painter.line_segment(
        [
            egui::pos2(center.x - radius, center.y),
            egui::pos2(center.x + radius, center.y),
        ],
        egui::Stroke::new(1.0, dim),
    );
    painter.line_segment(
        [
            egui::pos2(center.x, center.y - radius),
            egui::pos2(center.x, center.y + radius),
        ],
        egui::Stroke::new(1.0, dim),
    );

    let angle = app.ui.radar.sweep_angle(Instant::now());
    let tip = center + radius * egui::vec2(angle.cos(), angle.sin());
    painter.line_segment([center, tip], egui::Stroke::new(2.0, SCOPE_GREEN));
    painter.circle_filled(center, 3.0, SCOPE_GREEN);

    for &(fx, fy) in app.ui.radar.blips() {
        let p = rect.left_top() + egui::vec2(fx * rect.width(), fy * rect.height());
        painter.circle_filled(p, 3.0, SCOPE_GREEN);
    }
}

fn stats(ui: &mut egui::Ui, app: &SituationRoomApp) {
    ui.horizontal(|ui| {
        stat(ui, app.board.len(), "ACTIVE", SCOPE_GREEN);
        ui.add_space(18.0);
        stat(
            ui,
            app.board.critical_count(),
            "CRITICAL",
            super::status_color(crate::model::Status::Critical),
        );
    });
}

fn stat(ui: &mut egui::Ui, value: usize, label: &str, color: egui::Color32) {
    ui.vertical(|ui| {
        ui.label(
            egui::RichText::new(value.to_string())
                .monospace()
                .size(26.0)
                .color(color),
        );
        ui.label(egui::RichText::new(label).weak().small());
    });
}
