use crate::app::SituationRoomApp;
use crate::model::{MAX_ALERT, MIN_ALERT};
use eframe::egui;

pub fn defcon_bar(ctx: &egui::Context, app: &mut SituationRoomApp) {
    egui::TopBottomPanel::top("defcon_bar").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            meter(ui, app);
            ui.separator();
            adjuster(ui, app);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button(egui::RichText::new("+ NEW SITUATION").strong())
                    .clicked()
                {
                    app.open_add_modal();
                }
            });
        });
        ui.add_space(6.0);
    });
}

fn meter(ui: &mut egui::Ui, app: &SituationRoomApp) {
    ui.vertical(|ui| {
        ui.label(egui::RichText::new("DEFCON STATUS").weak().small());
        ui.horizontal(|ui| {
            for step in MIN_ALERT..=MAX_ALERT {
                step_box(ui, step, app.alert.covers(step));
            }
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new(app.alert.label())
                    .color(super::defcon_color(app.alert.get()))
                    .strong(),
            );
        });
    });
}

fn step_box(ui: &mut egui::Ui, step: u8, lit: bool) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(26.0, 26.0), egui::Sense::hover());
    let painter = ui.painter_at(rect);

    let fill = if lit {
        super::defcon_color(step)
    } else {
        egui::Color32::from_gray(45)
    };
    let text = if lit {
        egui::Color32::BLACK
    } else {
        egui::Color32::from_gray(120)
    };

    painter.rect_filled(rect, egui::Rounding::same(3.0), fill);
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        step.to_string(),
        egui::FontId::monospace(14.0),
        text,
    );
}

fn adjuster(ui: &mut egui::Ui, app: &mut SituationRoomApp) {
    ui.vertical(|ui| {
        ui.label(egui::RichText::new("ADJUST DEFCON").weak().small());
        ui.horizontal(|ui| {
            for step in MIN_ALERT..=MAX_ALERT {
                let selected = app.alert.get() == step;
                let label = egui::RichText::new(step.to_string()).monospace();
                let button = if selected {
                    egui::Button::new(label.color(egui::Color32::BLACK))
                        .fill(super::defcon_color(step))
                } else {
                    egui::Button::new(label)
                };
                if ui.add(button).clicked() {
                    app.set_alert(step);
                }
            }
        });
    });
}
