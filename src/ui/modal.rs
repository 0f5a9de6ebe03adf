use crate::app::SituationRoomApp;
use crate::model::Status;
use eframe::egui;
use time::OffsetDateTime;

pub fn add_situation_modal(ctx: &egui::Context, app: &mut SituationRoomApp) {
    if !app.ui.show_add_modal {
        return;
    }

    let mut open = true;
    egui::Window::new("▶ NEW SITUATION REPORT")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.set_width(320.0);

            ui.label(egui::RichText::new("SITUATION TITLE").weak().small());
            ui.add(
                egui::TextEdit::singleline(&mut app.ui.draft.title)
                    .hint_text("DESCRIBE THE SITUATION...")
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(8.0);

            ui.label(egui::RichText::new("CURRENT VALUE").weak().small());
            ui.add(
                egui::TextEdit::singleline(&mut app.ui.draft.value)
                    .hint_text("STATUS VALUE...")
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(8.0);

            ui.label(egui::RichText::new("THREAT LEVEL").weak().small());
            ui.horizontal(|ui| {
                for status in Status::ALL {
                    let selected = app.ui.draft.status == status;
                    let label = egui::RichText::new(status.label())
                        .monospace()
                        .color(super::status_color(status));
                    if ui
                        .add(egui::SelectableLabel::new(selected, label))
                        .clicked()
                    {
                        app.ui.draft.status = status;
                    }
                }
            });

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui
                    .button(egui::RichText::new("CONFIRM INTEL").strong())
                    .clicked()
                {
                    // A blank title keeps the modal open; nothing to report.
                    app.submit_draft(OffsetDateTime::now_utc());
                }
                if ui.button("CANCEL").clicked() {
                    app.cancel_add();
                }
            });
        });

    if !open {
        app.cancel_add();
    }
}
