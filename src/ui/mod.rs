mod cards;
mod clock;
mod defcon;
mod modal;
mod radar;

use crate::app::SituationRoomApp;
use crate::model::Status;
use eframe::egui;

pub fn render_app(ctx: &egui::Context, frame: &mut eframe::Frame, app: &mut SituationRoomApp) {
    menu_bar(ctx, frame, app);
    header(ctx, app);
    defcon::defcon_bar(ctx, app);
    status_bar(ctx, app);

    egui::SidePanel::left("radar_panel")
        .resizable(true)
        .default_width(320.0)
        .show(ctx, |ui| radar::radar_panel(ui, app));

    egui::CentralPanel::default().show(ctx, |ui| cards::situation_grid(ui, app));

    modal::add_situation_modal(ctx, app);
    about_window(ctx, app);
}

fn menu_bar(ctx: &egui::Context, frame: &mut eframe::Frame, app: &mut SituationRoomApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("New situation report...").clicked() {
                    app.open_add_modal();
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Quit").clicked() {
                    let _ = frame; // keep signature stable if we later use frame APIs
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Reset zoom").clicked() {
                    ctx.set_zoom_factor(1.0);
                    ui.close_menu();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    app.ui.show_about = true;
                    ui.close_menu();
                }
            });
        });
    });
}

fn header(ctx: &egui::Context, app: &mut SituationRoomApp) {
    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.heading(
                    egui::RichText::new("◉ THE SITUATION ROOM")
                        .color(egui::Color32::from_rgb(0, 255, 65))
                        .strong(),
                );
                ui.label(
                    egui::RichText::new("MONITORING COMMAND CENTER v2.0.24")
                        .weak()
                        .small(),
                );
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                clock::clock_widget(ui, app);
            });
        });
        ui.add_space(4.0);
    });
}

fn about_window(ctx: &egui::Context, app: &mut SituationRoomApp) {
    if !app.ui.show_about {
        return;
    }

    egui::Window::new("About The Situation Room")
        .open(&mut app.ui.show_about)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label("A purely decorative command center for everyday situations.");
            ui.label("All readings are simulated; nothing leaves this window.");
        });
}

fn status_bar(ctx: &egui::Context, app: &mut SituationRoomApp) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Situations: {}", app.board.len()));
            ui.separator();
            ui.label(format!("Critical: {}", app.board.critical_count()));
            ui.separator();
            ui.colored_label(
                defcon_color(app.alert.get()),
                format!("DEFCON {}: {}", app.alert.get(), app.alert.label()),
            );
            if let Some(id) = app.sim.last_touched() {
                if let Some(s) = app.board.get(id) {
                    ui.separator();
                    ui.label(format!("Last ping: {}", s.title));
                }
            }
        });
    });
}

pub fn status_color(status: Status) -> egui::Color32 {
    match status {
        Status::Stable => egui::Color32::from_rgb(0, 255, 65),
        Status::Elevated => egui::Color32::from_rgb(255, 184, 0),
        Status::Critical => egui::Color32::from_rgb(255, 7, 58),
        Status::Unknown => egui::Color32::from_rgb(0, 212, 255),
    }
}

pub fn defcon_color(step: u8) -> egui::Color32 {
    match step {
        1 => egui::Color32::from_rgb(0, 255, 65),
        2 => egui::Color32::from_rgb(127, 255, 0),
        3 => egui::Color32::from_rgb(255, 184, 0),
        4 => egui::Color32::from_rgb(255, 107, 0),
        _ => egui::Color32::from_rgb(255, 7, 58),
    }
}
