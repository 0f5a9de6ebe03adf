mod run;
mod ui_state;

use std::time::Instant;

use eframe::egui;
use time::OffsetDateTime;

use crate::model::{AlertLevel, SituationBoard};
use crate::sim::{SimConfig, Simulator};

pub use run::run;
pub use ui_state::{DraftForm, UiState};

pub struct SituationRoomApp {
    pub board: SituationBoard,
    pub alert: AlertLevel,
    pub config: SimConfig,
    pub sim: Simulator,
    pub ui: UiState,
}

impl SituationRoomApp {
    pub fn new(config: SimConfig, now: Instant, wall: OffsetDateTime) -> Self {
        Self {
            board: SituationBoard::demo(wall),
            alert: AlertLevel::default(),
            sim: Simulator::new(config.refresh_period, now),
            ui: UiState::new(config.clock_period, now, wall),
            config,
        }
    }

    /// One cooperative scheduling pass; called at the top of every frame.
    pub fn tick(&mut self, now: Instant, wall: OffsetDateTime) {
        self.sim.tick(&mut self.board, now, wall);
        self.ui.clock.advance(now, wall);
        self.ui.advance_flash(&self.board, self.config.flash_period, now);
    }

    pub fn open_add_modal(&mut self) {
        self.ui.show_add_modal = true;
    }

    /// Dismissing the modal throws the draft away.
    pub fn cancel_add(&mut self) {
        self.ui.show_add_modal = false;
        self.ui.draft = DraftForm::default();
    }

    /// Returns false (modal stays open, draft kept) when the title is blank.
    pub fn submit_draft(&mut self, wall: OffsetDateTime) -> bool {
        let DraftForm {
            title,
            value,
            status,
        } = self.ui.draft.clone();

        match self.board.file_report(&title, &value, status, wall) {
            Some(id) => {
                tracing::info!(id = id.0, "situation report filed");
                self.ui.draft = DraftForm::default();
                self.ui.show_add_modal = false;
                true
            }
            None => false,
        }
    }

    pub fn set_alert(&mut self, level: u8) {
        self.alert.set(level);
        tracing::info!(
            level = self.alert.get(),
            status = self.alert.label(),
            "defcon changed"
        );
    }
}

impl Default for SituationRoomApp {
    fn default() -> Self {
        Self::new(SimConfig::default(), Instant::now(), OffsetDateTime::now_utc())
    }
}

impl eframe::App for SituationRoomApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.tick(Instant::now(), OffsetDateTime::now_utc());
        crate::ui::render_app(ctx, frame, self);

        // The radar sweep animates continuously; repainting at its cadence
        // also keeps the clock, flash, and refresh timers serviced.
        ctx.request_repaint_after(std::time::Duration::from_millis(33));
    }
}
