use std::collections::HashMap;
use std::time::{Duration, Instant};

use rand::Rng;
use time::OffsetDateTime;

use crate::model::{SituationBoard, SituationId, Status};
use crate::util::interval::Interval;

/// Unsaved add-report form. Lives only while the modal is open.
#[derive(Clone, Default)]
pub struct DraftForm {
    pub title: String,
    pub value: String,
    pub status: Status,
}

/// Per-card highlight toggle. The handle is rebuilt whenever the card's
/// status changes; only CRITICAL cards ever flip.
pub struct CardFlash {
    status: Status,
    interval: Interval,
    on: bool,
}

impl CardFlash {
    pub fn new(status: Status, period: Duration, now: Instant) -> Self {
        Self {
            status,
            interval: Interval::new(period, now),
            on: false,
        }
    }

    pub fn advance(&mut self, status: Status, period: Duration, now: Instant) {
        if status != self.status {
            *self = Self::new(status, period, now);
            return;
        }
        if self.interval.ticked(now) && self.status == Status::Critical {
            self.on = !self.on;
        }
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}

/// Clock readout state; the rendered strings only move when the interval
/// fires, even though frames come much faster.
pub struct ClockState {
    interval: Interval,
    now: OffsetDateTime,
}

impl ClockState {
    pub fn new(period: Duration, now: Instant, wall: OffsetDateTime) -> Self {
        Self {
            interval: Interval::new(period, now),
            now: wall,
        }
    }

    pub fn advance(&mut self, now: Instant, wall: OffsetDateTime) {
        if self.interval.ticked(now) {
            self.now = wall;
        }
    }

    pub fn time(&self) -> OffsetDateTime {
        self.now
    }
}

const BLIP_COUNT: usize = 5;
const SWEEP_PERIOD_SECS: f32 = 4.0;

/// Decorative radar. Blip positions (fractions of the scope rect) are rolled
/// once at startup and never recomputed.
pub struct RadarState {
    blips: [(f32, f32); BLIP_COUNT],
    started: Instant,
}

impl RadarState {
    pub fn new(now: Instant) -> Self {
        let mut rng = rand::thread_rng();
        let mut blips = [(0.0f32, 0.0f32); BLIP_COUNT];
        for blip in &mut blips {
            *blip = (
                0.2 + rng.gen::<f32>() * 0.6,
                0.2 + rng.gen::<f32>() * 0.6,
            );
        }
        Self {
            blips,
            started: now,
        }
    }

    pub fn blips(&self) -> &[(f32, f32)] {
        &self.blips
    }

    pub fn sweep_angle(&self, now: Instant) -> f32 {
        let secs = now.duration_since(self.started).as_secs_f32();
        (secs / SWEEP_PERIOD_SECS).fract() * std::f32::consts::TAU
    }
}

pub struct UiState {
    pub show_add_modal: bool,
    pub show_about: bool,
    pub draft: DraftForm,
    pub flash: HashMap<SituationId, CardFlash>,
    pub clock: ClockState,
    pub radar: RadarState,
}

impl UiState {
    pub fn new(clock_period: Duration, now: Instant, wall: OffsetDateTime) -> Self {
        Self {
            show_add_modal: false,
            show_about: false,
            draft: DraftForm::default(),
            flash: HashMap::new(),
            clock: ClockState::new(clock_period, now, wall),
            radar: RadarState::new(now),
        }
    }

    /// Advance every card's flash handle and drop handles whose card is gone,
    /// so no timer outlives the view it belongs to.
    pub fn advance_flash(&mut self, board: &SituationBoard, period: Duration, now: Instant) {
        self.flash.retain(|id, _| board.get(*id).is_some());
        for s in board.iter() {
            self.flash
                .entry(s.id)
                .or_insert_with(|| CardFlash::new(s.status, period, now))
                .advance(s.status, period, now);
        }
    }

    pub fn flash_on(&self, id: SituationId) -> bool {
        self.flash.get(&id).is_some_and(CardFlash::is_on)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn critical_cards_alternate_every_tick() {
        let t0 = Instant::now();
        let mut flash = CardFlash::new(Status::Critical, ms(500), t0);

        assert!(!flash.is_on());
        flash.advance(Status::Critical, ms(500), t0 + ms(500));
        assert!(flash.is_on());
        flash.advance(Status::Critical, ms(500), t0 + ms(1000));
        assert!(!flash.is_on());
        flash.advance(Status::Critical, ms(500), t0 + ms(1500));
        assert!(flash.is_on());
    }

    #[test]
    fn quiet_statuses_never_light_up() {
        let t0 = Instant::now();
        for status in [Status::Stable, Status::Elevated, Status::Unknown] {
            let mut flash = CardFlash::new(status, ms(500), t0);
            for n in 1..=10u64 {
                flash.advance(status, ms(500), t0 + ms(500 * n));
                assert!(!flash.is_on(), "{} lit up", status.label());
            }
        }
    }

    #[test]
    fn status_change_rebuilds_the_handle() {
        let t0 = Instant::now();
        let mut flash = CardFlash::new(Status::Critical, ms(500), t0);
        flash.advance(Status::Critical, ms(500), t0 + ms(500));
        assert!(flash.is_on());

        // Downgrade clears the highlight and restarts the timer.
        flash.advance(Status::Stable, ms(500), t0 + ms(600));
        assert!(!flash.is_on());
        flash.advance(Status::Stable, ms(500), t0 + ms(1200));
        assert!(!flash.is_on());
    }

    #[test]
    fn clock_only_moves_on_its_own_tick() {
        let t0 = Instant::now();
        let wall = |unix| OffsetDateTime::from_unix_timestamp(unix).unwrap();
        let mut clock = ClockState::new(ms(1000), t0, wall(0));

        clock.advance(t0 + ms(300), wall(1));
        assert_eq!(clock.time(), wall(0));
        clock.advance(t0 + ms(1000), wall(1));
        assert_eq!(clock.time(), wall(1));
    }

    #[test]
    fn radar_blips_are_fixed_and_in_bounds() {
        let radar = RadarState::new(Instant::now());
        let first: Vec<(f32, f32)> = radar.blips().to_vec();
        assert_eq!(first.len(), 5);
        for &(x, y) in radar.blips() {
            assert!((0.2..=0.8).contains(&x));
            assert!((0.2..=0.8).contains(&y));
        }
        assert_eq!(radar.blips(), first.as_slice());
    }
}
