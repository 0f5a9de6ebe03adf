use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use time::OffsetDateTime;

use crate::model::{SituationBoard, SituationId};
use crate::util::interval::Interval;

/// Periods for the three cooperative timers. Defaults match the product
/// behavior; tests shrink them freely.
#[derive(Clone, Copy, Debug)]
pub struct SimConfig {
    pub refresh_period: Duration,
    pub flash_period: Duration,
    pub clock_period: Duration,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            refresh_period: Duration::from_secs(5),
            flash_period: Duration::from_millis(500),
            clock_period: Duration::from_secs(1),
        }
    }
}

/// Fake telemetry feed: every refresh period, one random situation gets its
/// `last_update` stamped to now. Titles, statuses, values and trends are
/// never altered here.
pub struct Simulator {
    interval: Interval,
    rng: StdRng,
    last_touched: Option<SituationId>,
}

impl Simulator {
    pub fn new(period: Duration, now: Instant) -> Self {
        Self::seeded(period, now, rand::random())
    }

    pub fn seeded(period: Duration, now: Instant, seed: u64) -> Self {
        Self {
            interval: Interval::new(period, now),
            rng: StdRng::seed_from_u64(seed),
            last_touched: None,
        }
    }

    pub fn tick(
        &mut self,
        board: &mut SituationBoard,
        now: Instant,
        wall: OffsetDateTime,
    ) -> Option<SituationId> {
        if !self.interval.ticked(now) {
            return None;
        }

        let touched = board.touch_random(&mut self.rng, wall);
        if let Some(id) = touched {
            tracing::debug!(id = id.0, "telemetry refresh");
            self.last_touched = Some(id);
        }
        touched
    }

    pub fn last_touched(&self) -> Option<SituationId> {
        self.last_touched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Situation;

    fn t(unix: i64) -> OffsetDateTime {
        OffsetDateTime::from_unix_timestamp(unix).unwrap()
    }

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn nothing_happens_before_the_period_elapses() {
        let t0 = Instant::now();
        let mut board = SituationBoard::demo(t(0));
        let mut sim = Simulator::seeded(ms(5000), t0, 1);

        assert!(sim.tick(&mut board, t0, t(1)).is_none());
        assert!(sim.tick(&mut board, t0 + ms(4999), t(2)).is_none());
        assert!(sim.last_touched().is_none());
        for s in board.iter() {
            assert_eq!(s.last_update, t(0));
        }
    }

    #[test]
    fn refresh_touches_timestamps_and_nothing_else() {
        let t0 = Instant::now();
        let mut board = SituationBoard::demo(t(0));
        let before: Vec<Situation> = board.iter().cloned().collect();
        let mut sim = Simulator::seeded(ms(5000), t0, 42);

        for n in 1..=8u64 {
            let id = sim
                .tick(&mut board, t0 + ms(5000 * n), t(n as i64))
                .unwrap();
            assert_eq!(sim.last_touched(), Some(id));
        }

        for (old, new) in before.iter().zip(board.iter()) {
            assert_eq!(old.title, new.title);
            assert_eq!(old.status, new.status);
            assert_eq!(old.value, new.value);
            assert_eq!(old.trend, new.trend);
            assert!(new.last_update >= old.last_update);
        }
    }

    #[test]
    fn refresh_timestamps_never_move_backwards() {
        let t0 = Instant::now();
        let mut board = SituationBoard::demo(t(0));
        let mut sim = Simulator::seeded(ms(100), t0, 9);

        let mut wall = 0i64;
        for n in 1..=50u64 {
            let mut latest: Vec<OffsetDateTime> =
                board.iter().map(|s| s.last_update).collect();
            wall += 1;
            sim.tick(&mut board, t0 + ms(100 * n), t(wall));
            for (prev, s) in latest.drain(..).zip(board.iter()) {
                assert!(s.last_update >= prev);
            }
        }
    }
}
