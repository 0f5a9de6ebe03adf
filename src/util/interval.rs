use std::time::{Duration, Instant};

/// Repeating-timer handle. The owning view holds it and drops it to cancel;
/// nothing fires outside an explicit `ticked` call on the UI thread.
pub struct Interval {
    period: Duration,
    next: Instant,
}

impl Interval {
    pub fn new(period: Duration, now: Instant) -> Self {
        Self {
            period,
            next: now + period,
        }
    }

    /// Consume at most one tick. Missed periods are skipped, not replayed,
    /// so a stalled frame does not burst the owner with catch-up ticks.
    pub fn ticked(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }
        while self.next <= now {
            self.next += self.period;
        }
        true
    }
}
