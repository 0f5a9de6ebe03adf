/// Session-global DEFCON level, 1 (calm) through 5 (chaos).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlertLevel(u8);

pub const MIN_ALERT: u8 = 1;
pub const MAX_ALERT: u8 = 5;

impl AlertLevel {
    pub fn new(level: u8) -> Self {
        Self(level.clamp(MIN_ALERT, MAX_ALERT))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn set(&mut self, level: u8) {
        self.0 = level.clamp(MIN_ALERT, MAX_ALERT);
    }

    pub fn label(self) -> &'static str {
        match self.0 {
            1 => "MAXIMUM CHILL",
            2 => "SLIGHT CONCERN",
            3 => "MODERATE ALERT",
            4 => "ELEVATED TENSION",
            _ => "TOTAL CHAOS",
        }
    }

    /// Whether a ladder step is lit at this level (steps 1..=level glow).
    pub fn covers(self, step: u8) -> bool {
        step <= self.0
    }
}

impl Default for AlertLevel {
    fn default() -> Self {
        Self::new(3)
    }
}
