use time::OffsetDateTime;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SituationId(pub u64);

/// Shown when a report is filed with an empty value field.
pub const DEFAULT_VALUE: &str = "Monitoring...";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Stable,
    Elevated,
    Critical,
    Unknown,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::Stable,
        Status::Elevated,
        Status::Critical,
        Status::Unknown,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Status::Stable => "STABLE",
            Status::Elevated => "ELEVATED",
            Status::Critical => "CRITICAL",
            Status::Unknown => "UNKNOWN",
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Unknown
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub fn glyph(self) -> &'static str {
        match self {
            Trend::Up => "▲",
            Trend::Down => "▼",
            Trend::Stable => "●",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Situation {
    pub id: SituationId,
    /// Stored uppercased; the board normalizes on insert.
    pub title: String,
    pub status: Status,
    pub value: String,
    pub last_update: OffsetDateTime,
    pub trend: Trend,
}
