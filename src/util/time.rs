use time::{Month, OffsetDateTime, Weekday};

/// 24-hour wall clock, e.g. `14:03:07`.
pub fn clock_time(dt: OffsetDateTime) -> String {
    format!("{:02}:{:02}:{:02}", dt.hour(), dt.minute(), dt.second())
}

/// Uppercased short date, e.g. `THU, AUG 6, 2026`.
pub fn clock_date(dt: OffsetDateTime) -> String {
    format!(
        "{}, {} {}, {}",
        weekday_abbr(dt.weekday()),
        month_abbr(dt.month()),
        dt.day(),
        dt.year()
    )
}

/// Card footer timestamp; same shape as the clock readout.
pub fn ping_time(dt: OffsetDateTime) -> String {
    clock_time(dt)
}

fn weekday_abbr(day: Weekday) -> &'static str {
    match day {
        Weekday::Monday => "MON",
        Weekday::Tuesday => "TUE",
        Weekday::Wednesday => "WED",
        Weekday::Thursday => "THU",
        Weekday::Friday => "FRI",
        Weekday::Saturday => "SAT",
        Weekday::Sunday => "SUN",
    }
}

fn month_abbr(month: Month) -> &'static str {
    match month {
        Month::January => "JAN",
        Month::February => "FEB",
        Month::March => "MAR",
        Month::April => "APR",
        Month::May => "MAY",
        Month::June => "JUN",
        Month::July => "JUL",
        Month::August => "AUG",
        Month::September => "SEP",
        Month::October => "OCT",
        Month::November => "NOV",
        Month::December => "DEC",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_strings_for_known_instant() {
        // 2026-08-06 01:02:03 UTC, a Thursday.
        let dt = OffsetDateTime::from_unix_timestamp(1_785_978_123).unwrap();
        assert_eq!(clock_time(dt), "01:02:03");
        assert_eq!(clock_date(dt), "THU, AUG 6, 2026");
        assert_eq!(ping_time(dt), clock_time(dt));
    }

    #[test]
    fn midnight_keeps_leading_zeros() {
        let dt = OffsetDateTime::from_unix_timestamp(0).unwrap();
        assert_eq!(clock_time(dt), "00:00:00");
        assert_eq!(clock_date(dt), "THU, JAN 1, 1970");
    }
}
