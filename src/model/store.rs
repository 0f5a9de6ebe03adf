use rand::Rng;
use time::OffsetDateTime;

use crate::model::{Situation, SituationId, Status, Trend, DEFAULT_VALUE};

#[derive(Default)]
pub struct SituationBoard {
    situations: Vec<Situation>,
    next_id: u64,
}

impl SituationBoard {
    pub fn len(&self) -> usize {
        self.situations.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Situation> {
        self.situations.iter()
    }

    pub fn get(&self, id: SituationId) -> Option<&Situation> {
        self.situations.iter().find(|s| s.id == id)
    }

    pub fn critical_count(&self) -> usize {
        self.situations
            .iter()
            .filter(|s| s.status == Status::Critical)
            .count()
    }

    /// Ids come from a monotonic counter, never from list position, so they
    /// stay unique even if removal is ever added.
    pub fn push(&mut self, mut situation: Situation) -> SituationId {
        if situation.id.0 == 0 {
            situation.id = SituationId(self.next_id.max(1));
        }
        self.next_id = self.next_id.max(situation.id.0 + 1);
        let id = situation.id;
        self.situations.push(situation);
        id
    }

    /// File a new report. A blank title is rejected and the board is left
    /// untouched. The stored title is uppercased; an empty value falls back
    /// to the monitoring placeholder; new reports always start flat.
    pub fn file_report(
        &mut self,
        title: &str,
        value: &str,
        status: Status,
        now: OffsetDateTime,
    ) -> Option<SituationId> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }

        let value = if value.is_empty() {
            DEFAULT_VALUE.to_owned()
        } else {
            value.to_owned()
        };

        Some(self.push(Situation {
            id: SituationId(0),
            title: title.to_uppercase(),
            status,
            value,
            last_update: now,
            trend: Trend::Stable,
        }))
    }

    /// Refresh one record's timestamp. Nothing else changes.
    pub fn touch(&mut self, id: SituationId, now: OffsetDateTime) {
        if let Some(s) = self.situations.iter_mut().find(|s| s.id == id) {
            s.last_update = now;
        }
    }

    pub fn touch_random<R: Rng>(&mut self, rng: &mut R, now: OffsetDateTime) -> Option<SituationId> {
        if self.situations.is_empty() {
            return None;
        }
        let idx = rng.gen_range(0..self.situations.len());
        let id = self.situations[idx].id;
        self.touch(id, now);
        Some(id)
    }

    pub fn demo(now: OffsetDateTime) -> Self {
        let mut board = Self::default();

        let seed: [(&str, Status, &str, Trend); 6] = [
            ("GROUP CHAT ACTIVITY", Status::Elevated, "47 unread", Trend::Up),
            ("WEEKEND PLANS", Status::Unknown, "Pending Intel", Trend::Stable),
            ("PIZZA FUND", Status::Critical, "$4.20", Trend::Down),
            ("FANTASY LEAGUE", Status::Stable, "3rd Place", Trend::Up),
            ("VIBES", Status::Elevated, "Immaculate", Trend::Up),
            ("DRAMA LEVEL", Status::Stable, "Minimal", Trend::Down),
        ];

        for (title, status, value, trend) in seed {
            board.push(Situation {
                id: SituationId(0),
                title: title.into(),
                status,
                value: value.into(),
                last_update: now,
                trend,
            });
        }

        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn t(unix: i64) -> OffsetDateTime {
        OffsetDateTime::from_unix_timestamp(unix).unwrap()
    }

    #[test]
    fn filing_a_report_appends_one_normalized_record() {
        let mut board = SituationBoard::demo(t(0));
        let before = board.len();

        let id = board
            .file_report("snack supply", "2 bags", Status::Elevated, t(10))
            .unwrap();

        assert_eq!(board.len(), before + 1);
        let s = board.get(id).unwrap();
        assert_eq!(s.title, "SNACK SUPPLY");
        assert_eq!(s.status, Status::Elevated);
        assert_eq!(s.value, "2 bags");
        assert_eq!(s.trend, Trend::Stable);
        assert_eq!(s.last_update, t(10));
    }

    #[test]
    fn blank_titles_are_rejected() {
        let mut board = SituationBoard::demo(t(0));

        assert!(board.file_report("", "x", Status::Stable, t(1)).is_none());
        assert!(board.file_report("   ", "x", Status::Stable, t(1)).is_none());
        assert_eq!(board.len(), 6);
    }

    #[test]
    fn empty_value_falls_back_to_placeholder() {
        let mut board = SituationBoard::default();
        let id = board
            .file_report("test", "", Status::Stable, t(0))
            .unwrap();
        assert_eq!(board.get(id).unwrap().value, DEFAULT_VALUE);
    }

    #[test]
    fn ids_stay_unique_across_inserts() {
        let mut board = SituationBoard::demo(t(0));
        for i in 0..20 {
            board
                .file_report(&format!("item {i}"), "v", Status::Unknown, t(i))
                .unwrap();
        }

        let ids: HashSet<u64> = board.iter().map(|s| s.id.0).collect();
        assert_eq!(ids.len(), board.len());
    }

    #[test]
    fn touch_only_moves_the_timestamp() {
        let mut board = SituationBoard::demo(t(0));
        let snapshot: Vec<Situation> = board.iter().cloned().collect();

        let id = snapshot[2].id;
        board.touch(id, t(99));

        for (before, after) in snapshot.iter().zip(board.iter()) {
            assert_eq!(before.title, after.title);
            assert_eq!(before.status, after.status);
            assert_eq!(before.value, after.value);
            assert_eq!(before.trend, after.trend);
            if after.id == id {
                assert_eq!(after.last_update, t(99));
            } else {
                assert_eq!(after.last_update, before.last_update);
            }
        }
    }

    #[test]
    fn touch_random_picks_a_live_record() {
        use rand::SeedableRng;

        let mut board = SituationBoard::demo(t(0));
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);

        let id = board.touch_random(&mut rng, t(50)).unwrap();
        assert_eq!(board.get(id).unwrap().last_update, t(50));

        let mut empty = SituationBoard::default();
        assert!(empty.touch_random(&mut rng, t(50)).is_none());
    }

    #[test]
    fn demo_scenario_matches_the_briefing() {
        let mut board = SituationBoard::demo(t(0));
        assert_eq!(board.len(), 6);
        assert_eq!(board.critical_count(), 1);

        let critical: Vec<&Situation> = board
            .iter()
            .filter(|s| s.status == Status::Critical)
            .collect();
        assert_eq!(critical[0].title, "PIZZA FUND");

        assert!(board.file_report("  ", "", Status::Stable, t(1)).is_none());
        assert_eq!(board.len(), 6);

        let id = board
            .file_report("test", "", Status::Stable, t(2))
            .unwrap();
        assert_eq!(board.len(), 7);
        let s = board.get(id).unwrap();
        assert_eq!(s.title, "TEST");
        assert_eq!(s.value, DEFAULT_VALUE);
    }
}
