//! Cross-day progress: streaks, the 40-day chillah counter and hasanat.

use crate::clock::{is_yesterday, Clock, SystemClock};
use crate::domain::{Level, COMPLETION_THRESHOLD};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Length of a chillah in days
pub const CHILLAH_LENGTH: u8 = 40;

/// What a call to [`UserProgress::record_day_completion`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakChange {
    /// Today was already recorded; nothing changed
    AlreadyRecorded,
    /// Yesterday was recorded too, streak grew
    Extended { streak: u32, chillah_day: u8 },
    /// First day of a new streak
    Started,
    /// Below threshold, a running streak was lost
    Broken { lost: u32 },
    /// Below threshold with no streak to lose
    Missed,
}

/// The user's profile and running progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProgress {
    pub name: String,
    pub level: Level,
    pub join_date: NaiveDate,

    pub current_streak: u32,
    pub longest_streak: u32,
    pub last_completed_date: Option<NaiveDate>,
    /// Set when a streak was lost, until the user acknowledges it
    pub streak_broken: bool,

    /// Lifetime total, never decremented
    pub total_hasanat: u64,
    pub today_hasanat: u64,

    /// 1..=40
    pub chillah_day: u8,
    pub chillah_start_date: Option<NaiveDate>,

    /// Last day `check_new_day` ran; guards the daily hasanat reset
    pub last_rollover_date: Option<NaiveDate>,
}

impl Default for UserProgress {
    fn default() -> Self {
        Self::new(SystemClock.today())
    }
}

impl UserProgress {
    pub fn new(join_date: NaiveDate) -> Self {
        Self {
            name: "Your Name".to_string(),
            level: Level::Beginner,
            join_date,
            current_streak: 0,
            longest_streak: 0,
            last_completed_date: None,
            streak_broken: false,
            total_hasanat: 0,
            today_hasanat: 0,
            chillah_day: 1,
            chillah_start_date: None,
            last_rollover_date: None,
        }
    }

    /// Repair values a hand-edited or older state file may carry
    pub fn normalized(mut self) -> Self {
        self.chillah_day = self.chillah_day.clamp(1, CHILLAH_LENGTH);
        self.longest_streak = self.longest_streak.max(self.current_streak);
        self
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_level(&mut self, level: Level) {
        self.level = level;
    }

    pub fn add_hasanat(&mut self, amount: u64) {
        self.total_hasanat = self.total_hasanat.saturating_add(amount);
        self.today_hasanat = self.today_hasanat.saturating_add(amount);
    }

    /// Close out today with its completion percentage.
    ///
    /// Only the first call per calendar day has any effect.
    pub fn record_day_completion(&mut self, completion_percent: u8, today: NaiveDate) -> StreakChange {
        if self.last_completed_date == Some(today) {
            tracing::debug!(%today, "day already recorded");
            return StreakChange::AlreadyRecorded;
        }

        if completion_percent >= COMPLETION_THRESHOLD {
            let consecutive = self
                .last_completed_date
                .map(|last| is_yesterday(last, today))
                .unwrap_or(false);

            if consecutive {
                self.current_streak += 1;
                self.chillah_day = self.chillah_day.saturating_add(1).min(CHILLAH_LENGTH);
            } else {
                self.current_streak = 1;
                self.chillah_day = 1;
                self.chillah_start_date = Some(today);
            }
            self.longest_streak = self.longest_streak.max(self.current_streak);
            self.last_completed_date = Some(today);

            tracing::info!(
                streak = self.current_streak,
                chillah_day = self.chillah_day,
                "day completed"
            );

            if consecutive {
                StreakChange::Extended {
                    streak: self.current_streak,
                    chillah_day: self.chillah_day,
                }
            } else {
                StreakChange::Started
            }
        } else {
            let lost = self.current_streak;
            self.current_streak = 0;
            self.chillah_day = 1;
            self.chillah_start_date = None;
            self.last_completed_date = Some(today);

            if lost > 0 {
                tracing::info!(lost, completion_percent, "streak broken below threshold");
                self.streak_broken = true;
                StreakChange::Broken { lost }
            } else {
                StreakChange::Missed
            }
        }
    }

    /// Day-boundary check run on foreground and at midnight.
    ///
    /// Returns true when a day was missed and a running streak was broken.
    /// Otherwise resets `today_hasanat` on the first check of a new day.
    pub fn check_new_day(&mut self, today: NaiveDate) -> bool {
        let first_check_today = self.last_rollover_date != Some(today);
        self.last_rollover_date = Some(today);

        if let Some(last) = self.last_completed_date {
            let missed = last != today && !is_yesterday(last, today);
            if missed && self.current_streak > 0 {
                tracing::info!(
                    lost = self.current_streak,
                    last_completed = %last,
                    "missed a day, streak broken"
                );
                self.streak_broken = true;
                self.current_streak = 0;
                self.chillah_day = 1;
                self.today_hasanat = 0;
                return true;
            }
        }

        if first_check_today && self.last_completed_date != Some(today) {
            self.today_hasanat = 0;
        }
        false
    }

    pub fn dismiss_streak_alert(&mut self) {
        self.streak_broken = false;
    }

    /// Restart the chillah at day 1, leaving the streak alone
    pub fn reset_chillah(&mut self, today: NaiveDate) {
        self.chillah_day = 1;
        self.chillah_start_date = Some(today);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2024, 6, 12)
    }

    fn on_streak(streak: u32, chillah_day: u8, last: NaiveDate) -> UserProgress {
        let mut progress = UserProgress::new(date(2024, 1, 1));
        progress.current_streak = streak;
        progress.longest_streak = streak;
        progress.chillah_day = chillah_day;
        progress.chillah_start_date = Some(date(2024, 5, 1));
        progress.last_completed_date = Some(last);
        progress
    }

    #[test]
    fn test_add_hasanat() {
        let mut progress = UserProgress::new(today());
        progress.add_hasanat(1000);
        assert_eq!(progress.total_hasanat, 1000);
        assert_eq!(progress.today_hasanat, 1000);
        assert_eq!(crate::rewards::format_hasanat(progress.total_hasanat), "1.0k");
    }

    #[test]
    fn test_first_completion_starts_streak() {
        let mut progress = UserProgress::new(today());
        let change = progress.record_day_completion(75, today());
        assert_eq!(change, StreakChange::Started);
        assert_eq!(progress.current_streak, 1);
        assert_eq!(progress.longest_streak, 1);
        assert_eq!(progress.chillah_day, 1);
        assert_eq!(progress.chillah_start_date, Some(today()));
        assert_eq!(progress.last_completed_date, Some(today()));
    }

    #[test]
    fn test_consecutive_day_extends_streak() {
        let yesterday = today() - Duration::days(1);
        let mut progress = on_streak(4, 4, yesterday);
        let change = progress.record_day_completion(75, today());
        assert_eq!(
            change,
            StreakChange::Extended {
                streak: 5,
                chillah_day: 5
            }
        );
        assert_eq!(progress.current_streak, 5);
        assert_eq!(progress.chillah_day, 5);
        assert_eq!(progress.chillah_start_date, Some(date(2024, 5, 1)));
    }

    #[test]
    fn test_gap_restarts_streak() {
        let mut progress = on_streak(9, 9, today() - Duration::days(3));
        assert_eq!(progress.record_day_completion(90, today()), StreakChange::Started);
        assert_eq!(progress.current_streak, 1);
        assert_eq!(progress.longest_streak, 9);
        assert_eq!(progress.chillah_start_date, Some(today()));
    }

    #[test]
    fn test_same_day_recorded_once() {
        let mut progress = UserProgress::new(today());
        progress.record_day_completion(80, today());
        let snapshot = progress.clone();
        assert_eq!(
            progress.record_day_completion(100, today()),
            StreakChange::AlreadyRecorded
        );
        assert_eq!(
            progress.record_day_completion(10, today()),
            StreakChange::AlreadyRecorded
        );
        assert_eq!(progress, snapshot);
    }

    #[test]
    fn test_below_threshold_breaks_streak() {
        let mut progress = on_streak(6, 6, today() - Duration::days(1));
        let change = progress.record_day_completion(59, today());
        assert_eq!(change, StreakChange::Broken { lost: 6 });
        assert_eq!(progress.current_streak, 0);
        assert!(progress.streak_broken);
        assert_eq!(progress.chillah_day, 1);
        assert_eq!(progress.chillah_start_date, None);
        assert_eq!(progress.last_completed_date, Some(today()));
        assert_eq!(progress.longest_streak, 6);
    }

    #[test]
    fn test_below_threshold_without_streak_is_not_a_break() {
        let mut progress = UserProgress::new(today());
        assert_eq!(progress.record_day_completion(20, today()), StreakChange::Missed);
        assert!(!progress.streak_broken);
        assert_eq!(progress.current_streak, 0);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let mut progress = UserProgress::new(today());
        assert_eq!(progress.record_day_completion(60, today()), StreakChange::Started);
    }

    #[test]
    fn test_chillah_caps_at_forty() {
        let mut progress = UserProgress::new(date(2024, 1, 1));
        let mut day = date(2024, 1, 1);
        for _ in 0..60 {
            progress.record_day_completion(100, day);
            assert!(progress.chillah_day <= CHILLAH_LENGTH);
            day = day.succ_opt().unwrap();
        }
        assert_eq!(progress.current_streak, 60);
        assert_eq!(progress.chillah_day, CHILLAH_LENGTH);
    }

    #[test]
    fn test_longest_streak_never_decreases() {
        let mut progress = UserProgress::new(date(2024, 1, 1));
        let mut day = date(2024, 1, 1);
        let mut longest = 0;
        // Deterministic mix of good days, weak days and gaps
        for i in 0..120u32 {
            let percent = if i % 7 == 3 { 40 } else { 80 };
            if i % 11 == 5 {
                day = day + Duration::days(2);
            }
            progress.record_day_completion(percent, day);
            assert!(progress.longest_streak >= longest);
            assert!(progress.longest_streak >= progress.current_streak);
            longest = progress.longest_streak;
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_check_new_day_detects_missed_days() {
        let mut progress = on_streak(5, 5, today() - Duration::days(3));
        progress.today_hasanat = 300;
        assert!(progress.check_new_day(today()));
        assert_eq!(progress.current_streak, 0);
        assert!(progress.streak_broken);
        assert_eq!(progress.chillah_day, 1);
        assert_eq!(progress.today_hasanat, 0);
        assert_eq!(progress.longest_streak, 5);

        // A second check the same day takes the no-op branch
        assert!(!progress.check_new_day(today()));
    }

    #[test]
    fn test_check_new_day_keeps_streak_after_yesterday() {
        let mut progress = on_streak(5, 5, today() - Duration::days(1));
        progress.today_hasanat = 200;
        assert!(!progress.check_new_day(today()));
        assert_eq!(progress.current_streak, 5);
        assert!(!progress.streak_broken);
        assert_eq!(progress.today_hasanat, 0);
    }

    #[test]
    fn test_check_new_day_resets_today_hasanat_once() {
        let mut progress = on_streak(2, 2, today() - Duration::days(1));
        progress.check_new_day(today());
        progress.add_hasanat(27);

        // Foregrounding again later the same day keeps today's earnings
        assert!(!progress.check_new_day(today()));
        assert_eq!(progress.today_hasanat, 27);
        assert_eq!(progress.total_hasanat, 27);
    }

    #[test]
    fn test_check_new_day_without_history() {
        let mut progress = UserProgress::new(today());
        progress.today_hasanat = 50;
        assert!(!progress.check_new_day(today()));
        assert_eq!(progress.today_hasanat, 0);
        assert!(!progress.streak_broken);
    }

    #[test]
    fn test_break_is_not_doubled_by_both_triggers() {
        // Missed-day check first, then a weak recording the same day
        let mut progress = on_streak(5, 5, today() - Duration::days(2));
        assert!(progress.check_new_day(today()));
        assert_eq!(progress.record_day_completion(30, today()), StreakChange::Missed);
        // The pending alert from the missed day survives
        assert!(progress.streak_broken);
        assert_eq!(progress.current_streak, 0);

        // Weak recording first, then the day check
        let mut progress = on_streak(5, 5, today() - Duration::days(1));
        assert_eq!(
            progress.record_day_completion(30, today()),
            StreakChange::Broken { lost: 5 }
        );
        assert!(!progress.check_new_day(today()));
        assert_eq!(progress.current_streak, 0);
    }

    #[test]
    fn test_dismiss_streak_alert_only_clears_flag() {
        let mut progress = on_streak(0, 1, today());
        progress.streak_broken = true;
        let mut expected = progress.clone();
        expected.streak_broken = false;
        progress.dismiss_streak_alert();
        assert_eq!(progress, expected);
    }

    #[test]
    fn test_reset_chillah_keeps_streak() {
        let mut progress = on_streak(12, 12, today() - Duration::days(1));
        progress.reset_chillah(today());
        assert_eq!(progress.chillah_day, 1);
        assert_eq!(progress.chillah_start_date, Some(today()));
        assert_eq!(progress.current_streak, 12);
    }

    #[test]
    fn test_normalized_clamps_chillah() {
        let mut progress = UserProgress::new(today());
        progress.chillah_day = 0;
        progress.current_streak = 3;
        progress = progress.normalized();
        assert_eq!(progress.chillah_day, 1);
        assert_eq!(progress.longest_streak, 3);

        progress.chillah_day = 77;
        assert_eq!(progress.normalized().chillah_day, CHILLAH_LENGTH);
    }

    #[test]
    fn test_json_layout() {
        let progress = UserProgress::new(today());
        let json = serde_json::to_value(&progress).unwrap();
        assert_eq!(json["joinDate"], "2024-06-12");
        assert_eq!(json["currentStreak"], 0);
        assert_eq!(json["lastCompletedDate"], serde_json::Value::Null);
        assert_eq!(json["chillahDay"], 1);
        assert_eq!(json["level"], "beginner");
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let progress: UserProgress =
            serde_json::from_str(r#"{"name":"Amina","currentStreak":3,"longestStreak":4}"#).unwrap();
        assert_eq!(progress.name, "Amina");
        assert_eq!(progress.current_streak, 3);
        assert_eq!(progress.chillah_day, 1);
    }
}
