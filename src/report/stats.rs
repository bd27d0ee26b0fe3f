use crate::achievements::AchievementStats;
use crate::domain::{DayRecord, COMPLETION_THRESHOLD};
use crate::progress::UserProgress;

/// Aggregates over the retained day history
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryStats {
    pub days_recorded: usize,
    pub days_meeting_threshold: usize,
    pub perfect_days: usize,
    pub tahajjud_days: usize,
    pub quran_days: usize,
    pub average_percent: f64,
    /// Highest completion, earliest date wins ties
    pub best_day: Option<DayRecord>,
}

/// Calculate history statistics from day records
pub fn calculate_history_stats(records: &[DayRecord]) -> HistoryStats {
    let days_recorded = records.len();
    let mut days_meeting_threshold = 0;
    let mut perfect_days = 0;
    let mut tahajjud_days = 0;
    let mut quran_days = 0;
    let mut percent_sum = 0u64;
    let mut best_day: Option<&DayRecord> = None;

    for record in records {
        if record.completion_percent >= COMPLETION_THRESHOLD {
            days_meeting_threshold += 1;
        }
        if record.is_perfect() {
            perfect_days += 1;
        }
        if record.tahajjud {
            tahajjud_days += 1;
        }
        if record.quran {
            quran_days += 1;
        }
        percent_sum += u64::from(record.completion_percent);

        // Track best
        match best_day {
            Some(best) if best.completion_percent >= record.completion_percent => {}
            _ => best_day = Some(record),
        }
    }

    let average_percent = if days_recorded > 0 {
        percent_sum as f64 / days_recorded as f64
    } else {
        0.0
    };

    HistoryStats {
        days_recorded,
        days_meeting_threshold,
        perfect_days,
        tahajjud_days,
        quran_days,
        average_percent,
        best_day: best_day.cloned(),
    }
}

/// Build the counters achievements unlock against
pub fn achievement_stats(progress: &UserProgress, records: &[DayRecord]) -> AchievementStats {
    let history = calculate_history_stats(records);
    AchievementStats {
        streak: progress.current_streak,
        total_hasanat: progress.total_hasanat,
        tahajjud_count: history.tahajjud_days as u32,
        quran_days: history.quran_days as u32,
        perfect_days: history.perfect_days as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CompletionStats;
    use chrono::NaiveDate;

    fn record(day: u32, completed: usize, total: usize, tahajjud: bool, quran: bool) -> DayRecord {
        let date = NaiveDate::from_ymd_opt(2024, 6, day).unwrap();
        let mut record = DayRecord::new(date, CompletionStats::from_counts(completed, total));
        record.tahajjud = tahajjud;
        record.quran = quran;
        record
    }

    #[test]
    fn test_empty_history() {
        let stats = calculate_history_stats(&[]);
        assert_eq!(stats.days_recorded, 0);
        assert_eq!(stats.average_percent, 0.0);
        assert!(stats.best_day.is_none());
    }

    #[test]
    fn test_history_counts() {
        let records = vec![
            record(1, 10, 10, true, true),
            record(2, 5, 10, false, true),
            record(3, 7, 10, true, false),
            record(4, 10, 10, false, false),
        ];
        let stats = calculate_history_stats(&records);
        assert_eq!(stats.days_recorded, 4);
        assert_eq!(stats.days_meeting_threshold, 3);
        assert_eq!(stats.perfect_days, 2);
        assert_eq!(stats.tahajjud_days, 2);
        assert_eq!(stats.quran_days, 2);
        assert_eq!(stats.average_percent, 80.0);
        assert_eq!(stats.best_day.unwrap().date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    }

    #[test]
    fn test_achievement_stats_snapshot() {
        let mut progress = UserProgress::new(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        progress.current_streak = 4;
        progress.total_hasanat = 2200;
        let records = vec![record(1, 4, 4, true, true), record(2, 1, 4, true, false)];

        let stats = achievement_stats(&progress, &records);
        assert_eq!(stats.streak, 4);
        assert_eq!(stats.total_hasanat, 2200);
        assert_eq!(stats.tahajjud_count, 2);
        assert_eq!(stats.quran_days, 1);
        assert_eq!(stats.perfect_days, 1);
    }
}
