use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Completion percentage a day needs to count toward the streak
pub const COMPLETION_THRESHOLD: u8 = 60;

/// Number of day records kept in history
pub const HISTORY_LIMIT: usize = 30;

/// Completed vs. total items across the working tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompletionStats {
    pub completed: usize,
    pub total: usize,
    /// 0..=100, rounded half up
    pub percent: u8,
}

impl CompletionStats {
    pub fn from_counts(completed: usize, total: usize) -> Self {
        let completed = completed.min(total);
        let percent = if total == 0 {
            0
        } else {
            ((200 * completed + total) / (2 * total)) as u8
        };
        Self {
            completed,
            total,
            percent,
        }
    }

    /// Whether the day meets the streak threshold
    pub fn meets_threshold(&self) -> bool {
        self.percent >= COMPLETION_THRESHOLD
    }

    pub fn is_perfect(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

/// Snapshot of one calendar day's completion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    pub date: NaiveDate,
    pub completed_count: usize,
    pub total_count: usize,
    pub completion_percent: u8,
    /// Tahajjud was prayed that day
    #[serde(default)]
    pub tahajjud: bool,
    /// At least one Quran task was completed that day
    #[serde(default)]
    pub quran: bool,
}

impl DayRecord {
    pub fn new(date: NaiveDate, stats: CompletionStats) -> Self {
        Self {
            date,
            completed_count: stats.completed,
            total_count: stats.total,
            completion_percent: stats.percent,
            tahajjud: false,
            quran: false,
        }
    }

    pub fn is_perfect(&self) -> bool {
        self.total_count > 0 && self.completed_count == self.total_count
    }
}
