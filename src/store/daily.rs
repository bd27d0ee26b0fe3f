use crate::catalog;
use crate::clock::{week_start, weekday_index};
use crate::domain::{CompletionStats, DayRecord, Level, WorkingCategory, WorkingItem, HISTORY_LIMIT};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Task id whose completion counts as a Tahajjud day
pub const TAHAJJUD_TASK_ID: &str = "tahajjud";

/// Category whose completions count as a Quran day
pub const QURAN_CATEGORY_ID: &str = "quran";

/// Today's task tree plus the weekly bitmap and day history.
///
/// Category and item structure survives day resets; only `completed` and
/// `time_value` are cleared when the calendar day changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyStore {
    pub current_date: NaiveDate,
    pub current_level: Level,
    pub categories: Vec<WorkingCategory>,
    pub week_start: NaiveDate,
    /// Monday..Sunday, true when that day met the completion threshold
    #[serde(default)]
    pub weekly_progress: [bool; 7],
    #[serde(default)]
    pub day_records: Vec<DayRecord>,
}

impl DailyStore {
    pub fn new(level: Level, today: NaiveDate) -> Self {
        Self {
            current_date: today,
            current_level: level,
            categories: seed_categories(level),
            week_start: week_start(today),
            weekly_progress: [false; 7],
            day_records: Vec::new(),
        }
    }

    pub fn category(&self, category_id: &str) -> Option<&WorkingCategory> {
        self.categories.iter().find(|cat| cat.id() == category_id)
    }

    pub(crate) fn category_mut(&mut self, category_id: &str) -> Option<&mut WorkingCategory> {
        self.categories.iter_mut().find(|cat| cat.id() == category_id)
    }

    pub fn item(&self, category_id: &str, item_id: &str) -> Option<&WorkingItem> {
        self.category(category_id)?.item(item_id)
    }

    fn item_mut(&mut self, category_id: &str, item_id: &str) -> Option<&mut WorkingItem> {
        self.category_mut(category_id)?.item_mut(item_id)
    }

    /// Flip a checkbox item. Returns the new state, or `None` when the id is
    /// unknown or the item is a time field.
    pub fn toggle_item(&mut self, category_id: &str, item_id: &str) -> Option<bool> {
        let Some(item) = self.item_mut(category_id, item_id) else {
            tracing::debug!(category_id, item_id, "toggle on unknown item ignored");
            return None;
        };

        if item.is_time() {
            tracing::debug!(category_id, item_id, "toggle on time field ignored");
            return None;
        }

        item.completed = !item.completed;
        Some(item.completed)
    }

    /// Record the time for a time field and mark it completed.
    ///
    /// Accepts "H:MM" or "HH:MM" and stores it zero-padded. Returns false for
    /// unknown ids, non-time items and unparseable times.
    pub fn set_item_time(&mut self, category_id: &str, item_id: &str, time: &str) -> bool {
        let Ok(parsed) = NaiveTime::parse_from_str(time.trim(), "%H:%M") else {
            tracing::debug!(time, "rejected malformed time value");
            return false;
        };

        match self.item_mut(category_id, item_id) {
            Some(item) if item.is_time() => {
                item.time_value = Some(parsed.format("%H:%M").to_string());
                item.completed = true;
                true
            }
            Some(_) => {
                tracing::debug!(category_id, item_id, "time value on checkbox item ignored");
                false
            }
            None => {
                tracing::debug!(category_id, item_id, "time value on unknown item ignored");
                false
            }
        }
    }

    /// Completed vs. total items across every category
    pub fn completion_stats(&self) -> CompletionStats {
        let (completed, total) = self
            .categories
            .iter()
            .flat_map(|cat| cat.items.iter())
            .fold((0, 0), |(completed, total), item| {
                (completed + usize::from(item.completed), total + 1)
            });
        CompletionStats::from_counts(completed, total)
    }

    /// Start a fresh day if the calendar date moved on.
    ///
    /// Clears completion on every item, advances `current_date`, and clears
    /// the weekly bitmap when a new week began. Returns whether a reset
    /// happened; calling it again on the same day is a no-op.
    pub fn check_and_reset_day(&mut self, today: NaiveDate) -> bool {
        if self.current_date == today {
            return false;
        }

        for item in self.categories.iter_mut().flat_map(|cat| cat.items.iter_mut()) {
            item.reset();
        }

        let this_week = week_start(today);
        if self.week_start != this_week {
            self.weekly_progress = [false; 7];
            self.week_start = this_week;
        }

        tracing::info!(from = %self.current_date, to = %today, "daily tasks reset");
        self.current_date = today;
        true
    }

    /// Snapshot today's completion into the weekly bitmap and history.
    ///
    /// Re-recording the same day overwrites that day's record.
    pub fn record_day_end(&mut self, today: NaiveDate) -> DayRecord {
        let stats = self.completion_stats();
        let mut record = DayRecord::new(today, stats);
        record.tahajjud = self.is_completed_anywhere(TAHAJJUD_TASK_ID);
        record.quran = self
            .category(QURAN_CATEGORY_ID)
            .map(|cat| cat.items.iter().any(|item| item.completed))
            .unwrap_or(false);

        if week_start(today) == self.week_start {
            self.weekly_progress[weekday_index(today)] = stats.meets_threshold();
        }

        match self.day_records.iter_mut().find(|r| r.date == today) {
            Some(existing) => *existing = record.clone(),
            None => self.day_records.push(record.clone()),
        }
        self.day_records.sort_by_key(|r| r.date);
        if self.day_records.len() > HISTORY_LIMIT {
            let excess = self.day_records.len() - HISTORY_LIMIT;
            self.day_records.drain(..excess);
        }

        record
    }

    /// Replace the whole tree with the catalog for `level`.
    ///
    /// Destructive: custom categories, custom items and today's completion
    /// state are discarded.
    pub fn load_level_tasks(&mut self, level: Level) {
        tracing::info!(from = %self.current_level, to = %level, "switching level");
        self.current_level = level;
        self.categories = seed_categories(level);
    }

    fn is_completed_anywhere(&self, item_id: &str) -> bool {
        self.categories
            .iter()
            .filter_map(|cat| cat.item(item_id))
            .any(|item| item.completed)
    }
}

fn seed_categories(level: Level) -> Vec<WorkingCategory> {
    catalog::all_categories(level)
        .into_iter()
        .map(WorkingCategory::from)
        .collect()
}
