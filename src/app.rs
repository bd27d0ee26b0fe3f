use crate::achievements::{AchievementBook, AchievementStats};
use crate::clock::Clock;
use crate::domain::{CompletionStats, DayRecord, Level};
use crate::persistence::{SavedState, StateSink};
use crate::progress::{StreakChange, UserProgress};
use crate::report::stats::achievement_stats;
use crate::rewards::{reward_for, tasbih_reward};
use crate::store::DailyStore;
use chrono::NaiveDate;

/// Result of a day-rollover check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rollover {
    /// The task tree was reset for a new day
    pub tasks_reset: bool,
    /// A missed day broke the running streak
    pub streak_broken: bool,
}

/// Result of completing or un-completing a task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskOutcome {
    pub completed: bool,
    pub hasanat_earned: u32,
    pub stats: CompletionStats,
    pub record: DayRecord,
    pub streak: Option<StreakChange>,
    pub unlocked: Vec<String>,
}

/// Owns the three stores and drives them the way the home screen does:
/// day checks on foreground and at midnight, rewards on completion, and a
/// snapshot to the sink after every mutation.
pub struct Tracker {
    store: DailyStore,
    progress: UserProgress,
    achievements: AchievementBook,
    clock: Box<dyn Clock>,
    sink: Box<dyn StateSink>,
    in_congregation: bool,
}

impl Tracker {
    pub fn new(state: SavedState, clock: Box<dyn Clock>, sink: Box<dyn StateSink>) -> Self {
        Self {
            store: state.store,
            progress: state.progress,
            achievements: state.achievements,
            clock,
            sink,
            in_congregation: true,
        }
    }

    /// Whether fardh prayers are rewarded as prayed in congregation
    pub fn with_congregation(mut self, in_congregation: bool) -> Self {
        self.in_congregation = in_congregation;
        self
    }

    pub fn store(&self) -> &DailyStore {
        &self.store
    }

    pub fn progress(&self) -> &UserProgress {
        &self.progress
    }

    pub fn achievements(&self) -> &AchievementBook {
        &self.achievements
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn completion_stats(&self) -> CompletionStats {
        self.store.completion_stats()
    }

    /// The single day-boundary routine behind both the foreground check and
    /// the midnight timer. Runs the task reset, then the streak check.
    pub fn ensure_day_rollover(&mut self) -> Rollover {
        let today = self.today();
        if self.store.current_date == today && self.progress.last_rollover_date == Some(today) {
            return Rollover::default();
        }

        let rollover = Rollover {
            tasks_reset: self.store.check_and_reset_day(today),
            streak_broken: self.progress.check_new_day(today),
        };
        self.flush();
        rollover
    }

    /// App came to the foreground
    pub fn on_foreground(&mut self) -> Rollover {
        self.ensure_day_rollover()
    }

    /// The midnight timer fired
    pub fn on_midnight(&mut self) -> Rollover {
        self.ensure_day_rollover()
    }

    /// Toggle a checkbox task, rewarding it when it becomes completed.
    /// `None` for unknown ids and time fields.
    pub fn toggle_item(&mut self, category_id: &str, item_id: &str) -> Option<TaskOutcome> {
        self.ensure_day_rollover();

        let was_completed = self.store.item(category_id, item_id)?.completed;
        let completed = self.store.toggle_item(category_id, item_id)?;

        let earned = if was_completed {
            0
        } else {
            reward_for(category_id, item_id, self.in_congregation)
        };
        Some(self.after_task_change(completed, earned))
    }

    /// Record the time for a wake/sleep field. Only the first time set in a
    /// day earns a reward.
    pub fn set_item_time(&mut self, category_id: &str, item_id: &str, time: &str) -> Option<TaskOutcome> {
        self.ensure_day_rollover();

        let was_completed = self.store.item(category_id, item_id)?.completed;
        if !self.store.set_item_time(category_id, item_id, time) {
            return None;
        }

        let earned = if was_completed {
            0
        } else {
            reward_for(category_id, item_id, self.in_congregation)
        };
        Some(self.after_task_change(true, earned))
    }

    fn after_task_change(&mut self, completed: bool, earned: u32) -> TaskOutcome {
        let today = self.today();
        if earned > 0 {
            self.progress.add_hasanat(u64::from(earned));
        }

        let record = self.store.record_day_end(today);
        let stats = CompletionStats::from_counts(record.completed_count, record.total_count);
        let streak = if stats.meets_threshold() {
            Some(self.progress.record_day_completion(stats.percent, today))
        } else {
            None
        };

        let unlocked = self.unlock_achievements();
        self.flush();

        TaskOutcome {
            completed,
            hasanat_earned: earned,
            stats,
            record,
            streak,
            unlocked,
        }
    }

    /// Credit a finished tasbih counter session
    pub fn add_tasbih(&mut self, count: u32) -> Vec<String> {
        self.add_hasanat(tasbih_reward(count))
    }

    /// Add hasanat and return any achievements it unlocked
    pub fn add_hasanat(&mut self, amount: u64) -> Vec<String> {
        self.ensure_day_rollover();
        self.progress.add_hasanat(amount);
        let unlocked = self.unlock_achievements();
        self.flush();
        unlocked
    }

    /// Close out today explicitly with the current completion
    pub fn record_day_completion(&mut self) -> StreakChange {
        self.ensure_day_rollover();
        let today = self.today();
        let stats = self.store.completion_stats();
        let change = self.progress.record_day_completion(stats.percent, today);
        self.unlock_achievements();
        self.flush();
        change
    }

    pub fn dismiss_streak_alert(&mut self) {
        self.ensure_day_rollover();
        self.progress.dismiss_streak_alert();
        self.flush();
    }

    pub fn reset_chillah(&mut self) {
        self.ensure_day_rollover();
        let today = self.today();
        self.progress.reset_chillah(today);
        self.flush();
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.ensure_day_rollover();
        self.progress.set_name(name);
        self.flush();
    }

    /// Switch level and reseed today's tasks from the catalog.
    /// Discards customizations and today's completion.
    pub fn switch_level(&mut self, level: Level) {
        self.ensure_day_rollover();
        self.progress.set_level(level);
        self.store.load_level_tasks(level);
        self.flush();
    }

    /// Apply a structural edit to the task tree, saving if it changed anything
    pub fn edit<F>(&mut self, edit: F) -> bool
    where
        F: FnOnce(&mut DailyStore) -> bool,
    {
        self.ensure_day_rollover();
        let changed = edit(&mut self.store);
        if changed {
            self.flush();
        }
        changed
    }

    pub fn achievement_stats(&self) -> AchievementStats {
        achievement_stats(&self.progress, &self.store.day_records)
    }

    /// Evaluate achievements against current stats, saving any unlocks
    pub fn check_and_unlock(&mut self) -> Vec<String> {
        self.ensure_day_rollover();
        let unlocked = self.unlock_achievements();
        if !unlocked.is_empty() {
            self.flush();
        }
        unlocked
    }

    fn unlock_achievements(&mut self) -> Vec<String> {
        let stats = self.achievement_stats();
        let today = self.today();
        self.achievements.check_and_unlock(&stats, today)
    }

    /// Hand the current state to the sink. Failures are logged and leave
    /// in-memory state untouched.
    fn flush(&mut self) {
        if let Err(e) = self.sink.save(&self.store, &self.progress, &self.achievements) {
            tracing::warn!(error = %e, "failed to persist state");
        }
    }

    /// Current state as a persistable snapshot
    pub fn snapshot(&self) -> SavedState {
        SavedState {
            store: self.store.clone(),
            progress: self.progress.clone(),
            achievements: self.achievements.clone(),
        }
    }
}
