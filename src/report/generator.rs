use crate::achievements::AchievementBook;
use crate::domain::{DayRecord, COMPLETION_THRESHOLD};
use crate::persistence::{atomic_write, ensure_dir, report_file};
use crate::progress::{UserProgress, CHILLAH_LENGTH};
use crate::report::stats::{achievement_stats, calculate_history_stats};
use crate::rewards::format_hasanat;
use crate::store::DailyStore;
use anyhow::Result;
use chrono::{Duration, NaiveDate};
use std::path::{Path, PathBuf};

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Format percentage with 1 decimal place
fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

fn check(done: bool) -> &'static str {
    if done {
        "x"
    } else {
        " "
    }
}

/// Render a markdown progress report for `date`
pub fn render_report(
    store: &DailyStore,
    progress: &UserProgress,
    achievements: &AchievementBook,
    date: NaiveDate,
) -> String {
    let history = calculate_history_stats(&store.day_records);
    let mut report = String::new();

    // Header
    report.push_str(&format!("# Maamulat Report - {}\n\n", date));
    report.push_str(&format!("**{}** · {} level\n\n", progress.name, progress.level));

    // Summary Section
    report.push_str("## Summary\n\n");
    if store.current_date == date {
        let stats = store.completion_stats();
        report.push_str(&format!(
            "- **Today:** {}/{} tasks ({}%)\n",
            stats.completed, stats.total, stats.percent
        ));
    } else if let Some(record) = store.day_records.iter().find(|r| r.date == date) {
        report.push_str(&format!(
            "- **Recorded:** {}/{} tasks ({}%)\n",
            record.completed_count, record.total_count, record.completion_percent
        ));
    } else {
        report.push_str("- **Recorded:** nothing for this day\n");
    }
    report.push_str(&format!(
        "- **Streak:** {} days (longest {})\n",
        progress.current_streak, progress.longest_streak
    ));
    report.push_str(&format!("- **Chillah:** day {}/{}\n", progress.chillah_day, CHILLAH_LENGTH));
    report.push_str(&format!(
        "- **Hasanat:** {} today, {} total\n\n",
        format_hasanat(progress.today_hasanat),
        format_hasanat(progress.total_hasanat)
    ));

    // Week Section
    report.push_str("## This Week\n\n");
    for (name, done) in WEEKDAYS.iter().zip(store.weekly_progress.iter()) {
        report.push_str(&format!("- [{}] {}\n", check(*done), name));
    }
    report.push('\n');

    // Tasks Section, only meaningful for the live day
    if store.current_date == date {
        report.push_str("## Tasks\n\n");
        for category in &store.categories {
            match &category.meta.emoji {
                Some(emoji) => report.push_str(&format!("### {} {}\n\n", emoji, category.meta.name_en)),
                None => report.push_str(&format!("### {}\n\n", category.meta.name_en)),
            }
            for item in &category.items {
                match (&item.time_value, item.is_time()) {
                    (Some(time), true) => {
                        report.push_str(&format!("- [x] {} at {}\n", item.task.name_en, time))
                    }
                    _ => report.push_str(&format!("- [{}] {}\n", check(item.completed), item.task.name_en)),
                }
            }
            report.push('\n');
        }
    }

    // History Section
    report.push_str("## History\n\n");
    report.push_str(&format!("- **Days Recorded:** {}\n", history.days_recorded));
    report.push_str(&format!(
        "- **Days at {}% or more:** {}\n",
        COMPLETION_THRESHOLD, history.days_meeting_threshold
    ));
    report.push_str(&format!("- **Perfect Days:** {}\n", history.perfect_days));
    report.push_str(&format!("- **Tahajjud Days:** {}\n", history.tahajjud_days));
    report.push_str(&format!("- **Quran Days:** {}\n", history.quran_days));
    report.push_str(&format!("- **Average Completion:** {}\n", format_percent(history.average_percent)));
    if let Some(best) = &history.best_day {
        report.push_str(&format!("- **Best Day:** {} ({}%)\n", best.date, best.completion_percent));
    }
    report.push('\n');

    let recent: Vec<&DayRecord> = store
        .day_records
        .iter()
        .rev()
        .filter(|r| r.date <= date && r.date > date - Duration::days(7))
        .collect();
    if !recent.is_empty() {
        report.push_str("### Last 7 Days\n\n");
        for record in recent {
            report.push_str(&format!(
                "- {}: {}/{} ({}%)\n",
                record.date, record.completed_count, record.total_count, record.completion_percent
            ));
        }
        report.push('\n');
    }

    // Achievements Section
    let stats = achievement_stats(progress, &store.day_records);
    report.push_str(&format!(
        "## Achievements ({}/{})\n\n",
        achievements.unlocked_count(),
        achievements.achievements().len()
    ));
    for achievement in achievements.achievements() {
        if achievement.unlocked {
            let since = achievement
                .unlocked_date
                .map(|d| format!(" on {}", d))
                .unwrap_or_default();
            report.push_str(&format!("- [x] **{}**{}\n", achievement.name, since));
        } else {
            let current = achievements.current_value(&achievement.id, &stats);
            report.push_str(&format!(
                "- [ ] **{}** {}/{} ({}%)\n",
                achievement.name,
                current.min(achievement.target),
                achievement.target,
                achievements.progress_percent(&achievement.id, current)
            ));
        }
    }

    report
}

/// Generate a report for `date` into `output`, or `report-YYYY-MM-DD.md`
/// under `dir` when no output is given
pub fn generate_report(
    dir: &Path,
    store: &DailyStore,
    progress: &UserProgress,
    achievements: &AchievementBook,
    date: NaiveDate,
    output: Option<PathBuf>,
) -> Result<PathBuf> {
    let report = render_report(store, progress, achievements, date);

    let output = match output {
        Some(path) => path,
        None => {
            ensure_dir(dir)?;
            report_file(dir, date)
        }
    };

    atomic_write(&output, &report)?;
    tracing::info!(path = %output.display(), "report written");

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Level;
    use crate::persistence::{read_file, SavedState};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 12).unwrap()
    }

    fn state() -> SavedState {
        let mut state = SavedState::fresh(Level::Beginner, today());
        state.store.toggle_item("faraiz", "fajr");
        state.store.set_item_time("routine", "wake", "04:30");
        state.store.record_day_end(today());
        state.progress.add_hasanat(1_500);
        state.progress.set_name("Aisha");
        state
    }

    #[test]
    fn test_render_live_day() {
        let state = state();
        let report = render_report(&state.store, &state.progress, &state.achievements, today());

        assert!(report.starts_with("# Maamulat Report - 2024-06-12"));
        assert!(report.contains("**Aisha** · beginner level"));
        assert!(report.contains("- [x] Fajr\n"));
        assert!(report.contains("- [ ] Zuhr\n"));
        assert!(report.contains("- [x] Wake time at 04:30"));
        assert!(report.contains("1.5k total"));
        assert!(report.contains("- **Days Recorded:** 1"));
        assert!(report.contains("## Achievements (0/8)"));
    }

    #[test]
    fn test_render_past_day_skips_tasks() {
        let state = state();
        let later = today() + Duration::days(1);
        let report = render_report(&state.store, &state.progress, &state.achievements, later);

        assert!(report.contains("nothing for this day"));
        assert!(!report.contains("## Tasks"));
        assert!(report.contains("- 2024-06-12:"));
    }

    #[test]
    fn test_generate_report_writes_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let state = state();

        let path = generate_report(
            temp_dir.path(),
            &state.store,
            &state.progress,
            &state.achievements,
            today(),
            None,
        )
        .unwrap();

        assert_eq!(path, temp_dir.path().join("report-2024-06-12.md"));
        let content = read_file(&path).unwrap().unwrap();
        assert!(content.contains("## History"));
    }
}
