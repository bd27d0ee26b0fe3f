//! Badge catalog and unlock evaluation.
//!
//! Each achievement's unlock rule is resolved from its id once, when the
//! book is built. Unlocking is monotonic: an unlocked badge never relocks.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Counter an achievement's target is compared against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnlockRule {
    Streak,
    TotalHasanat,
    TahajjudCount,
    QuranDays,
    PerfectDays,
    /// Never unlocked automatically
    #[default]
    Manual,
}

impl UnlockRule {
    pub fn for_id(id: &str) -> Self {
        if id.starts_with("streak-") {
            return Self::Streak;
        }
        if id.starts_with("hasanat-") {
            return Self::TotalHasanat;
        }
        match id {
            "tahajjud-7" => Self::TahajjudCount,
            "quran-30" => Self::QuranDays,
            "perfect-1" => Self::PerfectDays,
            _ => Self::Manual,
        }
    }

    /// The stat this rule measures, or `None` for manual badges
    pub fn measure(&self, stats: &AchievementStats) -> Option<u64> {
        match self {
            Self::Streak => Some(u64::from(stats.streak)),
            Self::TotalHasanat => Some(stats.total_hasanat),
            Self::TahajjudCount => Some(u64::from(stats.tahajjud_count)),
            Self::QuranDays => Some(u64::from(stats.quran_days)),
            Self::PerfectDays => Some(u64::from(stats.perfect_days)),
            Self::Manual => None,
        }
    }
}

/// Snapshot of the counters achievements unlock against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AchievementStats {
    pub streak: u32,
    pub total_hasanat: u64,
    pub tahajjud_count: u32,
    pub quran_days: u32,
    pub perfect_days: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub name_ur: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub icon_color: String,
    pub target: u64,
    #[serde(default)]
    pub unlocked: bool,
    #[serde(default)]
    pub unlocked_date: Option<NaiveDate>,
    #[serde(skip)]
    pub rule: UnlockRule,
}

impl Achievement {
    fn builtin(
        id: &str,
        name: &str,
        name_ur: &str,
        description: &str,
        icon: &str,
        icon_color: &str,
        target: u64,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            name_ur: name_ur.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            icon_color: icon_color.to_string(),
            target,
            unlocked: false,
            unlocked_date: None,
            rule: UnlockRule::for_id(id),
        }
    }

    fn is_met(&self, stats: &AchievementStats) -> bool {
        self.rule
            .measure(stats)
            .map(|value| value >= self.target)
            .unwrap_or(false)
    }
}

pub fn default_achievements() -> Vec<Achievement> {
    vec![
        Achievement::builtin(
            "streak-7",
            "7 Day Streak",
            "سات دن مسلسل",
            "Complete maamulat for 7 consecutive days",
            "flame",
            "#FF6B35",
            7,
        ),
        Achievement::builtin(
            "streak-40",
            "Chillah Complete",
            "چلہ مکمل",
            "Complete a 40-day spiritual journey",
            "moon",
            "#9B59B6",
            40,
        ),
        Achievement::builtin(
            "streak-100",
            "Century",
            "سو دن",
            "Maintain streak for 100 days",
            "ribbon",
            "#D4AF37",
            100,
        ),
        Achievement::builtin(
            "hasanat-1000",
            "Hasanat Hunter",
            "حسنات ہنٹر",
            "Earn 1,000 total hasanat",
            "star",
            "#D4AF37",
            1000,
        ),
        Achievement::builtin(
            "hasanat-10000",
            "Hasanat Master",
            "حسنات ماسٹر",
            "Earn 10,000 total hasanat",
            "star",
            "#D4AF37",
            10_000,
        ),
        Achievement::builtin(
            "tahajjud-7",
            "Night Warrior",
            "رات کا سپاہی",
            "Pray Tahajjud for 7 days",
            "cloudy-night",
            "#1A1A2E",
            7,
        ),
        Achievement::builtin(
            "quran-30",
            "Quran Journey",
            "قرآن سفر",
            "Read Quran surahs daily for 30 days",
            "book",
            "#3498DB",
            30,
        ),
        Achievement::builtin(
            "perfect-1",
            "Perfect Day",
            "کامل دن",
            "Complete all maamulat in a single day",
            "sparkles",
            "#D4AF37",
            1,
        ),
    ]
}

/// Persisted shape of the achievement store
#[derive(Debug, Deserialize)]
struct SavedBook {
    #[serde(default)]
    achievements: Vec<Achievement>,
}

impl From<SavedBook> for AchievementBook {
    fn from(saved: SavedBook) -> Self {
        Self::from_saved(saved.achievements)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SavedBook")]
pub struct AchievementBook {
    achievements: Vec<Achievement>,
}

impl Default for AchievementBook {
    fn default() -> Self {
        Self {
            achievements: default_achievements(),
        }
    }
}

impl AchievementBook {
    /// Merge saved achievements with the built-in catalog.
    ///
    /// Saved entries keep their unlock state; built-ins missing from the save
    /// are appended locked. Rules are resolved for every entry.
    pub fn from_saved(saved: Vec<Achievement>) -> Self {
        let mut achievements: Vec<Achievement> = saved
            .into_iter()
            .map(|mut achievement| {
                achievement.rule = UnlockRule::for_id(&achievement.id);
                achievement
            })
            .collect();

        for builtin in default_achievements() {
            if !achievements.iter().any(|a| a.id == builtin.id) {
                achievements.push(builtin);
            }
        }

        Self { achievements }
    }

    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    pub fn get(&self, id: &str) -> Option<&Achievement> {
        self.achievements.iter().find(|a| a.id == id)
    }

    pub fn unlocked_count(&self) -> usize {
        self.achievements.iter().filter(|a| a.unlocked).count()
    }

    /// Unlock every locked achievement whose target `stats` now meets.
    ///
    /// Returns the ids unlocked by this call only.
    pub fn check_and_unlock(&mut self, stats: &AchievementStats, today: NaiveDate) -> Vec<String> {
        let mut newly_unlocked = Vec::new();

        for achievement in self.achievements.iter_mut().filter(|a| !a.unlocked) {
            if achievement.is_met(stats) {
                achievement.unlocked = true;
                achievement.unlocked_date = Some(today);
                tracing::info!(id = %achievement.id, "achievement unlocked");
                newly_unlocked.push(achievement.id.clone());
            }
        }

        newly_unlocked
    }

    /// Progress toward an achievement as 0..=100; 0 for unknown ids
    pub fn progress_percent(&self, id: &str, current: u64) -> u8 {
        match self.get(id) {
            Some(achievement) if achievement.target > 0 => {
                (current.saturating_mul(100) / achievement.target).min(100) as u8
            }
            Some(_) => 100,
            None => 0,
        }
    }

    /// Current value of the counter an achievement measures
    pub fn current_value(&self, id: &str, stats: &AchievementStats) -> u64 {
        self.get(id)
            .and_then(|achievement| achievement.rule.measure(stats))
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 12).unwrap()
    }

    #[test]
    fn test_rule_resolution() {
        assert_eq!(UnlockRule::for_id("streak-7"), UnlockRule::Streak);
        assert_eq!(UnlockRule::for_id("streak-365"), UnlockRule::Streak);
        assert_eq!(UnlockRule::for_id("hasanat-1000"), UnlockRule::TotalHasanat);
        assert_eq!(UnlockRule::for_id("tahajjud-7"), UnlockRule::TahajjudCount);
        assert_eq!(UnlockRule::for_id("quran-30"), UnlockRule::QuranDays);
        assert_eq!(UnlockRule::for_id("perfect-1"), UnlockRule::PerfectDays);
        assert_eq!(UnlockRule::for_id("tahajjud-40"), UnlockRule::Manual);
        assert_eq!(UnlockRule::for_id("first-login"), UnlockRule::Manual);
    }

    #[test]
    fn test_unlocks_streak_badges() {
        let mut book = AchievementBook::default();
        let stats = AchievementStats {
            streak: 40,
            ..Default::default()
        };
        let unlocked = book.check_and_unlock(&stats, today());
        assert_eq!(unlocked, vec!["streak-7".to_string(), "streak-40".to_string()]);
        assert_eq!(book.get("streak-40").unwrap().unlocked_date, Some(today()));
        assert!(!book.get("streak-100").unwrap().unlocked);
    }

    #[test]
    fn test_check_is_idempotent() {
        let mut book = AchievementBook::default();
        let stats = AchievementStats {
            total_hasanat: 1500,
            perfect_days: 1,
            ..Default::default()
        };
        let first = book.check_and_unlock(&stats, today());
        assert_eq!(first, vec!["hasanat-1000".to_string(), "perfect-1".to_string()]);
        let second = book.check_and_unlock(&stats, today());
        assert!(second.is_empty());
    }

    #[test]
    fn test_unlock_is_monotonic() {
        let mut book = AchievementBook::default();
        let strong = AchievementStats {
            streak: 10,
            tahajjud_count: 7,
            quran_days: 30,
            ..Default::default()
        };
        book.check_and_unlock(&strong, today());
        let unlocked_before = book.unlocked_count();

        let later = today().succ_opt().unwrap();
        let unlocked = book.check_and_unlock(&AchievementStats::default(), later);
        assert!(unlocked.is_empty());
        assert_eq!(book.unlocked_count(), unlocked_before);
        assert!(book.get("streak-7").unwrap().unlocked);
        assert_eq!(book.get("tahajjud-7").unwrap().unlocked_date, Some(today()));
    }

    #[test]
    fn test_manual_achievement_never_auto_unlocks() {
        let mut saved = default_achievements();
        saved.push(Achievement {
            id: "ramadan-complete".to_string(),
            name: "Ramadan".to_string(),
            name_ur: String::new(),
            description: String::new(),
            icon: "moon".to_string(),
            icon_color: String::new(),
            target: 0,
            unlocked: false,
            unlocked_date: None,
            rule: UnlockRule::Manual,
        });
        let mut book = AchievementBook::from_saved(saved);
        let stats = AchievementStats {
            streak: 1000,
            total_hasanat: 1_000_000,
            tahajjud_count: 100,
            quran_days: 100,
            perfect_days: 100,
        };
        let unlocked = book.check_and_unlock(&stats, today());
        assert!(!unlocked.contains(&"ramadan-complete".to_string()));
        assert!(!book.get("ramadan-complete").unwrap().unlocked);
        assert_eq!(unlocked.len(), default_achievements().len());
    }

    #[test]
    fn test_from_saved_keeps_state_and_adds_missing() {
        let mut saved: Vec<Achievement> = default_achievements().into_iter().take(2).collect();
        saved[0].unlocked = true;
        saved[0].unlocked_date = Some(today());

        let book = AchievementBook::from_saved(saved);
        assert_eq!(book.achievements().len(), default_achievements().len());
        assert!(book.get("streak-7").unwrap().unlocked);
        assert_eq!(book.get("quran-30").unwrap().rule, UnlockRule::QuranDays);
    }

    #[test]
    fn test_deserialize_resolves_rules() {
        let json = r#"{"achievements":[{"id":"hasanat-1000","name":"Hunter","target":1000,"unlocked":false,"unlockedDate":null}]}"#;
        let mut book: AchievementBook = serde_json::from_str(json).unwrap();
        assert_eq!(book.get("hasanat-1000").unwrap().rule, UnlockRule::TotalHasanat);

        let stats = AchievementStats {
            total_hasanat: 1000,
            ..Default::default()
        };
        assert_eq!(book.check_and_unlock(&stats, today()), vec!["hasanat-1000".to_string()]);
    }

    #[test]
    fn test_serialize_layout() {
        let book = AchievementBook::default();
        let json = serde_json::to_value(&book).unwrap();
        let first = &json["achievements"][0];
        assert_eq!(first["id"], "streak-7");
        assert_eq!(first["unlocked"], false);
        assert_eq!(first["unlockedDate"], serde_json::Value::Null);
        assert!(first.get("rule").is_none());
    }

    #[test]
    fn test_progress_percent() {
        let book = AchievementBook::default();
        assert_eq!(book.progress_percent("streak-40", 10), 25);
        assert_eq!(book.progress_percent("streak-40", 400), 100);
        assert_eq!(book.progress_percent("missing", 10), 0);
    }

    #[test]
    fn test_current_value() {
        let book = AchievementBook::default();
        let stats = AchievementStats {
            streak: 3,
            quran_days: 12,
            ..Default::default()
        };
        assert_eq!(book.current_value("streak-100", &stats), 3);
        assert_eq!(book.current_value("quran-30", &stats), 12);
        assert_eq!(book.current_value("missing", &stats), 0);
    }
}
