//! Hasanat (reward) values for completing tasks.
//!
//! Rewards are resolved from a declarative rule table. The first rule whose
//! category and task pattern match decides the value; anything unmatched
//! earns [`DEFAULT_REWARD`].

/// Reward for a task no rule covers
pub const DEFAULT_REWARD: u32 = 10;

/// Reward per counted tasbih
pub const TASBIH_REWARD: u32 = 1;

const FARDH_PRAYERS: &[&str] = &["fajr", "zuhr", "asr", "maghrib", "isha"];
const AZKAR_CATEGORIES: &[&str] = &["azkar-morning", "azkar-evening"];

/// How a rule computes its value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewardValue {
    Flat(u32),
    /// Obligatory prayer, multiplied when prayed in congregation
    Prayer { alone: u32, congregation: u32 },
}

impl RewardValue {
    pub fn resolve(&self, in_congregation: bool) -> u32 {
        match *self {
            RewardValue::Flat(value) => value,
            RewardValue::Prayer { alone, congregation } => {
                if in_congregation {
                    congregation
                } else {
                    alone
                }
            }
        }
    }
}

/// Which task ids a rule applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskPattern {
    Exact(&'static [&'static str]),
    /// Any id containing the fragment, e.g. `istighfar-100`
    Contains(&'static str),
}

impl TaskPattern {
    fn matches(&self, task_id: &str) -> bool {
        match self {
            TaskPattern::Exact(ids) => ids.contains(&task_id),
            TaskPattern::Contains(fragment) => task_id.contains(fragment),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RewardRule {
    pub categories: &'static [&'static str],
    pub task: TaskPattern,
    pub value: RewardValue,
}

impl RewardRule {
    fn matches(&self, category_id: &str, task_id: &str) -> bool {
        self.categories.contains(&category_id) && self.task.matches(task_id)
    }
}

pub static REWARD_RULES: &[RewardRule] = &[
    RewardRule {
        categories: &["faraiz"],
        task: TaskPattern::Exact(FARDH_PRAYERS),
        value: RewardValue::Prayer {
            alone: 1,
            congregation: 27,
        },
    },
    RewardRule {
        categories: &["faraiz"],
        task: TaskPattern::Exact(&["takbeer"]),
        value: RewardValue::Flat(50),
    },
    RewardRule {
        categories: &["quran"],
        task: TaskPattern::Exact(&["yaseen", "waqiah", "mulk"]),
        value: RewardValue::Flat(100),
    },
    RewardRule {
        categories: &["quran"],
        task: TaskPattern::Exact(&["tilawat"]),
        value: RewardValue::Flat(50),
    },
    RewardRule {
        categories: AZKAR_CATEGORIES,
        task: TaskPattern::Contains("istighfar"),
        value: RewardValue::Flat(10),
    },
    RewardRule {
        categories: AZKAR_CATEGORIES,
        task: TaskPattern::Contains("durood"),
        value: RewardValue::Flat(10),
    },
    RewardRule {
        categories: AZKAR_CATEGORIES,
        task: TaskPattern::Contains("kalima"),
        value: RewardValue::Flat(10),
    },
    RewardRule {
        categories: &["nawafil"],
        task: TaskPattern::Exact(&["tahajjud"]),
        value: RewardValue::Flat(100),
    },
    RewardRule {
        categories: &["nawafil"],
        task: TaskPattern::Exact(&["ishraq", "chasht", "awabeen"]),
        value: RewardValue::Flat(50),
    },
];

/// Hasanat earned for completing `task_id` in `category_id`
pub fn reward_for(category_id: &str, task_id: &str, in_congregation: bool) -> u32 {
    REWARD_RULES
        .iter()
        .find(|rule| rule.matches(category_id, task_id))
        .map(|rule| rule.value.resolve(in_congregation))
        .unwrap_or(DEFAULT_REWARD)
}

/// Hasanat earned for a tasbih counter session
pub fn tasbih_reward(count: u32) -> u64 {
    u64::from(count) * u64::from(TASBIH_REWARD)
}

/// Format a hasanat total with `k`/`M` suffixes and one decimal place
pub fn format_hasanat(value: u64) -> String {
    if value < 1_000 {
        return value.to_string();
    }

    // Tenths of a thousand, rounded half up; 999_950 would print as
    // "1000.0k" so it moves up to the millions bucket instead.
    let tenths_k = value.saturating_add(50) / 100;
    if value < 1_000_000 && tenths_k < 10_000 {
        return format!("{}.{}k", tenths_k / 10, tenths_k % 10);
    }

    let tenths_m = value.saturating_add(50_000) / 100_000;
    format!("{}.{}M", tenths_m / 10, tenths_m % 10)
}
