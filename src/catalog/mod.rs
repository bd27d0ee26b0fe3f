//! Read-only level catalog that seeds the daily task tree.

pub mod levels;

use crate::domain::{CategoryDefinition, CategoryMeta, Level, Section, TaskDefinition};
use levels::{StaticCategory, StaticSection, StaticTask};

/// Short description of a level, shown when choosing between them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelSummary {
    pub level: Level,
    pub title: &'static str,
    pub title_ur: &'static str,
    pub description: &'static str,
    pub color: &'static str,
    pub est_time: &'static str,
}

fn static_sections(level: Level) -> &'static [StaticSection] {
    match level {
        Level::Beginner => levels::BEGINNER,
        Level::Intermediate => levels::INTERMEDIATE,
        Level::Advanced => levels::ADVANCED,
    }
}

fn to_task(task: &StaticTask) -> TaskDefinition {
    TaskDefinition {
        id: task.id.to_string(),
        name: task.name.to_string(),
        name_en: task.name_en.to_string(),
        hasanat: task.hasanat,
        is_time: task.is_time,
    }
}

fn to_category(category: &StaticCategory) -> CategoryDefinition {
    CategoryDefinition {
        meta: CategoryMeta {
            id: category.id.to_string(),
            name: category.name.to_string(),
            name_en: category.name_en.to_string(),
            color: category.color.to_string(),
            emoji: Some(category.emoji.to_string()),
            bullet_emoji: None,
        },
        tasks: category.tasks.iter().map(to_task).collect(),
    }
}

/// Ordered sections of categories for a level
pub fn load_level(level: Level) -> Vec<Section> {
    static_sections(level)
        .iter()
        .map(|section| Section {
            id: section.id.to_string(),
            title: section.title.to_string(),
            title_ur: section.title_ur.to_string(),
            categories: section.categories.iter().map(to_category).collect(),
        })
        .collect()
}

/// Load a level by its identifier; unknown identifiers load beginner
pub fn load_level_by_id(level_id: &str) -> Vec<Section> {
    load_level(Level::parse(level_id))
}

/// All categories of a level, sections concatenated in order
pub fn all_categories(level: Level) -> Vec<CategoryDefinition> {
    load_level(level)
        .into_iter()
        .flat_map(|section| section.categories)
        .collect()
}

/// Number of tasks a level seeds
pub fn total_tasks(level: Level) -> usize {
    static_sections(level)
        .iter()
        .flat_map(|section| section.categories.iter())
        .map(|category| category.tasks.len())
        .sum()
}

pub fn summary(level: Level) -> LevelSummary {
    match level {
        Level::Beginner => LevelSummary {
            level,
            title: "Beginner",
            title_ur: "مبتدی",
            description: "Focus on Faraiz & basic Sunnah",
            color: "#27AE60",
            est_time: "15-20 min/day",
        },
        Level::Intermediate => LevelSummary {
            level,
            title: "Intermediate",
            title_ur: "درمیانہ",
            description: "Added Azkar & Nafl prayers",
            color: "#D68910",
            est_time: "30-40 min/day",
        },
        Level::Advanced => LevelSummary {
            level,
            title: "Advanced",
            title_ur: "اعلیٰ",
            description: "Complete spiritual routine",
            color: "#E74C3C",
            est_time: "60+ min/day",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_levels_grow_in_demand() {
        let beginner = total_tasks(Level::Beginner);
        let intermediate = total_tasks(Level::Intermediate);
        let advanced = total_tasks(Level::Advanced);
        assert!(beginner > 0);
        assert!(beginner < intermediate);
        assert!(intermediate < advanced);
    }

    #[test]
    fn test_all_categories_preserves_section_order() {
        let sections = load_level(Level::Beginner);
        let flattened = all_categories(Level::Beginner);
        let expected: Vec<String> = sections
            .iter()
            .flat_map(|s| s.categories.iter().map(|c| c.meta.id.clone()))
            .collect();
        let actual: Vec<String> = flattened.iter().map(|c| c.meta.id.clone()).collect();
        assert_eq!(actual, expected);
        assert_eq!(actual[0], "routine");
    }

    #[test]
    fn test_total_tasks_matches_flattened_count() {
        for level in Level::all() {
            let counted: usize = all_categories(*level).iter().map(|c| c.tasks.len()).sum();
            assert_eq!(counted, total_tasks(*level));
        }
    }

    #[test]
    fn test_unknown_level_id_falls_back_to_beginner() {
        assert_eq!(load_level_by_id("sufi"), load_level(Level::Beginner));
    }

    #[test]
    fn test_category_ids_unique_within_level() {
        for level in Level::all() {
            let categories = all_categories(*level);
            let ids: HashSet<_> = categories.iter().map(|c| c.meta.id.as_str()).collect();
            assert_eq!(ids.len(), categories.len(), "duplicate category in {}", level);

            for category in &categories {
                let task_ids: HashSet<_> = category.tasks.iter().map(|t| t.id.as_str()).collect();
                assert_eq!(task_ids.len(), category.tasks.len());
            }
        }
    }

    #[test]
    fn test_time_fields_only_in_routine() {
        for category in all_categories(Level::Advanced) {
            for task in &category.tasks {
                if task.is_time {
                    assert_eq!(category.meta.id, "routine");
                }
            }
        }
    }

    #[test]
    fn test_catalog_rewards_match_reward_table() {
        for level in Level::all() {
            for category in all_categories(*level) {
                for task in category.tasks.iter().filter(|t| !t.is_time) {
                    let reward = crate::rewards::reward_for(&category.meta.id, &task.id, true);
                    assert_eq!(task.hasanat, reward, "{}/{}", category.meta.id, task.id);
                }
            }
        }
    }

    #[test]
    fn test_summary_titles() {
        assert_eq!(summary(Level::Beginner).title, "Beginner");
        assert_eq!(summary(Level::Advanced).est_time, "60+ min/day");
    }
}
