//! Structural edits to the working tree.
//!
//! Edits never touch completion state, apart from new items starting
//! uncompleted. Unknown ids and out-of-range indices are ignored.

use super::DailyStore;
use crate::domain::{CategoryMeta, CategoryUpdate, ItemUpdate, TaskDefinition, WorkingCategory, WorkingItem};

impl DailyStore {
    /// Append an item to a category. Ids must be unique within the category.
    pub fn add_item(&mut self, category_id: &str, task: TaskDefinition) -> bool {
        let Some(category) = self.category_mut(category_id) else {
            tracing::debug!(category_id, "add_item on unknown category ignored");
            return false;
        };
        if category.item(&task.id).is_some() {
            tracing::debug!(category_id, item_id = %task.id, "duplicate item id ignored");
            return false;
        }
        category.items.push(WorkingItem::new(task));
        true
    }

    pub fn remove_item(&mut self, category_id: &str, item_id: &str) -> bool {
        let Some(category) = self.category_mut(category_id) else {
            return false;
        };
        let before = category.items.len();
        category.items.retain(|item| item.id() != item_id);
        category.items.len() != before
    }

    pub fn update_item(&mut self, category_id: &str, item_id: &str, update: &ItemUpdate) -> bool {
        let Some(item) = self
            .category_mut(category_id)
            .and_then(|category| category.item_mut(item_id))
        else {
            return false;
        };

        update.apply(&mut item.task);
        if item.is_time() {
            item.completed = item.time_value.is_some();
        } else {
            item.time_value = None;
        }
        true
    }

    /// Append an empty category. Category ids must be unique.
    pub fn add_category(&mut self, meta: CategoryMeta) -> bool {
        if self.category(&meta.id).is_some() {
            tracing::debug!(category_id = %meta.id, "duplicate category id ignored");
            return false;
        }
        self.categories.push(WorkingCategory::new(meta));
        true
    }

    pub fn remove_category(&mut self, category_id: &str) -> bool {
        let before = self.categories.len();
        self.categories.retain(|category| category.id() != category_id);
        self.categories.len() != before
    }

    pub fn update_category(&mut self, category_id: &str, update: &CategoryUpdate) -> bool {
        match self.category_mut(category_id) {
            Some(category) => {
                update.apply(&mut category.meta);
                true
            }
            None => false,
        }
    }

    /// Move the category at `from` to position `to`
    pub fn reorder_categories(&mut self, from: usize, to: usize) -> bool {
        move_within(&mut self.categories, from, to)
    }

    /// Move the item at `from` to position `to` within one category
    pub fn reorder_items(&mut self, category_id: &str, from: usize, to: usize) -> bool {
        match self.category_mut(category_id) {
            Some(category) => move_within(&mut category.items, from, to),
            None => false,
        }
    }
}

/// Remove the element at `from` and reinsert it at `to`, keeping the relative
/// order of everything else. `to` past the end means "last".
fn move_within<T>(list: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from >= list.len() {
        return false;
    }
    let element = list.remove(from);
    let to = to.min(list.len());
    list.insert(to, element);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Level;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn store() -> DailyStore {
        DailyStore::new(Level::Beginner, NaiveDate::from_ymd_opt(2024, 6, 12).unwrap())
    }

    fn category_ids(store: &DailyStore) -> Vec<String> {
        store.categories.iter().map(|c| c.id().to_string()).collect()
    }

    fn item_ids(store: &DailyStore, category_id: &str) -> Vec<String> {
        store
            .category(category_id)
            .unwrap()
            .items
            .iter()
            .map(|i| i.id().to_string())
            .collect()
    }

    #[test]
    fn test_add_item_starts_uncompleted() {
        let mut store = store();
        assert!(store.add_item("faraiz", TaskDefinition::new("witr", "وتر", 10)));
        let item = store.item("faraiz", "witr").unwrap();
        assert!(!item.completed);
        assert_eq!(item_ids(&store, "faraiz").last().unwrap(), "witr");
    }

    #[test]
    fn test_add_item_rejects_duplicates_and_unknown_category() {
        let mut store = store();
        assert!(!store.add_item("faraiz", TaskDefinition::new("fajr", "فجر", 27)));
        assert!(!store.add_item("missing", TaskDefinition::new("x", "x", 1)));
    }

    #[test]
    fn test_remove_item() {
        let mut store = store();
        assert!(store.remove_item("faraiz", "asr"));
        assert!(store.item("faraiz", "asr").is_none());
        // Removing again is a no-op
        assert!(!store.remove_item("faraiz", "asr"));
        assert!(!store.remove_item("missing", "asr"));
    }

    #[test]
    fn test_update_item_keeps_completion() {
        let mut store = store();
        store.toggle_item("faraiz", "fajr");
        let update = ItemUpdate {
            name: Some("نماز فجر".to_string()),
            ..Default::default()
        };
        assert!(store.update_item("faraiz", "fajr", &update));
        let item = store.item("faraiz", "fajr").unwrap();
        assert_eq!(item.task.name, "نماز فجر");
        assert!(item.completed);
    }

    #[test]
    fn test_update_item_unknown_is_noop() {
        let mut store = store();
        let before = store.clone();
        assert!(!store.update_item("faraiz", "missing", &ItemUpdate::default()));
        assert_eq!(store, before);
    }

    #[test]
    fn test_category_crud() {
        let mut store = store();
        let count = store.categories.len();

        assert!(store.add_category(CategoryMeta::new("sadaqah", "صدقہ", "#AAAAAA")));
        assert!(!store.add_category(CategoryMeta::new("sadaqah", "صدقہ", "#AAAAAA")));
        assert_eq!(store.categories.len(), count + 1);
        assert!(store.category("sadaqah").unwrap().items.is_empty());

        let update = CategoryUpdate {
            name_en: Some("Charity".to_string()),
            ..Default::default()
        };
        assert!(store.update_category("sadaqah", &update));
        assert_eq!(store.category("sadaqah").unwrap().meta.name_en, "Charity");

        assert!(store.remove_category("sadaqah"));
        assert!(!store.remove_category("sadaqah"));
        assert_eq!(store.categories.len(), count);
    }

    #[test]
    fn test_reorder_categories_preserves_relative_order() {
        let mut store = store();
        let mut expected = category_ids(&store);
        let moved = expected.remove(0);
        expected.insert(2, moved);

        assert!(store.reorder_categories(0, 2));
        assert_eq!(category_ids(&store), expected);
    }

    #[test]
    fn test_reorder_items() {
        let mut store = store();
        assert!(store.reorder_items("faraiz", 4, 0));
        assert_eq!(
            item_ids(&store, "faraiz"),
            vec!["isha", "fajr", "zuhr", "asr", "maghrib"]
        );

        // Past-the-end target moves to last
        assert!(store.reorder_items("faraiz", 0, 99));
        assert_eq!(
            item_ids(&store, "faraiz"),
            vec!["fajr", "zuhr", "asr", "maghrib", "isha"]
        );
    }

    #[test]
    fn test_reorder_out_of_range_is_noop() {
        let mut store = store();
        let before = store.clone();
        assert!(!store.reorder_categories(99, 0));
        assert!(!store.reorder_items("faraiz", 99, 0));
        assert!(!store.reorder_items("missing", 0, 1));
        assert_eq!(store, before);
    }
}
