use serde::{Deserialize, Serialize};

/// A task as defined by the level catalog or by the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDefinition {
    pub id: String,
    /// Localized (Urdu) name
    pub name: String,
    /// English display name
    #[serde(default)]
    pub name_en: String,
    /// Base reward shown next to the task
    #[serde(default)]
    pub hasanat: u32,
    /// Completion is recorded as a time of day (wake/sleep) instead of a checkbox
    #[serde(default)]
    pub is_time: bool,
}

impl TaskDefinition {
    pub fn new(id: impl Into<String>, name: impl Into<String>, hasanat: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            name_en: String::new(),
            hasanat,
            is_time: false,
        }
    }

    /// Create a task with a freshly generated id
    pub fn custom(name: impl Into<String>, hasanat: u32) -> Self {
        Self::new(format!("custom-{}", uuid::Uuid::new_v4()), name, hasanat)
    }

    pub fn with_name_en(mut self, name_en: impl Into<String>) -> Self {
        self.name_en = name_en.into();
        self
    }

    pub fn time_field(mut self) -> Self {
        self.is_time = true;
        self
    }
}

/// Identity and presentation of a category, shared by catalog and working tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryMeta {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub name_en: String,
    #[serde(default)]
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bullet_emoji: Option<String>,
}

impl CategoryMeta {
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            name_en: String::new(),
            color: color.into(),
            emoji: None,
            bullet_emoji: None,
        }
    }
}

/// A category from the catalog with its tasks in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDefinition {
    pub meta: CategoryMeta,
    pub tasks: Vec<TaskDefinition>,
}

/// A named group of categories within a level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub title_ur: String,
    pub categories: Vec<CategoryDefinition>,
}

/// A task in today's working tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkingItem {
    #[serde(flatten)]
    pub task: TaskDefinition,
    #[serde(default)]
    pub completed: bool,
    /// "HH:MM" local time, only ever set on time fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_value: Option<String>,
}

impl WorkingItem {
    pub fn new(task: TaskDefinition) -> Self {
        Self {
            task,
            completed: false,
            time_value: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.task.id
    }

    pub fn is_time(&self) -> bool {
        self.task.is_time
    }

    /// Clear today's completion, keeping the task itself
    pub fn reset(&mut self) {
        self.completed = false;
        self.time_value = None;
    }
}

/// A category in today's working tree, including user customizations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkingCategory {
    #[serde(flatten)]
    pub meta: CategoryMeta,
    #[serde(default)]
    pub items: Vec<WorkingItem>,
}

impl WorkingCategory {
    pub fn new(meta: CategoryMeta) -> Self {
        Self {
            meta,
            items: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.meta.id
    }

    pub fn item(&self, item_id: &str) -> Option<&WorkingItem> {
        self.items.iter().find(|item| item.id() == item_id)
    }

    pub fn item_mut(&mut self, item_id: &str) -> Option<&mut WorkingItem> {
        self.items.iter_mut().find(|item| item.id() == item_id)
    }
}

impl From<CategoryDefinition> for WorkingCategory {
    fn from(def: CategoryDefinition) -> Self {
        Self {
            meta: def.meta,
            items: def.tasks.into_iter().map(WorkingItem::new).collect(),
        }
    }
}

/// Partial update for a working item. Completion state is not editable here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemUpdate {
    pub name: Option<String>,
    pub name_en: Option<String>,
    pub hasanat: Option<u32>,
    pub is_time: Option<bool>,
}

impl ItemUpdate {
    pub fn apply(&self, task: &mut TaskDefinition) {
        if let Some(name) = &self.name {
            task.name = name.clone();
        }
        if let Some(name_en) = &self.name_en {
            task.name_en = name_en.clone();
        }
        if let Some(hasanat) = self.hasanat {
            task.hasanat = hasanat;
        }
        if let Some(is_time) = self.is_time {
            task.is_time = is_time;
        }
    }
}

/// Partial update for a working category (rename, recolor, re-emoji)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub name_en: Option<String>,
    pub color: Option<String>,
    pub emoji: Option<String>,
    pub bullet_emoji: Option<String>,
}

impl CategoryUpdate {
    pub fn apply(&self, meta: &mut CategoryMeta) {
        if let Some(name) = &self.name {
            meta.name = name.clone();
        }
        if let Some(name_en) = &self.name_en {
            meta.name_en = name_en.clone();
        }
        if let Some(color) = &self.color {
            meta.color = color.clone();
        }
        if let Some(emoji) = &self.emoji {
            meta.emoji = Some(emoji.clone());
        }
        if let Some(bullet) = &self.bullet_emoji {
            meta.bullet_emoji = Some(bullet.clone());
        }
    }
}
