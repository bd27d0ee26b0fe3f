pub mod enums;
pub mod item;
pub mod views;

pub use enums::Level;
pub use item::{
    CategoryDefinition, CategoryMeta, CategoryUpdate, ItemUpdate, Section, TaskDefinition,
    WorkingCategory, WorkingItem,
};
pub use views::{CompletionStats, DayRecord, COMPLETION_THRESHOLD, HISTORY_LIMIT};
