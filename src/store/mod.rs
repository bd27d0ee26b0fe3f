pub mod daily;
pub mod editing;

pub use daily::{DailyStore, QURAN_CATEGORY_ID, TAHAJJUD_TASK_ID};
