pub mod documents;
pub mod files;
pub mod sink;

pub use documents::{load_json_or_else, load_state, save_json, save_state, PersistenceError, SavedState};
pub use files::{
    atomic_write, ensure_dir, get_data_dir, init_local_data_dir, read_file, report_file,
    ACHIEVEMENT_FILE, CONFIG_FILE, STORE_FILE, USER_FILE,
};
pub use sink::{JsonDirSink, MemorySink, StateSink};
