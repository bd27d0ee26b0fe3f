//! Daily devotional habit tracking: a level-based task catalog, per-day
//! completion with midnight reset, streaks with a 40-day chillah counter,
//! hasanat rewards and achievements.

pub mod achievements;
pub mod app;
pub mod catalog;
pub mod clock;
pub mod config;
pub mod domain;
pub mod persistence;
pub mod progress;
pub mod report;
pub mod rewards;
pub mod store;
pub mod ticker;

pub use app::{Rollover, TaskOutcome, Tracker};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
