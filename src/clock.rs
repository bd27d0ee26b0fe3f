use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};
use std::cell::Cell;
use std::rc::Rc;

/// Calendar-day key format used in every persisted document
pub const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

/// Source of the current local wall-clock time.
///
/// "Today" always means the device's local calendar date, never UTC.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Clock backed by the system's local time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Manually driven clock. Clones share the same instant, so a test can keep
/// one handle and move time forward under a `Tracker` that owns the other.
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Rc<Cell<NaiveDateTime>>,
}

impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Rc::new(Cell::new(now)),
        }
    }

    /// Clock pinned to noon of the given date
    pub fn on(date: NaiveDate) -> Self {
        Self::new(date.and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap_or(NaiveTime::MIN)))
    }

    pub fn set(&self, now: NaiveDateTime) {
        self.now.set(now);
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn advance_days(&self, days: i64) {
        self.advance(Duration::days(days));
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.now.get()
    }
}

/// Format a date as its `YYYY-MM-DD` key
pub fn day_key(date: NaiveDate) -> String {
    date.format(DAY_KEY_FORMAT).to_string()
}

/// Parse a strict `YYYY-MM-DD` key
pub fn parse_day_key(key: &str) -> Option<NaiveDate> {
    if key.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(key, DAY_KEY_FORMAT).ok()
}

/// Today's key according to `clock`
pub fn today_key(clock: &dyn Clock) -> String {
    day_key(clock.today())
}

/// Yesterday's key according to `clock`
pub fn yesterday_key(clock: &dyn Clock) -> String {
    day_key(yesterday(clock.today()))
}

/// The calendar day before `today`
pub fn yesterday(today: NaiveDate) -> NaiveDate {
    today.pred_opt().unwrap_or(today)
}

pub fn is_today(date: NaiveDate, today: NaiveDate) -> bool {
    date == today
}

pub fn is_yesterday(date: NaiveDate, today: NaiveDate) -> bool {
    today.pred_opt() == Some(date)
}

/// Monday of the week containing `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Zero-based weekday index, Monday = 0 ... Sunday = 6
pub fn weekday_index(date: NaiveDate) -> usize {
    date.weekday().num_days_from_monday() as usize
}

/// Time left until the next local midnight
pub fn until_midnight(now: NaiveDateTime) -> Duration {
    match now.date().succ_opt() {
        Some(tomorrow) => tomorrow.and_time(NaiveTime::MIN) - now,
        None => Duration::zero(),
    }
}

/// Milliseconds left until the next local midnight
pub fn ms_until_midnight(now: NaiveDateTime) -> i64 {
    until_midnight(now).num_milliseconds()
}
