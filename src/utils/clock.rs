use chrono::{Local, NaiveDateTime, Timelike};

/// Source of "now" for the session tracker, so tests can pin times.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock in local time, truncated to whole seconds like stored values.
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveDateTime {
        let now = Local::now().naive_local();
        now.with_nanosecond(0).unwrap_or(now)
    }
}

/// Clock that always returns the same instant.
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
