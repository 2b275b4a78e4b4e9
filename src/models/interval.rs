use serde::Serialize;

/// Stop value of an interval that has not been stopped yet.
pub const OPEN_SENTINEL: &str = "TBD";

/// One timed session (`times` table), joined with its activity name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interval {
    pub id: i64,                  // ⇔ times.time_id
    pub activity_id: Option<i64>, // ⇔ times.activity_id (nullable FK)
    pub activity: Option<String>, // ⇔ activities.activity
    pub start: Option<String>,    // ⇔ times.start ("DD-MM-YYYY HH:MM:SS")
    pub stop: Option<String>,     // ⇔ times.stop (timestamp or "TBD")
}

impl Interval {
    pub fn is_open(&self) -> bool {
        self.stop.as_deref() == Some(OPEN_SENTINEL)
    }
}
