use serde::Serialize;

/// A named category of work (`activities` table).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub id: i64,      // ⇔ activities.id
    pub name: String, // ⇔ activities.activity
}
