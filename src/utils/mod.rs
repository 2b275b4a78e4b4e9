pub mod clock;
pub mod colors;
pub mod path;
pub mod signal;
pub mod table;
pub mod time;

pub use time::format_duration;
