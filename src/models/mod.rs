pub mod activity;
pub mod interval;
