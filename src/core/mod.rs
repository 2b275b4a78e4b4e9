pub mod inspect;
pub mod log;
pub mod session;
pub mod store;
