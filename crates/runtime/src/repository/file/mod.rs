//! File-backed repository implementations.

mod action;
mod log;
mod monster;

pub use action::FileActionRepository;
pub use log::RecordLog;
pub use monster::FileMonsterRepository;
