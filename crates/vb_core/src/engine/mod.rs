//! Match State Machine
//!
//! Action protocol, reducer, two-tier action log, and undo.

pub mod actions;
pub mod log;
pub mod reducer;
pub mod undo;

pub use actions::MatchAction;
pub use log::{LogEntry, LogKind};
pub use reducer::apply;
