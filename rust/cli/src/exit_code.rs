//! Process exit codes.

pub const SUCCESS: i32 = 0;

/// Any failure other than an interrupted session.
pub const ERROR: i32 = 2;

/// Input closed mid-game (Ctrl+D or an exhausted script).
pub const INTERRUPTED: i32 = 130;
