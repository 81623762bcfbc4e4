//! Command handler modules.
//!
//! Each subcommand lives in its own file and follows the same shape:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) and input (`&mut dyn BufRead`) are passed in
//! - Errors propagate via `CliError`

mod cfg;
mod deal;
mod play;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::{PlayOptions, handle_play_command};
