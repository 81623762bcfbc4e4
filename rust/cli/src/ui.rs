//! Terminal output helpers shared by the commands.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Print the prompt and flush so it shows before the read blocks.
pub fn prompt(out: &mut dyn Write, text: &str) -> std::io::Result<()> {
    write!(out, "{}", text)?;
    out.flush()
}
