//! Line-oriented input for interactive commands.

use std::io::BufRead;

/// Read one trimmed line. `Ok(None)` means the input is closed.
///
/// # Example
///
/// ```rust
/// use duelpoker_cli::io_utils::read_stdin_line;
/// use std::io::Cursor;
///
/// let mut input = Cursor::new("  raise 60 \n");
/// assert_eq!(read_stdin_line(&mut input).unwrap().as_deref(), Some("raise 60"));
/// assert_eq!(read_stdin_line(&mut input).unwrap(), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    match stdin.read_line(&mut line)? {
        0 => Ok(None),
        _ => Ok(Some(line.trim().to_string())),
    }
}
