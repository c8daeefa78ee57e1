//! Rendering helpers sitting between the greeting constant and the FFI
//! surface.
//!
//! The writer-generic path exists so the printed line can be asserted on in
//! tests without capturing process stdout.

use std::io::{self, Write};

use crate::common::error::{GreetError, GreetResult};

use super::domain;

/// Write the greeting plus a line terminator to the given sink.
pub fn write_greeting(out: &mut impl Write) -> GreetResult<()> {
    writeln!(out, "{}", domain::GREETING).map_err(|_| GreetError::io())
}

/// Print the greeting to the process standard output.
///
/// The host method returns void, so there is no channel to report a write
/// failure; the error is handed back to the caller for logging only.
pub fn print_greeting() -> GreetResult<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_greeting(&mut handle)?;
    handle.flush().map_err(|_| GreetError::io())
}

/// Borrow the greeting text for handoff to the host string constructor.
pub fn greeting_text() -> &'static str {
    domain::GREETING
}
