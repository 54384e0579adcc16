//! Console adapter - writes lines to stdout

use std::io::Write;
use crate::domain::traits::Output;

/// Stdout sink used by the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleOutput;

impl ConsoleOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for ConsoleOutput {
    fn emit(&self, line: &str) {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        if let Err(e) = writeln!(handle, "{}", line) {
            tracing::error!("Failed to write to stdout: {}", e);
        }
    }
}
