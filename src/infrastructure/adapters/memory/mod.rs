//! In-memory adapter - records lines instead of printing them

use std::sync::Mutex;
use crate::domain::traits::Output;

/// Sink that keeps every emitted line, in order
#[derive(Debug, Default)]
pub struct RecordingOutput {
    lines: Mutex<Vec<String>>,
}

impl RecordingOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the lines emitted so far
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    pub fn len(&self) -> usize {
        self.lines().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        match self.lines.lock() {
            Ok(mut lines) => lines.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }
    }
}

impl Output for RecordingOutput {
    fn emit(&self, line: &str) {
        match self.lines.lock() {
            Ok(mut lines) => lines.push(line.to_string()),
            Err(poisoned) => poisoned.into_inner().push(line.to_string()),
        }
    }
}
