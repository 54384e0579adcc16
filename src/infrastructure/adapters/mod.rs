//! Output adapters

pub mod console;
pub mod memory;

pub use console::ConsoleOutput;
pub use memory::RecordingOutput;
