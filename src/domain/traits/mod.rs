//! Domain traits - Abstractions for infrastructure implementations

pub mod output;

pub use output::Output;
