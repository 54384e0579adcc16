//! Command pattern on a home appliance remote.
//!
//! An [`Invoker`] holds commands in named slots and triggers them through a
//! fixed script. Simple commands do their work themselves; [`KettleOn`]
//! hands it over to a shared [`Receiver`]. Everything writes to an
//! [`Output`] sink.

pub mod domain;
pub mod application;
pub mod infrastructure;

pub use application::errors::{AppError, CommandError, ConfigError};
pub use application::services::{Invoker, Labels, RunPolicy, Scenario, Slot};
pub use domain::entities::{Command, ConditionerOff, ConditionerOn, KettleOn, Receiver};
pub use domain::traits::Output;
pub use infrastructure::adapters::{ConsoleOutput, RecordingOutput};
pub use infrastructure::config::Config;
