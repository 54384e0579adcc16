//! Application services - Command orchestration

pub mod invoker;
pub mod scenario;

pub use invoker::{Invoker, RunPolicy, Slot};
pub use scenario::{Labels, Scenario};
