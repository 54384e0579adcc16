//! Domain entities - Commands and the receiver

pub mod command;
pub mod receiver;

pub use command::{Command, ConditionerOff, ConditionerOn, KettleOn};
pub use receiver::Receiver;
