//! Invoker - holds commands in named slots and triggers them

use std::fmt;
use crate::application::errors::CommandError;
use crate::domain::entities::Command;
use crate::domain::traits::Output;

/// Named command slots on the remote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    ConditionerOn,
    ConditionerOff,
    KettleOn,
}

impl Slot {
    pub const ALL: [Slot; 3] = [Slot::ConditionerOn, Slot::ConditionerOff, Slot::KettleOn];

    pub fn as_str(&self) -> &'static str {
        match self {
            Slot::ConditionerOn => "conditioner-on",
            Slot::ConditionerOff => "conditioner-off",
            Slot::KettleOn => "kettle-on",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How `run_all` treats its script
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunPolicy {
    /// Fail on the first empty slot instead of skipping it
    pub strict: bool,
    /// Execute the conditioner-off slot in the second step.
    /// Off by default: the second step re-runs the conditioner-on slot.
    pub use_off_slot: bool,
}

impl RunPolicy {
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn use_off_slot(mut self, use_off_slot: bool) -> Self {
        self.use_off_slot = use_off_slot;
        self
    }
}

/// Sends requests to commands without knowing their concrete type
#[derive(Default)]
pub struct Invoker {
    conditioner_on: Option<Box<dyn Command>>,
    conditioner_off: Option<Box<dyn Command>>,
    kettle_on: Option<Box<dyn Command>>,
    policy: RunPolicy,
}

impl Invoker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(mut self, policy: RunPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> RunPolicy {
        self.policy
    }

    pub fn set_conditioner_on(&mut self, command: impl Command + 'static) {
        self.set(Slot::ConditionerOn, Box::new(command));
    }

    pub fn set_conditioner_off(&mut self, command: impl Command + 'static) {
        self.set(Slot::ConditionerOff, Box::new(command));
    }

    pub fn set_kettle_on(&mut self, command: impl Command + 'static) {
        self.set(Slot::KettleOn, Box::new(command));
    }

    /// Assign a slot, replacing whatever was there
    pub fn set(&mut self, slot: Slot, command: Box<dyn Command>) {
        tracing::debug!("Assigning {} to slot {}", command.name(), slot);
        *self.slot_mut(slot) = Some(command);
    }

    pub fn get(&self, slot: Slot) -> Option<&dyn Command> {
        match slot {
            Slot::ConditionerOn => self.conditioner_on.as_deref(),
            Slot::ConditionerOff => self.conditioner_off.as_deref(),
            Slot::KettleOn => self.kettle_on.as_deref(),
        }
    }

    pub fn is_set(&self, slot: Slot) -> bool {
        self.get(slot).is_some()
    }

    /// Run the fixed script: a status line before each of the three steps
    pub fn run_all(&self, out: &dyn Output) -> Result<(), CommandError> {
        out.emit("Invoker: doing some work before switching the conditioner on");
        self.execute(Slot::ConditionerOn, out)?;

        out.emit("Invoker: doing some work before switching the conditioner off");
        let second = if self.policy.use_off_slot {
            Slot::ConditionerOff
        } else {
            Slot::ConditionerOn
        };
        self.execute(second, out)?;

        out.emit("Invoker: doing some work before switching the kettle on");
        self.execute(Slot::KettleOn, out)?;

        Ok(())
    }

    fn execute(&self, slot: Slot, out: &dyn Output) -> Result<(), CommandError> {
        match self.get(slot) {
            Some(command) => {
                tracing::debug!("Executing {} from slot {}", command.name(), slot);
                command.execute(out)
            }
            None if self.policy.strict => Err(CommandError::EmptySlot(slot)),
            None => {
                tracing::warn!("Slot {} is empty, skipping", slot);
                Ok(())
            }
        }
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut Option<Box<dyn Command>> {
        match slot {
            Slot::ConditionerOn => &mut self.conditioner_on,
            Slot::ConditionerOff => &mut self.conditioner_off,
            Slot::KettleOn => &mut self.kettle_on,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use crate::domain::entities::{ConditionerOff, ConditionerOn, KettleOn, Receiver};
    use crate::infrastructure::adapters::memory::RecordingOutput;

    fn wired(policy: RunPolicy) -> Invoker {
        let mut invoker = Invoker::new().with_policy(policy);
        invoker.set_conditioner_on(ConditionerOn::new("A"));
        invoker.set_conditioner_off(ConditionerOff::new("B"));
        invoker.set_kettle_on(KettleOn::new(Arc::new(Receiver::new()), "C", "D"));
        invoker
    }

    #[test]
    fn test_run_all_repeats_conditioner_on() {
        let out = RecordingOutput::new();
        wired(RunPolicy::default()).run_all(&out).unwrap();

        let lines = out.lines();
        assert_eq!(lines.len(), 8);
        assert!(lines[0].starts_with("Invoker:"));
        assert!(lines[1].contains("(A)"));
        assert!(lines[2].starts_with("Invoker:"));
        assert!(lines[3].contains("(A)"));
        assert!(lines[4].starts_with("Invoker:"));
        assert!(lines[5].starts_with("KettleOn:"));
        assert!(lines[6].contains("(C.)"));
        assert!(lines[7].contains("(D.)"));
        assert!(!lines.iter().any(|l| l.contains("(B)")));
    }

    #[test]
    fn test_use_off_slot_runs_conditioner_off() {
        let out = RecordingOutput::new();
        wired(RunPolicy::default().use_off_slot(true)).run_all(&out).unwrap();

        let lines = out.lines();
        assert_eq!(lines.len(), 8);
        assert!(lines[1].contains("(A)"));
        assert!(lines[3].starts_with("ConditionerOff:"));
        assert!(lines[3].contains("(B)"));
    }

    #[test]
    fn test_last_write_wins() {
        let mut invoker = wired(RunPolicy::default());
        invoker.set_conditioner_on(ConditionerOn::new("replaced"));

        let out = RecordingOutput::new();
        invoker.run_all(&out).unwrap();

        let lines = out.lines();
        assert_eq!(lines.iter().filter(|l| l.contains("(replaced)")).count(), 2);
        assert!(!lines.iter().any(|l| l.contains("(A)")));
    }

    #[test]
    fn test_set_by_slot() {
        let mut invoker = Invoker::new();
        assert!(Slot::ALL.iter().all(|s| !invoker.is_set(*s)));

        invoker.set(Slot::KettleOn, Box::new(ConditionerOff::new("odd")));
        assert!(invoker.is_set(Slot::KettleOn));
        assert_eq!(invoker.get(Slot::KettleOn).map(|c| c.name()), Some("ConditionerOff"));
        assert!(!invoker.is_set(Slot::ConditionerOn));
    }

    #[test]
    fn test_empty_slots_are_skipped() {
        let out = RecordingOutput::new();
        Invoker::new().run_all(&out).unwrap();

        let lines = out.lines();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.starts_with("Invoker:")));
    }

    #[test]
    fn test_strict_fails_on_first_empty_slot() {
        let mut invoker = Invoker::new().with_policy(RunPolicy::default().strict(true));
        invoker.set_conditioner_on(ConditionerOn::new("A"));

        let out = RecordingOutput::new();
        let err = invoker.run_all(&out).unwrap_err();
        assert_eq!(err, CommandError::EmptySlot(Slot::KettleOn));
        // Everything before the kettle step already went out
        assert_eq!(out.lines().len(), 5);
    }

    #[test]
    fn test_strict_checks_off_slot_when_used() {
        let mut invoker = Invoker::new()
            .with_policy(RunPolicy::default().strict(true).use_off_slot(true));
        invoker.set_conditioner_on(ConditionerOn::new("A"));

        let out = RecordingOutput::new();
        let err = invoker.run_all(&out).unwrap_err();
        assert_eq!(err, CommandError::EmptySlot(Slot::ConditionerOff));
        assert_eq!(out.lines().len(), 3);
    }

    struct Jammed;

    impl Command for Jammed {
        fn name(&self) -> &str {
            "Jammed"
        }

        fn execute(&self, _out: &dyn Output) -> Result<(), CommandError> {
            Err(CommandError::ExecutionFailed("switch is jammed".to_string()))
        }
    }

    #[test]
    fn test_command_failure_stops_script() {
        let mut invoker = wired(RunPolicy::default());
        invoker.set_conditioner_on(Jammed);

        let out = RecordingOutput::new();
        let err = invoker.run_all(&out).unwrap_err();
        assert_eq!(err, CommandError::ExecutionFailed("switch is jammed".to_string()));
        assert_eq!(err.to_string(), "Execution failed: switch is jammed");
        // Only the first status line made it out
        assert_eq!(out.lines().len(), 1);
    }

    #[test]
    fn test_run_all_is_repeatable() {
        let invoker = wired(RunPolicy::default());
        let first = RecordingOutput::new();
        let second = RecordingOutput::new();
        invoker.run_all(&first).unwrap();
        invoker.run_all(&second).unwrap();
        assert_eq!(first.lines(), second.lines());
    }

    #[test]
    fn test_slot_display() {
        assert_eq!(Slot::ConditionerOff.to_string(), "conditioner-off");
        assert_eq!(
            CommandError::EmptySlot(Slot::KettleOn).to_string(),
            "No command assigned to slot kettle-on"
        );
    }
}
