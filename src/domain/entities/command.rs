use std::fmt;
use std::sync::Arc;

use crate::application::errors::CommandError;
use crate::domain::entities::Receiver;
use crate::domain::traits::Output;

/// A request wrapped up as a value that can be executed later
pub trait Command: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Run the command, writing whatever it produces to `out`
    fn execute(&self, out: &dyn Output) -> Result<(), CommandError>;
}

impl fmt::Debug for dyn Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Command({})", self.name())
    }
}

/// Switches the conditioner on. Simple enough to do the work itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionerOn {
    payload: String,
}

impl ConditionerOn {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }
}

impl Command for ConditionerOn {
    fn name(&self) -> &str {
        "ConditionerOn"
    }

    fn execute(&self, out: &dyn Output) -> Result<(), CommandError> {
        out.emit(&format!(
            "ConditionerOn: simple action, kept inside the command ({})",
            self.payload
        ));
        Ok(())
    }
}

/// Switches the conditioner off
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionerOff {
    payload: String,
}

impl ConditionerOff {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }
}

impl Command for ConditionerOff {
    fn name(&self) -> &str {
        "ConditionerOff"
    }

    fn execute(&self, out: &dyn Output) -> Result<(), CommandError> {
        out.emit(&format!(
            "ConditionerOff: mirrors the switch-on command ({})",
            self.payload
        ));
        Ok(())
    }
}

/// Switches the kettle on by delegating to a [`Receiver`]
#[derive(Debug, Clone)]
pub struct KettleOn {
    receiver: Arc<Receiver>,
    // Context the receiver needs
    a: String,
    b: String,
}

impl KettleOn {
    pub fn new(receiver: Arc<Receiver>, a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            receiver,
            a: a.into(),
            b: b.into(),
        }
    }

    pub fn receiver(&self) -> &Arc<Receiver> {
        &self.receiver
    }
}

impl Command for KettleOn {
    fn name(&self) -> &str {
        "KettleOn"
    }

    fn execute(&self, out: &dyn Output) -> Result<(), CommandError> {
        out.emit("KettleOn: handing work over to the receiver");
        self.receiver.do_something(out, &self.a);
        self.receiver.do_something_else(out, &self.b);
        Ok(())
    }
}
