use std::sync::Arc;
use serde::{Deserialize, Serialize};
use crate::application::errors::CommandError;
use crate::application::services::invoker::{Invoker, RunPolicy};
use crate::domain::entities::{ConditionerOff, ConditionerOn, KettleOn, Receiver};
use crate::domain::traits::Output;

/// Text carried by each command of the demo
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Labels {
    pub conditioner_on: String,
    pub conditioner_off: String,
    pub kettle_pressed: String,
    pub kettle_running: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            conditioner_on: "conditioner switched on".to_string(),
            conditioner_off: "conditioner switched off".to_string(),
            kettle_pressed: "kettle switched on".to_string(),
            kettle_running: "kettle is running".to_string(),
        }
    }
}

/// The remote as the program sets it up: one receiver, three commands, one run
pub struct Scenario {
    labels: Labels,
    policy: RunPolicy,
}

impl Scenario {
    pub fn new(labels: Labels) -> Self {
        Self {
            labels,
            policy: RunPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: RunPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Build an invoker with every slot assigned
    pub fn build(&self) -> Invoker {
        let mut invoker = Invoker::new().with_policy(self.policy);
        invoker.set_conditioner_on(ConditionerOn::new(&self.labels.conditioner_on));
        invoker.set_conditioner_off(ConditionerOff::new(&self.labels.conditioner_off));

        let receiver = Arc::new(Receiver::new());
        invoker.set_kettle_on(KettleOn::new(
            receiver,
            &self.labels.kettle_pressed,
            &self.labels.kettle_running,
        ));
        invoker
    }

    pub fn run(&self, out: &dyn Output) -> Result<(), CommandError> {
        tracing::debug!("Running scenario with policy {:?}", self.policy);
        self.build().run_all(out)
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self::new(Labels::default())
    }
}
