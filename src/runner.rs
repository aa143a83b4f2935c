use crate::core::{Dispatch, Ticks};
use crate::policy::{self, Policy};
use crate::workload::TaskRecord;

/// One policy's output over a batch.
pub struct PolicyRun {
    pub policy: &'static str,
    pub dispatches: Vec<Dispatch>,
}

/// Applies every registered policy to the same pristine batch, in
/// registration order. Stateless between invocations.
pub struct PolicyRunner {
    policies: Vec<Box<dyn Policy>>,
}

impl PolicyRunner {
    pub fn new(quantum: Ticks) -> Self {
        Self {
            policies: policy::registry(quantum),
        }
    }

    pub fn run_all(&self, batch: &[TaskRecord]) -> Vec<PolicyRun> {
        self.policies
            .iter()
            .map(|policy| {
                log::debug!("running {} over {} tasks", policy.name(), batch.len());
                PolicyRun {
                    policy: policy.name(),
                    dispatches: policy.schedule(batch),
                }
            })
            .collect()
    }
}
