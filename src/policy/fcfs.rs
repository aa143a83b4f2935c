use super::{back_to_back, Policy};
use crate::core::Dispatch;
use crate::workload::TaskRecord;

/// First-come, first-served: dispatches in batch order.
pub struct Fcfs;

impl Policy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn schedule(&self, batch: &[TaskRecord]) -> Vec<Dispatch> {
        back_to_back(batch, 0..batch.len())
    }
}
