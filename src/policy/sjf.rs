use super::{back_to_back, Policy};
use crate::core::{Dispatch, TaskId};
use crate::workload::TaskRecord;

/// Shortest job first: shortest burst dispatches first. The sort is stable,
/// so equal bursts keep their batch order.
pub struct Sjf;

impl Policy for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn schedule(&self, batch: &[TaskRecord]) -> Vec<Dispatch> {
        let mut order: Vec<TaskId> = (0..batch.len()).collect();
        order.sort_by_key(|&task| batch[task].burst_time);
        back_to_back(batch, order)
    }
}
