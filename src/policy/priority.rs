use std::cmp::Reverse;

use super::{back_to_back, Policy};
use crate::core::{Dispatch, TaskId};
use crate::workload::TaskRecord;

/// Priority scheduling: the highest priority value dispatches first. The
/// sort is stable, so equal priorities keep their batch order.
pub struct Priority;

impl Policy for Priority {
    fn name(&self) -> &'static str {
        "Priority"
    }

    fn schedule(&self, batch: &[TaskRecord]) -> Vec<Dispatch> {
        let mut order: Vec<TaskId> = (0..batch.len()).collect();
        order.sort_by_key(|&task| Reverse(batch[task].priority));
        back_to_back(batch, order)
    }
}
