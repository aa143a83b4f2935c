use super::{batch_order_seed, Policy};
use crate::core::{Dispatch, Rotation, Ticks};
use crate::workload::TaskRecord;

/// Rotates exactly like `RoundRobin`: the queue is seeded in batch order and
/// task priority never enters the rotation. A priority-aware variant would
/// seed by descending priority; this one does not, and is reported under its
/// own heading only.
pub struct PriorityRoundRobin {
    quantum: Ticks,
}

impl PriorityRoundRobin {
    pub fn new(quantum: Ticks) -> Self {
        Self { quantum }
    }
}

impl Policy for PriorityRoundRobin {
    fn name(&self) -> &'static str {
        "Priority with Round-Robin"
    }

    fn schedule(&self, batch: &[TaskRecord]) -> Vec<Dispatch> {
        Rotation::new(batch_order_seed(batch), self.quantum).run()
    }
}
