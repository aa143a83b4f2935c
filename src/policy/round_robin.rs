use super::{batch_order_seed, Policy};
use crate::core::{Dispatch, Rotation, Ticks};
use crate::workload::TaskRecord;

/// Round-robin: each task is granted up to `quantum` work units per turn;
/// unfinished tasks re-enter the queue at the back.
pub struct RoundRobin {
    quantum: Ticks,
}

impl RoundRobin {
    pub fn new(quantum: Ticks) -> Self {
        Self { quantum }
    }
}

impl Policy for RoundRobin {
    fn name(&self) -> &'static str {
        "Round-Robin"
    }

    fn schedule(&self, batch: &[TaskRecord]) -> Vec<Dispatch> {
        Rotation::new(batch_order_seed(batch), self.quantum).run()
    }
}
