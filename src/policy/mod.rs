pub mod fcfs;
pub mod priority;
pub mod priority_rr;
pub mod round_robin;
pub mod sjf;

pub use fcfs::Fcfs;
pub use priority::Priority;
pub use priority_rr::PriorityRoundRobin;
pub use round_robin::RoundRobin;
pub use sjf::Sjf;

use crate::core::{Dispatch, TaskId, Ticks};
use crate::workload::TaskRecord;

/// Work units granted per rotation turn unless overridden.
pub const DEFAULT_QUANTUM: Ticks = 10;

/// A scheduling policy: given a read-only batch, produce the simulated
/// dispatch sequence. Pure computation; rendering lives elsewhere.
pub trait Policy {
    fn name(&self) -> &'static str;

    /// Dispatch sequence over `batch`. Tasks are identified by their index
    /// into the batch, so duplicate names stay distinct. An empty batch
    /// yields an empty sequence.
    fn schedule(&self, batch: &[TaskRecord]) -> Vec<Dispatch>;
}

/// The registered policies, in their fixed invocation order.
pub fn registry(quantum: Ticks) -> Vec<Box<dyn Policy>> {
    vec![
        Box::new(Fcfs),
        Box::new(Sjf),
        Box::new(Priority),
        Box::new(RoundRobin::new(quantum)),
        Box::new(PriorityRoundRobin::new(quantum)),
    ]
}

/// Batch-order rotation seed. Both quantum policies pass exactly this; a
/// priority-aware variant would seed differently.
pub(crate) fn batch_order_seed(
    batch: &[TaskRecord],
) -> impl Iterator<Item = (TaskId, Ticks)> + '_ {
    batch
        .iter()
        .enumerate()
        .map(|(task, record)| (task, record.burst_time))
}

/// Run `order` to completion back to back, with no preemption: each task
/// completes at the running sum of burst times.
pub(crate) fn back_to_back(
    batch: &[TaskRecord],
    order: impl IntoIterator<Item = TaskId>,
) -> Vec<Dispatch> {
    let mut elapsed: Ticks = 0;
    order
        .into_iter()
        .map(|task| {
            elapsed = elapsed.saturating_add(batch[task].burst_time);
            Dispatch {
                task,
                completed_at: elapsed,
            }
        })
        .collect()
}
