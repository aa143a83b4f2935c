use rustc_hash::FxHashSet;

use super::queue::{Dispatch, WorkQueue};

#[derive(Debug)]
pub struct Observer {
    step: u64,
}

impl Observer {
    pub fn new() -> Self {
        Self { step: 0 }
    }

    pub fn observe(&mut self, queue: &WorkQueue, dispatched: &[Dispatch]) {
        self.step += 1;

        // Work conservation: granted work plus work still queued must equal
        // the seeded total.
        debug_assert_eq!(
            queue.elapsed() + queue.remaining_work(),
            queue.total_work(),
            "turn {}: granted plus queued work diverged from seeded total",
            self.step
        );

        let mut seen = FxHashSet::default();
        for entry in queue.entries() {
            debug_assert!(
                seen.insert(entry.task),
                "turn {}: task {} queued more than once",
                self.step,
                entry.task
            );
        }
        for dispatch in dispatched {
            debug_assert!(
                seen.insert(dispatch.task),
                "turn {}: task {} dispatched while still in rotation",
                self.step,
                dispatch.task
            );
        }

        debug_assert!(
            dispatched
                .windows(2)
                .all(|pair| pair[0].completed_at <= pair[1].completed_at),
            "turn {}: dispatch clock must be non-decreasing",
            self.step
        );
    }
}
