use super::{
    event::TurnEvent,
    observer::Observer,
    queue::{Dispatch, TaskId, Ticks, WorkQueue},
};

/// Quantum rotation over a working queue.
///
/// Each turn pops the front entry and grants it up to `quantum` work units.
/// An entry with more work left re-enters at the back; otherwise it is
/// dispatched at the current clock reading. The seed order is the only
/// ordering input: requeued entries always go to the back.
///
/// Every turn either removes an entry or shrinks its remaining work by the
/// full quantum, so the queue drains in finite time.
pub struct Rotation {
    queue: WorkQueue,
    quantum: Ticks,
    observer: Observer,
    dispatched: Vec<Dispatch>,
}

impl Rotation {
    pub fn new(entries: impl IntoIterator<Item = (TaskId, Ticks)>, quantum: Ticks) -> Self {
        assert!(quantum > 0, "Rotation requires a positive quantum");
        let queue = WorkQueue::seed(entries);
        let dispatched = Vec::with_capacity(queue.len());
        Self {
            queue,
            quantum,
            observer: Observer::new(),
            dispatched,
        }
    }

    /// Run one turn; `None` once the queue is empty.
    pub fn step(&mut self) -> Option<TurnEvent> {
        let mut entry = self.queue.pop()?;

        let event = if entry.remaining > self.quantum {
            self.queue.consume(self.quantum);
            entry.remaining -= self.quantum;
            let event = TurnEvent::Requeued {
                task: entry.task,
                remaining: entry.remaining,
            };
            self.queue.requeue(entry);
            event
        } else {
            self.queue.consume(entry.remaining);
            let dispatch = Dispatch {
                task: entry.task,
                completed_at: self.queue.elapsed(),
            };
            self.dispatched.push(dispatch.clone());
            TurnEvent::Dispatched {
                task: dispatch.task,
                completed_at: dispatch.completed_at,
            }
        };

        self.observer.observe(&self.queue, &self.dispatched);
        Some(event)
    }

    /// Rotate until the queue drains and return the dispatch sequence.
    pub fn run(mut self) -> Vec<Dispatch> {
        while self.step().is_some() {}
        self.dispatched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rotate(bursts: &[Ticks], quantum: Ticks) -> Vec<Dispatch> {
        Rotation::new(bursts.iter().copied().enumerate(), quantum).run()
    }

    #[test]
    fn short_bursts_dispatch_in_seed_order() {
        let dispatched = rotate(&[5, 10, 3], 10);
        let order: Vec<TaskId> = dispatched.iter().map(|d| d.task).collect();
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn long_burst_rotates_to_the_back() {
        // 25 needs three turns: 25 -> 15 -> 5
        let dispatched = rotate(&[5, 25, 8], 10);
        let order: Vec<TaskId> = dispatched.iter().map(|d| d.task).collect();
        assert_eq!(order, vec![0, 2, 1]);
    }

    #[test]
    fn completion_clock_counts_granted_work() {
        let dispatched = rotate(&[5, 25, 8], 10);
        assert_eq!(
            dispatched,
            vec![
                Dispatch {
                    task: 0,
                    completed_at: 5
                },
                Dispatch {
                    task: 2,
                    completed_at: 23
                },
                Dispatch {
                    task: 1,
                    completed_at: 38
                },
            ]
        );
    }

    #[test]
    fn every_entry_dispatched_exactly_once() {
        let bursts = [13, 7, 42, 1, 10, 29];
        let dispatched = rotate(&bursts, 10);
        let mut tasks: Vec<TaskId> = dispatched.iter().map(|d| d.task).collect();
        tasks.sort_unstable();
        assert_eq!(tasks, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn quantum_of_one_still_drains() {
        let dispatched = rotate(&[3, 1, 2], 1);
        let order: Vec<TaskId> = dispatched.iter().map(|d| d.task).collect();
        assert_eq!(order, vec![1, 2, 0]);
        assert_eq!(dispatched.last().unwrap().completed_at, 6);
    }

    #[test]
    fn zero_remaining_dispatches_on_first_turn() {
        let dispatched = rotate(&[0, 4], 10);
        assert_eq!(
            dispatched[0],
            Dispatch {
                task: 0,
                completed_at: 0
            }
        );
    }

    #[test]
    fn empty_seed_yields_no_turns() {
        let mut rotation = Rotation::new(std::iter::empty(), 10);
        assert_eq!(rotation.step(), None);
    }

    #[test]
    fn step_reports_requeues_before_dispatch() {
        let mut rotation = Rotation::new([(0, 12)], 10);
        assert_eq!(
            rotation.step(),
            Some(TurnEvent::Requeued {
                task: 0,
                remaining: 2
            })
        );
        assert_eq!(
            rotation.step(),
            Some(TurnEvent::Dispatched {
                task: 0,
                completed_at: 12
            })
        );
        assert_eq!(rotation.step(), None);
    }
}
