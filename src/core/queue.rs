use std::collections::VecDeque;

// Index into the caller's batch
pub type TaskId = usize;
pub type Ticks = u64;

/// One task leaving rotation: which task, and the work-unit clock reading at
/// the turn it was fully serviced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub task: TaskId,
    pub completed_at: Ticks,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueEntry {
    pub task: TaskId,
    pub remaining: Ticks,
}

/// Working queue for one rotation: front entry is up next, unfinished
/// entries re-enter at the back. Private to a single policy invocation.
#[derive(Debug)]
pub struct WorkQueue {
    entries: VecDeque<QueueEntry>,
    elapsed: Ticks,
    total_work: Ticks,
}

impl WorkQueue {
    pub fn seed(entries: impl IntoIterator<Item = (TaskId, Ticks)>) -> Self {
        let entries: VecDeque<QueueEntry> = entries
            .into_iter()
            .map(|(task, remaining)| QueueEntry { task, remaining })
            .collect();
        let total_work = entries.iter().map(|entry| entry.remaining).sum();

        Self {
            entries,
            elapsed: 0,
            total_work,
        }
    }

    pub fn pop(&mut self) -> Option<QueueEntry> {
        self.entries.pop_front()
    }

    pub fn requeue(&mut self, entry: QueueEntry) {
        self.entries.push_back(entry);
    }

    pub fn consume(&mut self, work: Ticks) {
        self.elapsed = self.elapsed.saturating_add(work);
    }

    pub fn elapsed(&self) -> Ticks {
        self.elapsed
    }

    pub fn total_work(&self) -> Ticks {
        self.total_work
    }

    pub fn remaining_work(&self) -> Ticks {
        self.entries.iter().map(|entry| entry.remaining).sum()
    }

    pub fn entries(&self) -> impl Iterator<Item = &QueueEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
