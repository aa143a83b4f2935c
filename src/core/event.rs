use super::queue::{TaskId, Ticks};

/// Outcome of a single rotation turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnEvent {
    // Front entry consumed a full quantum and re-entered at the back
    Requeued { task: TaskId, remaining: Ticks },
    // Front entry finished within the quantum and left rotation
    Dispatched { task: TaskId, completed_at: Ticks },
}
