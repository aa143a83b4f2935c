pub mod event;
pub mod observer;
pub mod queue;
pub mod rotation;

pub use event::TurnEvent;
pub use queue::{Dispatch, QueueEntry, TaskId, Ticks, WorkQueue};
pub use rotation::Rotation;
