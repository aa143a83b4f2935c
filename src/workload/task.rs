use crate::core::Ticks;

/// One task as read from the input batch. `name` is display identity only;
/// duplicates are permitted and stay distinct by batch position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRecord {
    pub name: String,
    pub priority: i64,
    pub burst_time: Ticks,
}

impl TaskRecord {
    pub fn new(name: impl Into<String>, priority: i64, burst_time: Ticks) -> Self {
        Self {
            name: name.into(),
            priority,
            burst_time,
        }
    }
}
