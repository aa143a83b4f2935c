pub mod generate;
pub mod loader;
pub mod task;

pub use loader::{load_batch, LoadError};
pub use task::TaskRecord;
