//! Task management: the task model and its ordered store.

pub mod store;
pub mod task;

pub use store::TaskStore;
pub use task::{DueDate, Priority, Task, TaskStatus};
