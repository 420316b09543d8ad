//! Local persistence for tasks and focus sessions.

mod store;

pub use store::DataStore;
