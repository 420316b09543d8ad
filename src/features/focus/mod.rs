//! Focus timing: the timer engine and the session history it feeds.

pub mod session;
pub mod timer;

pub use session::{FocusSession, SessionStore};
pub use timer::{Completion, FocusTimer, Phase, TimerMode};
