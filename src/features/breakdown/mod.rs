//! AI-assisted goal decomposition.

pub mod client;

pub use client::{GeminiPlanner, GoalPlanner, ProposedTask, DEFAULT_MODEL};
