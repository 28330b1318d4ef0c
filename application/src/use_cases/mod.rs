//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod query_history;
pub mod triage_feedback;
