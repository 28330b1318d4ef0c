//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod classifier;
pub mod progress;
pub mod triage_history;
pub mod triage_recorder;
