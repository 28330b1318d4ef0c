//! Application-level configuration.
//!
//! Configuration types that control how use cases behave, such as the
//! provider call timeout.

mod triage_params;

pub use triage_params::TriageParams;
