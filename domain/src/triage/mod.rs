//! Triage subdomain: turning provider output into a canonical result.

pub mod normalizer;
pub mod phase;
