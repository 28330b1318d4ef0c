//! Result rendering

pub mod console;
pub mod formatter;
pub mod history;
