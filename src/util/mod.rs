//! Small browser-facing utilities.

pub mod dark_mode;
