//! Small presentation and browser helpers.

pub mod format;
pub mod session;
pub mod task;
