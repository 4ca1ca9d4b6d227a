//! Small shared helpers for the view layer.

pub mod format;
pub mod validate;
