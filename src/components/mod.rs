//! Reusable view components.

pub mod navbar;
