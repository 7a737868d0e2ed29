//! Reusable view components for the app shell.

pub mod footer;
pub mod header;
