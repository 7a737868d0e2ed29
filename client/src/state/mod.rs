//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is the persisted source of truth; `auth` and `ui` are the
//! reactive views of it that components read through context.

pub mod auth;
pub mod session;
pub mod ui;
