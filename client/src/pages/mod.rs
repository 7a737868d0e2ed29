//! Page modules for the body area.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form state and delegates auth calls to the shared
//! `AuthClient`; completion is reported back through a callback so the shell
//! decides what to re-read and where to go next.

pub mod home;
pub mod login;
pub mod signup;
