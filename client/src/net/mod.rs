//! Networking modules for the remote authentication API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the login/register calls and owns the session side effect,
//! `config` resolves endpoint URLs, and `types` defines the wire schema.

pub mod api;
pub mod config;
pub mod types;
