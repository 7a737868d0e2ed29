//! Auth state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! A snapshot of the session store. The app shell re-reads it on mount and
//! after every page change, so the header only ever renders what is stored.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::api::{AuthClient, Transport};
use crate::net::types::UserRecord;
use crate::state::session::Storage;

/// The signed-in user, if any.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<UserRecord>,
}

impl AuthState {
    /// Synchronously read the current session.
    pub fn read<T: Transport, S: Storage>(client: &AuthClient<T, S>) -> Self {
        Self { user: client.current_user() }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn username(&self) -> Option<&str> {
        self.user.as_ref().and_then(UserRecord::username)
    }
}
