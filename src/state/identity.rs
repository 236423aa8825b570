//! Identity provider backed by an injected key-value store.
//!
//! The persisted state is a single string: the current user identifier.
//! Hosts hand in whatever storage they have (browser local storage, a
//! settings file); tests use [`MemoryUserIdStore`].

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use std::sync::{Mutex, RwLock};

use crate::error::Error;
use crate::net::types::User;

/// Storage key conventionally holding the user identifier in hosts with
/// shared key-value storage.
pub const USER_ID_KEY: &str = "userId";

/// Key-value storage boundary for the persisted user identifier.
pub trait UserIdStore: Send + Sync {
    fn get(&self) -> Option<String>;
    fn set(&self, id: &str);
    fn remove(&self);
}

/// In-memory store for tests and hosts without persistent storage.
#[derive(Debug, Default)]
pub struct MemoryUserIdStore {
    id: Mutex<Option<String>>,
}

impl UserIdStore for MemoryUserIdStore {
    fn get(&self) -> Option<String> {
        self.id.lock().ok().and_then(|guard| guard.clone())
    }

    fn set(&self, id: &str) {
        if let Ok(mut guard) = self.id.lock() {
            *guard = Some(id.to_owned());
        }
    }

    fn remove(&self) {
        if let Ok(mut guard) = self.id.lock() {
            *guard = None;
        }
    }
}

/// Resolves the current user from the injected store and caches it for
/// the session.
pub struct Identity {
    store: Box<dyn UserIdStore>,
    current: RwLock<Option<User>>,
}

impl Identity {
    #[must_use]
    pub fn new(store: Box<dyn UserIdStore>) -> Self {
        let current = RwLock::new(store.get().map(|id| User { id }));
        Self { store, current }
    }

    /// The current user, if any. Absence is a valid state.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.current.read().ok().and_then(|guard| guard.clone())
    }

    /// The current user, or a precondition error for flows that require
    /// an authenticated context.
    ///
    /// # Errors
    ///
    /// `Precondition` when nobody is logged in.
    pub fn required_user(&self) -> Result<User, Error> {
        self.current_user().ok_or(Error::Precondition("need a user id"))
    }

    /// Persist the identifier and update the cached identity.
    pub fn login(&self, id: &str) -> User {
        self.store.set(id);
        let user = User { id: id.to_owned() };
        if let Ok(mut guard) = self.current.write() {
            *guard = Some(user.clone());
        }
        user
    }

    /// Clear the persisted identifier and the cached identity. Dependent
    /// query caches are invalidated by [`crate::App::logout`].
    pub fn logout(&self) {
        self.store.remove();
        if let Ok(mut guard) = self.current.write() {
            *guard = None;
        }
    }
}
