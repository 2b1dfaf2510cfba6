//! # User Repository
//!
//! Provides access to the user collection and the current-session marker.
//!
//! Both live as JSON under two keys of a [`KeyValueStore`]. Every write is a
//! read-modify-write of the whole collection.
//!
//! ## Example
//!
//! ```rust
//! use chrono::Utc;
//! use lib_core::config::Config;
//! use lib_core::model::store::{MemoryStore, UserForCreate, UserRepository};
//!
//! # fn main() -> lib_core::Result<()> {
//! let store = MemoryStore::new();
//! let config = Config::default();
//! let users = UserRepository::new(&store, &config);
//!
//! users.create(
//!     UserForCreate::new("alice@example.com".into(), "alice".into(), "secret1".into()),
//!     Utc::now(),
//! )?;
//!
//! let found = users.find_by_credentials("alice@example.com", "secret1")?;
//! assert!(found.is_some());
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, Utc};
use tracing::debug;

use super::models::{User, UserForCreate};
use super::{read_json, write_json, KeyValueStore};
use crate::config::Config;
use crate::error::Result;

/// User repository bound to one store and its configured keys.
pub struct UserRepository<'a, S: KeyValueStore + ?Sized> {
    store: &'a S,
    users_key: &'a str,
    current_user_key: &'a str,
}

impl<'a, S: KeyValueStore + ?Sized> UserRepository<'a, S> {
    pub fn new(store: &'a S, config: &'a Config) -> Self {
        Self {
            store,
            users_key: &config.users_key,
            current_user_key: &config.current_user_key,
        }
    }

    /// Load the whole collection. An absent key is an empty collection.
    pub fn list(&self) -> Result<Vec<User>> {
        Ok(read_json(self.store, self.users_key)?.unwrap_or_default())
    }

    /// Find the first user whose email and password both match exactly.
    pub fn find_by_credentials(&self, email: &str, password: &str) -> Result<Option<User>> {
        Ok(self
            .list()?
            .into_iter()
            .find(|user| user.email == email && user.password == password))
    }

    /// Find the first user sharing either the email or the username.
    pub fn find_by_email_or_username(&self, email: &str, username: &str) -> Result<Option<User>> {
        Ok(self
            .list()?
            .into_iter()
            .find(|user| user.email == email || user.username == username))
    }

    /// Append a new user and persist the collection.
    ///
    /// Does not check uniqueness; callers do that first with
    /// [`find_by_email_or_username`](Self::find_by_email_or_username).
    pub fn create(&self, user_c: UserForCreate, now: DateTime<Utc>) -> Result<User> {
        let mut users = self.list()?;
        let user = user_c.into_user(now);
        users.push(user.clone());
        write_json(self.store, self.users_key, &users)?;
        debug!("stored user collection, {} record(s)", users.len());
        Ok(user)
    }

    /// Overwrite the current-session marker.
    pub fn set_current_user(&self, user: &User) -> Result<()> {
        write_json(self.store, self.current_user_key, user)
    }

    /// Read the current-session marker.
    pub fn current_user(&self) -> Result<Option<User>> {
        read_json(self.store, self.current_user_key)
    }
}
