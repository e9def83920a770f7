//! Credential lifecycle: saved on login, restored once at startup, removed by
//! explicit logout. Values are persisted as plain text under fixed keys, a
//! known weakness kept for parity with the backend's basic-auth contract.

use serde::{Deserialize, Serialize};

pub const USERNAME_KEY: &str = "username";
pub const PASSWORD_KEY: &str = "password";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Durable client-side key/value storage. Implementations must swallow
/// storage unavailability: writes and removals that cannot be performed are
/// dropped, never surfaced as errors.
pub trait CredentialStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

pub fn save_credentials(store: &impl CredentialStore, credentials: &Credentials) {
    store.write(USERNAME_KEY, &credentials.username);
    store.write(PASSWORD_KEY, &credentials.password);
}

pub fn load_credentials(store: &impl CredentialStore) -> Option<Credentials> {
    let username = store.read(USERNAME_KEY)?;
    let password = store.read(PASSWORD_KEY)?;
    Some(Credentials { username, password })
}

pub fn clear_credentials(store: &impl CredentialStore) {
    store.remove(USERNAME_KEY);
    store.remove(PASSWORD_KEY);
}
