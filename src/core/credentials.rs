//! Credential storage abstraction

use std::fmt;

use thiserror::Error;

/// Keyring service name UPS passwords are stored under
pub const KEYRING_SERVICE: &str = "commerce-ups";

/// Environment variable consulted when no password is configured or stored
pub const PASSWORD_ENV: &str = "UPS_PASSWORD";

/// Errors that can occur with credential operations
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("Credential not found")]
    NotFound,

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Trait for credential storage backends
pub trait CredentialStore: Send + Sync {
    /// Get a credential by key
    fn get(&self, service: &str, key: &str) -> Result<String, CredentialError>;

    /// Set a credential
    fn set(&self, service: &str, key: &str, value: &str) -> Result<(), CredentialError>;

    /// Delete a credential
    fn delete(&self, service: &str, key: &str) -> Result<(), CredentialError>;
}

/// OS keyring implementation
pub struct KeyringCredentialStore;

impl KeyringCredentialStore {
    pub fn new() -> Self {
        Self
    }
}

impl Default for KeyringCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialStore for KeyringCredentialStore {
    fn get(&self, service: &str, key: &str) -> Result<String, CredentialError> {
        let entry = keyring::Entry::new(service, key).map_err(|e| CredentialError::Storage(e.to_string()))?;
        entry.get_password().map_err(|e| match e {
            keyring::Error::NoEntry => CredentialError::NotFound,
            _ => CredentialError::Storage(e.to_string()),
        })
    }

    fn set(&self, service: &str, key: &str, value: &str) -> Result<(), CredentialError> {
        let entry = keyring::Entry::new(service, key).map_err(|e| CredentialError::Storage(e.to_string()))?;
        entry
            .set_password(value)
            .map_err(|e| CredentialError::Storage(e.to_string()))
    }

    fn delete(&self, service: &str, key: &str) -> Result<(), CredentialError> {
        let entry = keyring::Entry::new(service, key).map_err(|e| CredentialError::Storage(e.to_string()))?;
        entry.delete_credential().map_err(|e| match e {
            keyring::Error::NoEntry => CredentialError::NotFound,
            _ => CredentialError::Storage(e.to_string()),
        })
    }
}

/// UPS account credentials sent with every request
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub access_key: String,
    pub user_id: String,
    pub password: String,
}

impl Credentials {
    pub fn new(
        access_key: impl Into<String>,
        user_id: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            access_key: access_key.into(),
            user_id: user_id.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &"[REDACTED]")
            .field("user_id", &self.user_id)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Resolve the UPS password: configured value, then the credential store, then env
pub fn resolve_password(
    configured: Option<&str>,
    user_id: &str,
    store: &dyn CredentialStore,
) -> Result<String, CredentialError> {
    if let Some(password) = configured {
        if !password.is_empty() {
            return Ok(password.to_string());
        }
    }

    match store.get(KEYRING_SERVICE, user_id) {
        Ok(password) => return Ok(password),
        Err(CredentialError::NotFound) => {}
        Err(e) => tracing::debug!("Keyring lookup for {} failed: {}", user_id, e),
    }

    std::env::var(PASSWORD_ENV).map_err(|_| CredentialError::NotFound)
}

/// Save a UPS password for `user_id` where `resolve_password` will find it
pub fn store_password(
    store: &dyn CredentialStore,
    user_id: &str,
    password: &str,
) -> Result<(), CredentialError> {
    if password.is_empty() {
        return Err(CredentialError::Storage("Refusing to store an empty password".to_string()));
    }
    store.set(KEYRING_SERVICE, user_id, password)?;
    tracing::debug!("Stored UPS password for {}", user_id);
    Ok(())
}

/// Remove a stored UPS password
pub fn forget_password(store: &dyn CredentialStore, user_id: &str) -> Result<(), CredentialError> {
    store.delete(KEYRING_SERVICE, user_id)?;
    tracing::debug!("Deleted UPS password for {}", user_id);
    Ok(())
}
