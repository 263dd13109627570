//! OS keychain access for the cached Asana credential.
//!
//! The reporter stores at most one secret: the personal access token under
//! a fixed service/account pair. `CredentialStore` is the seam the
//! resolution chain in `taskpulse-core` is written against, so tests can
//! substitute an in-memory store instead of touching a real keychain.

use keyring::Entry;
use thiserror::Error;

/// Errors from keychain operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The platform keychain rejected or failed the operation.
    #[error("keychain error: {0}")]
    Keyring(#[from] keyring::Error),
}

/// Read/write access to a single named credential.
pub trait CredentialStore {
    /// Returns the stored secret, or `None` if no entry exists.
    fn get(&self, account: &str) -> Result<Option<String>, StoreError>;

    /// Stores or replaces the secret for `account`.
    fn set(&self, account: &str, secret: &str) -> Result<(), StoreError>;

    /// Deletes the secret for `account`. Deleting a missing entry is not
    /// an error.
    fn delete(&self, account: &str) -> Result<(), StoreError>;
}

/// `CredentialStore` backed by the platform keychain via the `keyring`
/// crate (Secret Service / keyutils on Linux, Keychain on macOS,
/// Credential Manager on Windows).
#[derive(Debug, Clone)]
pub struct KeyringStore {
    service: String,
}

impl KeyringStore {
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    fn entry(&self, account: &str) -> Result<Entry, StoreError> {
        Ok(Entry::new(&self.service, account)?)
    }
}

impl CredentialStore for KeyringStore {
    fn get(&self, account: &str) -> Result<Option<String>, StoreError> {
        match self.entry(account)?.get_password() {
            Ok(secret) => Ok(Some(secret)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(err) => {
                tracing::debug!("keychain read failed for {}/{account}: {err}", self.service);
                Err(StoreError::Keyring(err))
            }
        }
    }

    fn set(&self, account: &str, secret: &str) -> Result<(), StoreError> {
        self.entry(account)?.set_password(secret)?;
        tracing::debug!("stored credential for {}/{account}", self.service);
        Ok(())
    }

    fn delete(&self, account: &str) -> Result<(), StoreError> {
        match self.entry(account)?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(err) => Err(StoreError::Keyring(err)),
        }
    }
}
