//! Credential resolution.
//!
//! Sources are tried in order, first match wins: explicit argument,
//! `ASANA_API_KEY`, the OS keychain, and finally an interactive prompt
//! when stdin is a terminal. A token typed at the prompt is cached back
//! into the keychain so the next run finds it there.

use std::io::IsTerminal;
use std::io::Write;

use taskpulse_keyring_store::{CredentialStore, StoreError};
use thiserror::Error;

/// Environment variable consulted after the explicit argument.
pub const API_KEY_ENV_VAR: &str = "ASANA_API_KEY";

/// Keychain service name.
pub const KEYRING_SERVICE: &str = "taskpulse";

/// Keychain account name. A single credential, fixed account.
pub const KEYRING_ACCOUNT: &str = "asana";

/// Errors from credential resolution.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Every source came up empty.
    #[error(
        "no Asana access token found; pass one as an argument, set ASANA_API_KEY, \
         or run interactively to be prompted"
    )]
    MissingCredential,

    /// The keychain exists but could not be read.
    #[error(transparent)]
    Keyring(#[from] StoreError),

    /// Reading the token from the terminal failed.
    #[error("failed to read token from terminal: {0}")]
    Io(#[from] std::io::Error),
}

/// Where the resolved token came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    Argument,
    Environment,
    Keyring,
    Prompt,
}

/// A resolved access token.
#[derive(Debug, Clone)]
pub struct Credential {
    pub token: String,
    pub source: CredentialSource,
}

/// Resolves the access token from the standard sources.
///
/// The prompt is only offered when stdin is a terminal; in a pipe or a
/// cron job resolution fails fast with [`AuthError::MissingCredential`]
/// instead of hanging on a read.
pub fn resolve_credential(
    explicit: Option<&str>,
    store: &dyn CredentialStore,
) -> Result<Credential, AuthError> {
    let env_token = std::env::var(API_KEY_ENV_VAR).ok();
    let prompt = std::io::stdin().is_terminal().then_some(prompt_for_token);
    resolve_with(explicit, env_token.as_deref(), store, prompt)
}

/// Resolution chain with every source injectable.
fn resolve_with<P>(
    explicit: Option<&str>,
    env_token: Option<&str>,
    store: &dyn CredentialStore,
    prompt: Option<P>,
) -> Result<Credential, AuthError>
where
    P: FnOnce() -> std::io::Result<String>,
{
    if let Some(token) = explicit.and_then(non_blank) {
        tracing::debug!("using access token from command line argument");
        return Ok(Credential {
            token: token.to_string(),
            source: CredentialSource::Argument,
        });
    }

    if let Some(token) = env_token.and_then(non_blank) {
        tracing::debug!("using access token from {API_KEY_ENV_VAR}");
        return Ok(Credential {
            token: token.to_string(),
            source: CredentialSource::Environment,
        });
    }

    if let Some(stored) = store.get(KEYRING_ACCOUNT)? {
        if let Some(token) = non_blank(&stored) {
            tracing::debug!("using access token from keychain");
            return Ok(Credential {
                token: token.to_string(),
                source: CredentialSource::Keyring,
            });
        }
    }

    if let Some(prompt) = prompt {
        let typed = prompt()?;
        if let Some(token) = non_blank(&typed) {
            // Cache for the next run. Not being able to is an
            // inconvenience, not a failure.
            if let Err(err) = store.set(KEYRING_ACCOUNT, token) {
                tracing::warn!("could not cache token in keychain: {err}");
            }
            return Ok(Credential {
                token: token.to_string(),
                source: CredentialSource::Prompt,
            });
        }
    }

    Err(AuthError::MissingCredential)
}

/// Treats blank/whitespace-only values as absent.
fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Reads a token from the terminal.
fn prompt_for_token() -> std::io::Result<String> {
    eprint!("Asana personal access token: ");
    std::io::stderr().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line)
}
