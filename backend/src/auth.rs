//! Authentication collaborator seam.
//!
//! Credential checking itself is not this layer's job: the handler
//! delegates to whatever [`Authenticator`] it was given and only maps
//! the failure kinds it recognizes to user-facing messages.

use async_trait::async_trait;
use shared::FormData;
use thiserror::Error;

/// Typed failure from the authentication collaborator. Only
/// `CredentialsSignin` is treated as a user mistake; every other kind
/// is an infrastructure fault.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    CredentialsSignin,
    #[error("authentication backend failure: {0}")]
    Backend(String),
}

/// External collaborator that performs the actual credential check.
///
/// Implementations fail with [`AuthError`] for recognized
/// authentication failures; anything else propagates untouched.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Attempt a sign-in of the given kind (e.g. `"credentials"`)
    /// using the raw form fields.
    async fn sign_in(&self, kind: &str, form: &FormData) -> anyhow::Result<()>;
}
