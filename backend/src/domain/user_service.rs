use std::sync::Arc;

use anyhow::Result;
use log::{error, info, warn};
use uuid::Uuid;

use crate::auth::{AuthError, Authenticator};
use crate::domain::{transform, validation};
use crate::storage::{DbConnection, UserRepository};
use shared::{views, ActionOutcome, ActionState, FormData, RegisterFieldErrors, User};

pub const MSG_INVALID_CREDENTIALS: &str = "Invalid credentials.";
pub const MSG_SOMETHING_WENT_WRONG: &str = "Something went wrong.";

/// Service for user registration and authentication.
#[derive(Clone)]
pub struct UserService {
    repository: UserRepository,
    authenticator: Arc<dyn Authenticator>,
}

impl UserService {
    pub fn new(db: DbConnection, authenticator: Arc<dyn Authenticator>) -> Self {
        Self {
            repository: UserRepository::new(db),
            authenticator,
        }
    }

    /// Register a new user from a raw form submission.
    ///
    /// The password hash is awaited to completion before the insert
    /// statement is built; the plaintext never reaches storage. On
    /// success the caller is sent to the login view.
    pub async fn register(&self, form: &FormData) -> ActionOutcome<RegisterFieldErrors> {
        let validated = match validation::validate_register(form) {
            Ok(validated) => validated,
            Err(errors) => {
                warn!("Registration rejected by validation");
                return ActionOutcome::Failure(ActionState::invalid(
                    errors,
                    "Missing Fields. Failed to Create User.",
                ));
            }
        };

        let hashed = match transform::hash_password(validated.password).await {
            Ok(hashed) => hashed,
            Err(err) => {
                error!("Failed to hash password: {err}");
                return ActionOutcome::Failure(ActionState::failed("Failed to Create User."));
            }
        };

        let user = User {
            id: Uuid::new_v4().to_string(),
            name: validated.name,
            email: validated.email,
            password: hashed.into_inner(),
        };

        if let Err(err) = self.repository.create_user(&user).await {
            error!("Failed to create user: {err}");
            return ActionOutcome::Failure(ActionState::failed(
                "Database Error: Failed to Create User.",
            ));
        }

        info!("Registered user {}", user.id);
        ActionOutcome::redirect_to(views::LOGIN)
    }

    /// Attempt a credentials sign-in through the authentication
    /// collaborator.
    ///
    /// Returns `Ok(None)` on success and `Ok(Some(message))` for the
    /// two recognized failure classes; anything that is not an
    /// [`AuthError`] is re-raised untouched.
    pub async fn authenticate(&self, form: &FormData) -> Result<Option<String>> {
        match self.authenticator.sign_in("credentials", form).await {
            Ok(()) => Ok(None),
            Err(err) => match err.downcast_ref::<AuthError>() {
                Some(AuthError::CredentialsSignin) => {
                    warn!("Sign-in rejected: bad credentials");
                    Ok(Some(MSG_INVALID_CREDENTIALS.to_string()))
                }
                Some(other) => {
                    error!("Sign-in failed: {other}");
                    Ok(Some(MSG_SOMETHING_WENT_WRONG.to_string()))
                }
                None => Err(err),
            },
        }
    }
}
