use log::{error, info, warn};

use crate::domain::validation;
use crate::storage::{DbConnection, SportRepository};
use shared::{views, ActionOutcome, ActionState, FormData, SportFieldErrors};

/// Service for creating training/sport entries.
#[derive(Clone)]
pub struct SportService {
    repository: SportRepository,
}

impl SportService {
    pub fn new(db: DbConnection) -> Self {
        Self {
            repository: SportRepository::new(db),
        }
    }

    /// Create a sport entry from a raw form submission.
    pub async fn create_sport(&self, form: &FormData) -> ActionOutcome<SportFieldErrors> {
        let validated = match validation::validate_sport(form) {
            Ok(validated) => validated,
            Err(errors) => {
                warn!("Sport creation rejected by validation");
                return ActionOutcome::Failure(ActionState::invalid(
                    errors,
                    "Missing Fields. Failed to Create Sport.",
                ));
            }
        };

        let id = match self
            .repository
            .create_sport(&validated.name, &validated.description)
            .await
        {
            Ok(id) => id,
            Err(err) => {
                error!("Failed to create sport: {err}");
                return ActionOutcome::Failure(ActionState::failed(
                    "Database Error: Failed to Create Sport.",
                ));
            }
        };

        info!("Created sport entry {id}: {}", validated.name);
        ActionOutcome::redirect_to(views::TRAINING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::{MSG_DESCRIPTION_TOO_SHORT, MSG_NAME_TOO_SHORT};

    async fn setup_test() -> (SportService, SportRepository) {
        let db = DbConnection::init_test()
            .await
            .expect("Failed to create test database");
        (SportService::new(db.clone()), SportRepository::new(db))
    }

    #[tokio::test]
    async fn test_create_sport_persists_and_redirects() {
        let (service, repo) = setup_test().await;

        let form = FormData::from([
            ("sport", "Running"),
            ("sport_description", "Morning run around the park"),
        ]);
        let outcome = service.create_sport(&form).await;
        assert_eq!(
            outcome,
            ActionOutcome::Success {
                revalidate: vec![views::TRAINING.to_string()],
                redirect: Some(views::TRAINING.to_string()),
                message: None,
            }
        );

        let sports = repo.list_sports().await.expect("Failed to list sports");
        assert_eq!(sports.len(), 1);
        assert_eq!(sports[0].name, "Running");
        assert_eq!(sports[0].description, "Morning run around the park");
    }

    #[tokio::test]
    async fn test_short_fields_fail_with_field_messages_and_no_write() {
        let (service, repo) = setup_test().await;

        let form = FormData::from([("sport", "Yo"), ("sport_description", "Short")]);
        let outcome = service.create_sport(&form).await;
        let ActionOutcome::Failure(state) = outcome else {
            panic!("short fields must not succeed");
        };
        assert_eq!(
            state.message.as_deref(),
            Some("Missing Fields. Failed to Create Sport.")
        );
        let errors = state.errors.expect("field errors expected");
        assert_eq!(errors.name, vec![MSG_NAME_TOO_SHORT]);
        assert_eq!(errors.description, vec![MSG_DESCRIPTION_TOO_SHORT]);

        assert!(repo
            .list_sports()
            .await
            .expect("Failed to list sports")
            .is_empty());
    }
}
