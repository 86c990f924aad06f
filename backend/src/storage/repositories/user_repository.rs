use sqlx::Row;

use crate::storage::connection::DbConnection;
use crate::storage::StorageError;
use shared::User;

/// Repository for user accounts
#[derive(Clone)]
pub struct UserRepository {
    db: DbConnection,
}

impl UserRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// Store a new user. The caller is responsible for the password
    /// field already holding a hash.
    pub async fn create_user(&self, user: &User) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, name, email, password)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    /// Find a user by email address
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StorageError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, email, password
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(row.map(|r| User {
            id: r.get("id"),
            name: r.get("name"),
            email: r.get("email"),
            password: r.get("password"),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn setup_test() -> UserRepository {
        let db = DbConnection::init_test()
            .await
            .expect("Failed to create test database");
        UserRepository::new(db)
    }

    #[tokio::test]
    async fn test_create_and_find_user() {
        let repo = setup_test().await;
        let user = User {
            id: "user-1".to_string(),
            name: "Test User".to_string(),
            email: "user@example.com".to_string(),
            password: "$2b$10$somehash".to_string(),
        };

        repo.create_user(&user).await.expect("Failed to create user");

        let stored = repo
            .find_user_by_email("user@example.com")
            .await
            .expect("Failed to find user")
            .expect("User should exist");
        assert_eq!(stored, user);
    }

    #[tokio::test]
    async fn test_find_missing_user_is_none() {
        let repo = setup_test().await;

        let stored = repo
            .find_user_by_email("nobody@example.com")
            .await
            .expect("Lookup should not fail");
        assert!(stored.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_is_storage_error() {
        let repo = setup_test().await;
        let user = User {
            id: "user-1".to_string(),
            name: "Test User".to_string(),
            email: "user@example.com".to_string(),
            password: "$2b$10$somehash".to_string(),
        };
        repo.create_user(&user).await.expect("Failed to create user");

        let duplicate = User {
            id: "user-2".to_string(),
            ..user
        };
        let result = repo.create_user(&duplicate).await;
        assert!(matches!(result, Err(StorageError::Database(_))));
    }
}
