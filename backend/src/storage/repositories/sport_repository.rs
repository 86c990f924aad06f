use sqlx::Row;

use crate::storage::connection::DbConnection;
use crate::storage::StorageError;
use shared::SportActivity;

/// Repository for sport/training entries
#[derive(Clone)]
pub struct SportRepository {
    db: DbConnection,
}

impl SportRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// Store a new sport entry, returning the storage-assigned ID
    pub async fn create_sport(
        &self,
        name: &str,
        description: &str,
    ) -> Result<i64, StorageError> {
        let result = sqlx::query(
            r#"
            INSERT INTO sports ("name", "desc")
            VALUES (?, ?)
            "#,
        )
        .bind(name)
        .bind(description)
        .execute(self.db.pool())
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Get a sport entry by ID
    pub async fn get_sport(&self, id: i64) -> Result<Option<SportActivity>, StorageError> {
        let row = sqlx::query(
            r#"
            SELECT id, "name", "desc"
            FROM sports
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(row.map(|r| SportActivity {
            id: r.get("id"),
            name: r.get("name"),
            description: r.get("desc"),
        }))
    }

    /// List all sport entries in insertion order
    pub async fn list_sports(&self) -> Result<Vec<SportActivity>, StorageError> {
        let rows = sqlx::query(
            r#"
            SELECT id, "name", "desc"
            FROM sports
            ORDER BY id ASC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        Ok(rows
            .iter()
            .map(|r| SportActivity {
                id: r.get("id"),
                name: r.get("name"),
                description: r.get("desc"),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn setup_test() -> SportRepository {
        let db = DbConnection::init_test()
            .await
            .expect("Failed to create test database");
        SportRepository::new(db)
    }

    #[tokio::test]
    async fn test_create_and_get_sport() {
        let repo = setup_test().await;

        let id = repo
            .create_sport("Running", "Morning run around the park")
            .await
            .expect("Failed to create sport");
        assert!(id > 0);

        let stored = repo
            .get_sport(id)
            .await
            .expect("Failed to get sport")
            .expect("Sport should exist");
        assert_eq!(stored.name, "Running");
        assert_eq!(stored.description, "Morning run around the park");
    }

    #[tokio::test]
    async fn test_ids_are_assigned_in_order() {
        let repo = setup_test().await;

        let first = repo
            .create_sport("Running", "Morning run around the park")
            .await
            .expect("Failed to create sport");
        let second = repo
            .create_sport("Swimming", "Laps in the pool")
            .await
            .expect("Failed to create sport");
        assert!(second > first);

        let sports = repo.list_sports().await.expect("Failed to list sports");
        assert_eq!(sports.len(), 2);
        assert_eq!(sports[0].name, "Running");
        assert_eq!(sports[1].name, "Swimming");
    }
}
