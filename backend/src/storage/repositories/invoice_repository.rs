use sqlx::Row;

use crate::storage::connection::DbConnection;
use crate::storage::StorageError;
use shared::{Invoice, InvoiceStatus};

/// Repository for invoice write and read operations
#[derive(Clone)]
pub struct InvoiceRepository {
    db: DbConnection,
}

impl InvoiceRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// Store a new invoice
    pub async fn create_invoice(&self, invoice: &Invoice) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            INSERT INTO invoices (id, customer_id, amount, status, date)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&invoice.id)
        .bind(&invoice.customer_id)
        .bind(invoice.amount)
        .bind(invoice.status.as_str())
        .bind(&invoice.date)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    /// Update customer, amount and status of an existing invoice. The
    /// issue date is deliberately not part of the statement.
    pub async fn update_invoice(
        &self,
        id: &str,
        customer_id: &str,
        amount: i64,
        status: InvoiceStatus,
    ) -> Result<(), StorageError> {
        let result = sqlx::query(
            r#"
            UPDATE invoices
            SET customer_id = ?, amount = ?, status = ?
            WHERE id = ?
            "#,
        )
        .bind(customer_id)
        .bind(amount)
        .bind(status.as_str())
        .bind(id)
        .execute(self.db.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }

    /// Delete an invoice by ID
    pub async fn delete_invoice(&self, id: &str) -> Result<(), StorageError> {
        let result = sqlx::query("DELETE FROM invoices WHERE id = ?")
            .bind(id)
            .execute(self.db.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }

    /// Get an invoice by ID
    pub async fn get_invoice(&self, id: &str) -> Result<Option<Invoice>, StorageError> {
        let row = sqlx::query(
            r#"
            SELECT id, customer_id, amount, status, date
            FROM invoices
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;

        match row {
            Some(r) => Ok(Some(Self::row_to_invoice(&r)?)),
            None => Ok(None),
        }
    }

    /// List all invoices ordered by issue date, newest first
    pub async fn list_invoices(&self) -> Result<Vec<Invoice>, StorageError> {
        let rows = sqlx::query(
            r#"
            SELECT id, customer_id, amount, status, date
            FROM invoices
            ORDER BY date DESC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::row_to_invoice).collect()
    }

    fn row_to_invoice(row: &sqlx::sqlite::SqliteRow) -> Result<Invoice, StorageError> {
        let status: String = row.get("status");
        let status =
            InvoiceStatus::parse(&status).ok_or_else(|| StorageError::Decode(status.clone()))?;
        Ok(Invoice {
            id: row.get("id"),
            customer_id: row.get("customer_id"),
            amount: row.get("amount"),
            status,
            date: row.get("date"),
        })
    }
}
