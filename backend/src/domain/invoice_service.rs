use log::{error, info, warn};
use uuid::Uuid;

use crate::domain::{transform, validation};
use crate::storage::{DbConnection, InvoiceRepository};
use shared::{views, ActionOutcome, ActionState, FormData, Invoice, InvoiceFieldErrors};

/// Service for invoice mutations: create, update and delete.
///
/// Each handler is the same short pipeline: validate, transform,
/// persist, then report back either a redirect signal or an
/// [`ActionState`] for re-display. Persistence is never touched after
/// a validation failure.
#[derive(Clone)]
pub struct InvoiceService {
    repository: InvoiceRepository,
}

impl InvoiceService {
    pub fn new(db: DbConnection) -> Self {
        Self {
            repository: InvoiceRepository::new(db),
        }
    }

    /// Create an invoice from a raw form submission.
    pub async fn create_invoice(
        &self,
        form: &FormData,
    ) -> ActionOutcome<InvoiceFieldErrors> {
        let validated = match validation::validate_invoice(form) {
            Ok(validated) => validated,
            Err(errors) => {
                warn!("Invoice creation rejected by validation");
                return ActionOutcome::Failure(ActionState::invalid(
                    errors,
                    "Missing Fields. Failed to Create Invoice.",
                ));
            }
        };

        let invoice = Invoice {
            id: Uuid::new_v4().to_string(),
            customer_id: validated.customer_id,
            amount: transform::amount_to_cents(validated.amount),
            status: validated.status,
            date: transform::issue_date_today(),
        };

        if let Err(err) = self.repository.create_invoice(&invoice).await {
            error!("Failed to create invoice: {err}");
            return ActionOutcome::Failure(ActionState::failed(
                "Database Error: Failed to Create Invoice.",
            ));
        }

        info!("Created invoice {} for customer {}", invoice.id, invoice.customer_id);
        ActionOutcome::redirect_to(views::INVOICES)
    }

    /// Update an existing invoice. The target `id` comes from the
    /// route, not the form body, and the issue date is left alone.
    pub async fn update_invoice(
        &self,
        id: &str,
        form: &FormData,
    ) -> ActionOutcome<InvoiceFieldErrors> {
        let validated = match validation::validate_invoice(form) {
            Ok(validated) => validated,
            Err(errors) => {
                warn!("Invoice update rejected by validation: {id}");
                return ActionOutcome::Failure(ActionState::invalid(
                    errors,
                    "Missing Fields. Failed to Update Invoice.",
                ));
            }
        };

        let amount = transform::amount_to_cents(validated.amount);
        if let Err(err) = self
            .repository
            .update_invoice(id, &validated.customer_id, amount, validated.status)
            .await
        {
            error!("Failed to update invoice {id}: {err}");
            return ActionOutcome::Failure(ActionState::failed(
                "Database Error: Failed to Update Invoice.",
            ));
        }

        info!("Updated invoice {id}");
        ActionOutcome::redirect_to(views::INVOICES)
    }

    /// Delete an invoice. No validation or transform step; the
    /// identifier from the route is the only input. On success the
    /// caller stays on the list view, which refreshes in place.
    pub async fn delete_invoice(&self, id: &str) -> ActionOutcome<InvoiceFieldErrors> {
        if let Err(err) = self.repository.delete_invoice(id).await {
            error!("Failed to delete invoice {id}: {err}");
            return ActionOutcome::Failure(ActionState::failed(
                "Database Error: Failed to Delete Invoice.",
            ));
        }

        info!("Deleted invoice {id}");
        ActionOutcome::stay(views::INVOICES, "Deleted Invoice.")
    }
}
