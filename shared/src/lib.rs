use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An invoice as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    /// ID of the customer this invoice is billed to
    pub customer_id: String,
    /// Amount in minor units (cents) - the only persisted representation of money
    pub amount: i64,
    pub status: InvoiceStatus,
    /// Issue date (ISO-8601, `YYYY-MM-DD`), stamped at creation and never recomputed
    pub date: String,
}

/// Payment status of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
        }
    }

    /// Parse a form value into a status. Anything but the two known
    /// values is rejected.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(InvoiceStatus::Pending),
            "paid" => Some(InvoiceStatus::Paid),
            _ => None,
        }
    }
}

/// A training/sport entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SportActivity {
    /// Assigned by storage (AUTOINCREMENT)
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// A registered user. The `password` field always holds the bcrypt
/// hash, never the plaintext the user submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Raw form submission: a flat mapping of field name to field value,
/// exactly as an HTML form posts it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormData {
    fields: BTreeMap<String, String>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, value: &str) {
        self.fields.insert(name.to_string(), value.to_string());
    }

    /// Look up a field. A missing field and an absent value are the
    /// same thing to validation.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(|v| v.as_str())
    }
}

impl<const N: usize> From<[(&str, &str); N]> for FormData {
    fn from(pairs: [(&str, &str); N]) -> Self {
        let mut form = FormData::new();
        for (name, value) in pairs {
            form.insert(name, value);
        }
        form
    }
}

/// Field-level validation errors for an invoice form. Each field holds
/// the ordered list of messages for that field; empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceFieldErrors {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub customer_id: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub amount: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub status: Vec<String>,
}

impl InvoiceFieldErrors {
    pub fn is_empty(&self) -> bool {
        self.customer_id.is_empty() && self.amount.is_empty() && self.status.is_empty()
    }
}

/// Field-level validation errors for a sport/training form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SportFieldErrors {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub name: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub description: Vec<String>,
}

impl SportFieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.description.is_empty()
    }
}

/// Field-level validation errors for a registration form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegisterFieldErrors {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub name: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub email: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub password: Vec<String>,
}

impl RegisterFieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.password.is_empty()
    }
}

/// What a failed mutation reports back to the caller for re-display:
/// optional per-field messages plus an overall message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionState<E> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<E>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<E> ActionState<E> {
    /// A validation failure: field errors plus the overall message.
    pub fn invalid(errors: E, message: &str) -> Self {
        Self {
            errors: Some(errors),
            message: Some(message.to_string()),
        }
    }

    /// A storage failure: only the generic entity-scoped message, no
    /// field detail.
    pub fn failed(message: &str) -> Self {
        Self {
            errors: None,
            message: Some(message.to_string()),
        }
    }
}

/// Outcome of a mutation attempt. Success carries the view paths to
/// mark stale and where to send the user next; callers branch on this
/// value rather than on a thrown control transfer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ActionOutcome<E> {
    Success {
        /// Logical view paths whose cached renderings are now stale
        revalidate: Vec<String>,
        /// Destination view, if the caller should navigate away
        redirect: Option<String>,
        /// Success message when the caller stays on the current view
        message: Option<String>,
    },
    Failure(ActionState<E>),
}

impl<E> ActionOutcome<E> {
    /// Invalidate `view` and send the user there.
    pub fn redirect_to(view: &str) -> Self {
        ActionOutcome::Success {
            revalidate: vec![view.to_string()],
            redirect: Some(view.to_string()),
            message: None,
        }
    }

    /// Invalidate `view` but stay put, surfacing `message` in place.
    pub fn stay(view: &str, message: &str) -> Self {
        ActionOutcome::Success {
            revalidate: vec![view.to_string()],
            redirect: None,
            message: Some(message.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ActionOutcome::Success { .. })
    }
}

/// Logical view paths the mutation layer can invalidate or redirect to.
pub mod views {
    pub const INVOICES: &str = "/dashboard/invoices";
    pub const TRAINING: &str = "/dashboard/training";
    pub const LOGIN: &str = "/login";
}
