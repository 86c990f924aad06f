//! Declarative form validation.
//!
//! Each entity gets one validate function: raw [`FormData`] in, either
//! the typed, coerced fields out or the full set of field errors. All
//! violated fields are reported in one pass so the caller can
//! highlight every invalid input at once. No side effects, no logging.

use shared::{FormData, InvoiceFieldErrors, InvoiceStatus, RegisterFieldErrors, SportFieldErrors};

pub const MSG_SELECT_CUSTOMER: &str = "Please select a customer.";
pub const MSG_AMOUNT_NOT_POSITIVE: &str = "Please enter an amount greater than 0$.";
pub const MSG_SELECT_STATUS: &str = "Please select an invoice status.";
pub const MSG_NAME_TOO_SHORT: &str = "Name should be longer than 3 character";
pub const MSG_DESCRIPTION_TOO_SHORT: &str = "Description should be longer than 3 character";
pub const MSG_ENTER_NAME: &str = "Please enter a name.";
pub const MSG_INVALID_EMAIL: &str = "Please enter a valid email address.";
pub const MSG_PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters long.";

const MIN_SPORT_NAME_LEN: usize = 3;
const MIN_SPORT_DESCRIPTION_LEN: usize = 6;
const MIN_PASSWORD_LEN: usize = 6;

/// Invoice fields after validation and coercion.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInvoice {
    pub customer_id: String,
    /// Decimal currency amount, guaranteed > 0
    pub amount: f64,
    pub status: InvoiceStatus,
}

/// Sport fields after validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedSport {
    pub name: String,
    pub description: String,
}

/// Registration fields after validation. The password here is still
/// plaintext; hashing happens in the transform stage.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRegistration {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Validate an invoice form (`customerId`, `amount`, `status`).
pub fn validate_invoice(form: &FormData) -> Result<ValidatedInvoice, InvoiceFieldErrors> {
    let mut errors = InvoiceFieldErrors::default();

    let customer_id = match form.get("customerId") {
        Some(id) if !id.trim().is_empty() => Some(id.trim().to_string()),
        _ => {
            errors.customer_id.push(MSG_SELECT_CUSTOMER.to_string());
            None
        }
    };

    let amount = match form.get("amount").and_then(|raw| raw.trim().parse::<f64>().ok()) {
        Some(amount) if amount > 0.0 && amount.is_finite() => Some(amount),
        _ => {
            errors.amount.push(MSG_AMOUNT_NOT_POSITIVE.to_string());
            None
        }
    };

    let status = match form.get("status").and_then(InvoiceStatus::parse) {
        Some(status) => Some(status),
        None => {
            errors.status.push(MSG_SELECT_STATUS.to_string());
            None
        }
    };

    match (customer_id, amount, status) {
        (Some(customer_id), Some(amount), Some(status)) => Ok(ValidatedInvoice {
            customer_id,
            amount,
            status,
        }),
        _ => Err(errors),
    }
}

/// Validate a sport/training form. The form posts the fields as
/// `sport` and `sport_description`.
pub fn validate_sport(form: &FormData) -> Result<ValidatedSport, SportFieldErrors> {
    let mut errors = SportFieldErrors::default();

    let name = form.get("sport").unwrap_or_default().trim().to_string();
    if name.chars().count() < MIN_SPORT_NAME_LEN {
        errors.name.push(MSG_NAME_TOO_SHORT.to_string());
    }

    let description = form
        .get("sport_description")
        .unwrap_or_default()
        .trim()
        .to_string();
    if description.chars().count() < MIN_SPORT_DESCRIPTION_LEN {
        errors.description.push(MSG_DESCRIPTION_TOO_SHORT.to_string());
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ValidatedSport { name, description })
}

/// Validate a registration form (`name`, `email`, `password`).
pub fn validate_register(form: &FormData) -> Result<ValidatedRegistration, RegisterFieldErrors> {
    let mut errors = RegisterFieldErrors::default();

    let name = form.get("name").unwrap_or_default().trim().to_string();
    if name.is_empty() {
        errors.name.push(MSG_ENTER_NAME.to_string());
    }

    let email = form.get("email").unwrap_or_default().trim().to_string();
    if !is_valid_email(&email) {
        errors.email.push(MSG_INVALID_EMAIL.to_string());
    }

    // Not trimmed: leading/trailing whitespace is part of a password
    let password = form.get("password").unwrap_or_default().to_string();
    if password.chars().count() < MIN_PASSWORD_LEN {
        errors.password.push(MSG_PASSWORD_TOO_SHORT.to_string());
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ValidatedRegistration {
        name,
        email,
        password,
    })
}

/// Syntactic email check: one `@` with a non-empty local part and a
/// dotted domain. Deliverability is not this layer's concern.
fn is_valid_email(email: &str) -> bool {
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let Some(domain) = parts.next() else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
