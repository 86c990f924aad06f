//! Pure derivations from already-validated input: currency to minor
//! units, issue-date stamping and credential hashing.

use anyhow::{Context, Result};
use chrono::Utc;

/// bcrypt work factor for newly hashed passwords
const SALT_ROUNDS: u32 = 10;

/// Convert a validated decimal amount to integer minor units
/// (cents) - the only persisted representation of money.
pub fn amount_to_cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

/// Today's date in ISO-8601 form (`YYYY-MM-DD`, UTC). Stamped once at
/// invoice creation and never recomputed.
pub fn issue_date_today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

/// A fully resolved bcrypt hash. Persistence only accepts this type,
/// so a pending or skipped hashing step cannot reach the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashedPassword(String);

impl HashedPassword {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Hash a plaintext password with bcrypt at the fixed work factor.
///
/// The hash runs on the blocking pool and is awaited to completion
/// here; callers receive a resolved value, never an in-flight
/// computation.
pub async fn hash_password(password: String) -> Result<HashedPassword> {
    let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, SALT_ROUNDS))
        .await
        .context("password hashing task failed")??;
    Ok(HashedPassword(hashed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_convert_to_exact_cents() {
        assert_eq!(amount_to_cents(49.99), 4999);
        assert_eq!(amount_to_cents(0.01), 1);
        assert_eq!(amount_to_cents(100.0), 10000);
        // floating point representation must not lose a cent
        assert_eq!(amount_to_cents(0.29), 29);
        assert_eq!(amount_to_cents(19.995), 2000);
    }

    #[test]
    fn issue_date_is_iso_8601() {
        let date = issue_date_today();
        chrono::NaiveDate::parse_from_str(&date, "%Y-%m-%d")
            .expect("date should be YYYY-MM-DD");
    }

    #[tokio::test]
    async fn hashed_password_verifies_and_differs_from_plaintext() {
        let hashed = hash_password("secret-password".to_string())
            .await
            .expect("hashing should succeed");
        assert_ne!(hashed.as_str(), "secret-password");
        assert!(bcrypt::verify("secret-password", hashed.as_str())
            .expect("verify should succeed"));
        assert!(!bcrypt::verify("wrong-password", hashed.as_str())
            .expect("verify should succeed"));
    }
}
