//! # Domain Module
//!
//! The mutation layer's business logic. Each action handler composes
//! the same fixed pipeline: validate the raw form, derive
//! storage-ready values, persist through a repository, then hand the
//! caller either a redirect signal or a structured error report.
//!
//! ## Module Organization
//!
//! - **validation**: per-entity form schemas and coercion
//! - **transform**: money-to-cents, issue-date stamping, password hashing
//! - **invoice_service**: create/update/delete invoice handlers
//! - **sport_service**: create training/sport entry handler
//! - **user_service**: registration and sign-in handlers

pub mod invoice_service;
pub mod sport_service;
pub mod transform;
pub mod user_service;
pub mod validation;

pub use invoice_service::InvoiceService;
pub use sport_service::SportService;
pub use user_service::UserService;
