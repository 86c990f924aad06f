//! # Invoice Dashboard Backend
//!
//! Validated mutation layer for a small administrative dashboard:
//! invoices, training/sport entries and user accounts. The frontend
//! (or any other caller) submits a flat form mapping and receives back
//! either a redirect/invalidation signal or a structured error report;
//! everything in between - validation, value derivation, parameterized
//! SQL writes - lives here.
//!
//! ## Architecture
//!
//! ```text
//! Presentation layer (forms, routing)
//!     ↓ FormData            ↑ ActionOutcome
//! Domain layer (services, validation, transforms)
//!     ↓
//! Storage layer (SQLite repositories)
//! ```
//!
//! Handlers hold no state between calls; each invocation validates,
//! persists and reports independently.

pub mod auth;
pub mod domain;
pub mod storage;

use std::sync::Arc;

use anyhow::Result;
use log::info;

use crate::auth::Authenticator;
use crate::domain::{InvoiceService, SportService, UserService};
use crate::storage::DbConnection;

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub invoice_service: InvoiceService,
    pub sport_service: SportService,
    pub user_service: UserService,
}

/// Initialize the backend with all required services
pub async fn initialize_backend(authenticator: Arc<dyn Authenticator>) -> Result<AppState> {
    info!("Setting up database");
    let db = DbConnection::init().await?;

    info!("Setting up domain services");
    let invoice_service = InvoiceService::new(db.clone());
    let sport_service = SportService::new(db.clone());
    let user_service = UserService::new(db, authenticator);

    Ok(AppState {
        invoice_service,
        sport_service,
        user_service,
    })
}
