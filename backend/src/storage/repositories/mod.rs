//! One repository per entity. Repositories execute a single
//! parameterized statement per call and classify failures as
//! [`StorageError`](super::StorageError); they never build SQL from
//! user input by concatenation.

pub mod invoice_repository;
pub mod sport_repository;
pub mod user_repository;

pub use invoice_repository::InvoiceRepository;
pub use sport_repository::SportRepository;
pub use user_repository::UserRepository;
