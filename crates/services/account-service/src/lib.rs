//! Account Service Library
//!
//! Record-keeping for people and companies: provisioning pipelines from the
//! domain crate, uniqueness rules, soft deletes, and repository traits with
//! an in-memory store that can mirror itself to a JSON file.

pub mod repository;
pub mod service;

pub use repository::{CompanyRepository, RecordStore, UserRepository};
pub use service::{AccountManager, AccountService, CompanyManager, CompanyService};
