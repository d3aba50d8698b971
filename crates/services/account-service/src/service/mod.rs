//! Service layer - use cases over user and company records.

mod account_service;
mod company_service;

pub use account_service::{AccountManager, AccountService};
pub use company_service::{CompanyManager, CompanyService};
