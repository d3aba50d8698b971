//! Repository layer for user and company records.

mod company_repository;
mod record_store;
mod user_repository;

pub use company_repository::CompanyRepository;
pub use record_store::RecordStore;
pub use user_repository::UserRepository;

#[cfg(any(test, feature = "test-utils"))]
pub use company_repository::MockCompanyRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
