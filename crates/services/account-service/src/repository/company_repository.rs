//! Company repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use common::AppResult;
use domain::Company;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Company repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Find active company by ID (excludes soft-deleted)
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Company>>;

    /// Find company by normalized CNPJ digits including soft-deleted
    async fn find_by_document_with_deleted(&self, document: &str) -> AppResult<Option<Company>>;

    /// Insert a new company
    async fn insert(&self, company: Company) -> AppResult<Company>;

    /// Replace a stored company by ID
    async fn save(&self, company: Company) -> AppResult<Company>;

    /// List active companies
    async fn list(&self) -> AppResult<Vec<Company>>;

    /// List all companies including soft-deleted
    async fn list_with_deleted(&self) -> AppResult<Vec<Company>>;
}
