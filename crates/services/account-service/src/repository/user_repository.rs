//! User repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use common::AppResult;
use domain::User;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Query methods exclude soft-deleted records unless their name says
/// `_with_deleted`. Uniqueness lookups always include them.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find active user by ID (excludes soft-deleted)
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find user by ID including soft-deleted
    async fn find_by_id_with_deleted(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find user by normalized document digits including soft-deleted
    async fn find_by_document_with_deleted(&self, document: &str) -> AppResult<Option<User>>;

    /// Find user by normalized email including soft-deleted
    async fn find_by_email_with_deleted(&self, email: &str) -> AppResult<Option<User>>;

    /// Insert a provisioned user
    async fn insert(&self, user: User) -> AppResult<User>;

    /// Replace a stored user by ID
    async fn save(&self, user: User) -> AppResult<User>;

    /// List all active users (excludes soft-deleted)
    async fn list(&self) -> AppResult<Vec<User>>;

    /// List all users including soft-deleted
    async fn list_with_deleted(&self) -> AppResult<Vec<User>>;
}
