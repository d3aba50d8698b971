//! Account service - user provisioning and record management.
//!
//! Registration validates and normalizes the request, rejects taken
//! documents and emails, and only then hashes the password. The store
//! enforces the same uniqueness again when inserting.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use common::{AppError, AppResult, OptionExt};
use domain::{RegisterUser, UpdateUser, User};

use crate::repository::UserRepository;

/// Account service trait for dependency injection.
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Provision and persist a new user
    async fn register(&self, input: RegisterUser) -> AppResult<User>;

    /// Get active user by ID
    async fn get_user(&self, id: Uuid) -> AppResult<User>;

    /// List users, optionally including soft-deleted ones
    async fn list_users(&self, include_deleted: bool) -> AppResult<Vec<User>>;

    /// Update an active user
    async fn update_user(&self, id: Uuid, changes: UpdateUser) -> AppResult<User>;

    /// Soft delete an active user
    async fn delete_user(&self, id: Uuid) -> AppResult<()>;

    /// Restore a soft-deleted user
    async fn restore_user(&self, id: Uuid) -> AppResult<User>;
}

/// Concrete implementation of AccountService using a repository.
pub struct AccountManager {
    repo: Arc<dyn UserRepository>,
    default_phone_country: String,
}

impl AccountManager {
    /// Create new account service instance
    pub fn new(repo: Arc<dyn UserRepository>, default_phone_country: impl Into<String>) -> Self {
        Self {
            repo,
            default_phone_country: default_phone_country.into(),
        }
    }
}

#[async_trait]
impl AccountService for AccountManager {
    async fn register(&self, input: RegisterUser) -> AppResult<User> {
        let pending = input.prepare(Uuid::new_v4(), &self.default_phone_country)?;

        if self
            .repo
            .find_by_document_with_deleted(pending.document())
            .await?
            .is_some()
        {
            return Err(AppError::conflict("Document"));
        }
        if self
            .repo
            .find_by_email_with_deleted(pending.email())
            .await?
            .is_some()
        {
            return Err(AppError::conflict("Email"));
        }

        let user = self.repo.insert(pending.hash_password()?).await?;
        info!(user_id = %user.id, document_type = %user.document_type, "User registered");
        Ok(user)
    }

    async fn get_user(&self, id: Uuid) -> AppResult<User> {
        debug!(user_id = %id, "Fetching user");
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn list_users(&self, include_deleted: bool) -> AppResult<Vec<User>> {
        if include_deleted {
            self.repo.list_with_deleted().await
        } else {
            self.repo.list().await
        }
    }

    async fn update_user(&self, id: Uuid, changes: UpdateUser) -> AppResult<User> {
        let mut user = self.repo.find_by_id(id).await?.ok_or_not_found()?;
        user.apply_update(changes, &self.default_phone_country)?;

        let user = self.repo.save(user).await?;
        info!(user_id = %user.id, "User updated");
        Ok(user)
    }

    async fn delete_user(&self, id: Uuid) -> AppResult<()> {
        let mut user = self.repo.find_by_id(id).await?.ok_or_not_found()?;
        user.soft_delete();

        self.repo.save(user).await?;
        info!(user_id = %id, "User deleted");
        Ok(())
    }

    async fn restore_user(&self, id: Uuid) -> AppResult<User> {
        let mut user = self
            .repo
            .find_by_id_with_deleted(id)
            .await?
            .ok_or_not_found()?;

        if user.is_active() {
            warn!(user_id = %id, "User is not deleted, nothing to restore");
            return Ok(user);
        }

        user.restore();
        let user = self.repo.save(user).await?;
        info!(user_id = %user.id, "User restored");
        Ok(user)
    }
}
