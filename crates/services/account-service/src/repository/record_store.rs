//! In-memory record store, optionally mirrored to a JSON file.
//!
//! Every write builds the next snapshot, writes it to a temporary sibling
//! that is renamed over the store file, and only then replaces the
//! in-memory state. A failed write leaves both untouched.
//!
//! Documents (and user emails) are unique across active and soft-deleted
//! records; `insert` enforces this under the write lock.

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{Company, User};

use super::{CompanyRepository, UserRepository};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoreData {
    #[serde(default)]
    users: Vec<User>,
    #[serde(default)]
    companies: Vec<Company>,
}

/// Concrete implementation of both repositories.
pub struct RecordStore {
    path: Option<PathBuf>,
    data: RwLock<StoreData>,
}

impl RecordStore {
    /// Store that lives only as long as the process.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            data: RwLock::new(StoreData::default()),
        }
    }

    /// Load the snapshot at `path`, or start empty if the file does not exist yet.
    pub async fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();
        let data = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice::<StoreData>(&bytes)?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No record store at {}, starting empty", path.display());
                StoreData::default()
            }
            Err(e) => return Err(e.into()),
        };

        info!(
            path = %path.display(),
            users = data.users.len(),
            companies = data.companies.len(),
            "Record store opened"
        );

        Ok(Self {
            path: Some(path),
            data: RwLock::new(data),
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    async fn persist(&self, data: &StoreData) -> AppResult<()> {
        let Some(path) = self.path.clone() else {
            return Ok(());
        };

        let json = serde_json::to_vec_pretty(data)?;
        tokio::task::spawn_blocking(move || write_atomically(&path, &json))
            .await
            .map_err(|e| AppError::internal(format!("store writer panicked: {e}")))??;

        debug!("Record store written");
        Ok(())
    }
}

fn write_atomically(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)?;
    Ok(())
}

// =============================================================================
// Users
// =============================================================================

#[async_trait]
impl UserRepository for RecordStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.find_by_id_with_deleted(id).await?.filter(User::is_active))
    }

    async fn find_by_id_with_deleted(&self, id: Uuid) -> AppResult<Option<User>> {
        let data = self.data.read().await;
        Ok(data.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_document_with_deleted(&self, document: &str) -> AppResult<Option<User>> {
        let data = self.data.read().await;
        Ok(data.users.iter().find(|u| u.document == document).cloned())
    }

    async fn find_by_email_with_deleted(&self, email: &str) -> AppResult<Option<User>> {
        let data = self.data.read().await;
        Ok(data.users.iter().find(|u| u.email == email).cloned())
    }

    async fn insert(&self, user: User) -> AppResult<User> {
        let mut data = self.data.write().await;
        for existing in &data.users {
            if existing.id == user.id {
                return Err(AppError::conflict("User"));
            }
            if existing.document == user.document {
                return Err(AppError::conflict("Document"));
            }
            if existing.email == user.email {
                return Err(AppError::conflict("Email"));
            }
        }

        let mut next = data.clone();
        next.users.push(user.clone());
        self.persist(&next).await?;
        *data = next;
        Ok(user)
    }

    async fn save(&self, user: User) -> AppResult<User> {
        let mut data = self.data.write().await;
        let mut next = data.clone();
        let slot = next
            .users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or(AppError::NotFound)?;
        *slot = user.clone();

        self.persist(&next).await?;
        *data = next;
        Ok(user)
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let data = self.data.read().await;
        Ok(data.users.iter().filter(|u| u.is_active()).cloned().collect())
    }

    async fn list_with_deleted(&self) -> AppResult<Vec<User>> {
        Ok(self.data.read().await.users.clone())
    }
}

// =============================================================================
// Companies
// =============================================================================

#[async_trait]
impl CompanyRepository for RecordStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Company>> {
        let data = self.data.read().await;
        Ok(data
            .companies
            .iter()
            .find(|c| c.id == id && c.is_active())
            .cloned())
    }

    async fn find_by_document_with_deleted(&self, document: &str) -> AppResult<Option<Company>> {
        let data = self.data.read().await;
        Ok(data.companies.iter().find(|c| c.document == document).cloned())
    }

    async fn insert(&self, company: Company) -> AppResult<Company> {
        let mut data = self.data.write().await;
        for existing in &data.companies {
            if existing.id == company.id {
                return Err(AppError::conflict("Company"));
            }
            if existing.document == company.document {
                return Err(AppError::conflict("Document"));
            }
        }

        let mut next = data.clone();
        next.companies.push(company.clone());
        self.persist(&next).await?;
        *data = next;
        Ok(company)
    }

    async fn save(&self, company: Company) -> AppResult<Company> {
        let mut data = self.data.write().await;
        let mut next = data.clone();
        let slot = next
            .companies
            .iter_mut()
            .find(|c| c.id == company.id)
            .ok_or(AppError::NotFound)?;
        *slot = company.clone();

        self.persist(&next).await?;
        *data = next;
        Ok(company)
    }

    async fn list(&self) -> AppResult<Vec<Company>> {
        let data = self.data.read().await;
        Ok(data
            .companies
            .iter()
            .filter(|c| c.is_active())
            .cloned()
            .collect())
    }

    async fn list_with_deleted(&self) -> AppResult<Vec<Company>> {
        Ok(self.data.read().await.companies.clone())
    }
}
