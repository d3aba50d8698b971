//! Company service - company record management.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use common::{AppError, AppResult, OptionExt};
use domain::{Company, CreateCompany, UpdateCompany};

use crate::repository::CompanyRepository;

/// Company service trait for dependency injection.
#[async_trait]
pub trait CompanyService: Send + Sync {
    /// Validate and persist a new company
    async fn create_company(&self, input: CreateCompany) -> AppResult<Company>;

    /// Get active company by ID
    async fn get_company(&self, id: Uuid) -> AppResult<Company>;

    /// List companies, optionally including soft-deleted ones
    async fn list_companies(&self, include_deleted: bool) -> AppResult<Vec<Company>>;

    /// Update an active company
    async fn update_company(&self, id: Uuid, changes: UpdateCompany) -> AppResult<Company>;

    /// Soft delete an active company
    async fn delete_company(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of CompanyService using a repository.
pub struct CompanyManager {
    repo: Arc<dyn CompanyRepository>,
    default_phone_country: String,
}

impl CompanyManager {
    pub fn new(repo: Arc<dyn CompanyRepository>, default_phone_country: impl Into<String>) -> Self {
        Self {
            repo,
            default_phone_country: default_phone_country.into(),
        }
    }
}

#[async_trait]
impl CompanyService for CompanyManager {
    async fn create_company(&self, input: CreateCompany) -> AppResult<Company> {
        let company = input.into_company(Uuid::new_v4(), &self.default_phone_country)?;

        if self
            .repo
            .find_by_document_with_deleted(&company.document)
            .await?
            .is_some()
        {
            return Err(AppError::conflict("Document"));
        }

        let company = self.repo.insert(company).await?;
        info!(company_id = %company.id, "Company created");
        Ok(company)
    }

    async fn get_company(&self, id: Uuid) -> AppResult<Company> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn list_companies(&self, include_deleted: bool) -> AppResult<Vec<Company>> {
        if include_deleted {
            self.repo.list_with_deleted().await
        } else {
            self.repo.list().await
        }
    }

    async fn update_company(&self, id: Uuid, changes: UpdateCompany) -> AppResult<Company> {
        let mut company = self.repo.find_by_id(id).await?.ok_or_not_found()?;
        company.apply_update(changes, &self.default_phone_country)?;

        let company = self.repo.save(company).await?;
        info!(company_id = %company.id, "Company updated");
        Ok(company)
    }

    async fn delete_company(&self, id: Uuid) -> AppResult<()> {
        let mut company = self.repo.find_by_id(id).await?.ok_or_not_found()?;
        company.soft_delete();

        self.repo.save(company).await?;
        info!(company_id = %id, "Company deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockCompanyRepository;

    fn acme() -> CreateCompany {
        CreateCompany {
            name: "Acme Ltda".to_string(),
            fantasy_name: None,
            document: "11.222.333/0001-81".to_string(),
            email: None,
            phone: None,
            address: None,
            logo: None,
            website: None,
        }
    }

    #[tokio::test]
    async fn test_create_company() {
        let mut repo = MockCompanyRepository::new();
        repo.expect_find_by_document_with_deleted()
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_insert()
            .withf(|company: &Company| company.document == "11222333000181")
            .times(1)
            .returning(Ok);

        let service = CompanyManager::new(Arc::new(repo), "BR");
        let company = service.create_company(acme()).await.unwrap();

        assert_eq!(company.name, "Acme Ltda");
    }

    #[tokio::test]
    async fn test_create_company_duplicate_document() {
        let mut repo = MockCompanyRepository::new();
        repo.expect_find_by_document_with_deleted()
            .returning(|_| Ok(Some(acme().into_company(Uuid::new_v4(), "BR").unwrap())));
        repo.expect_insert().never();

        let service = CompanyManager::new(Arc::new(repo), "BR");
        let err = service.create_company(acme()).await.unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_update_missing_company() {
        let mut repo = MockCompanyRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = CompanyManager::new(Arc::new(repo), "BR");
        let result = service
            .update_company(Uuid::new_v4(), UpdateCompany::default())
            .await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }
}
