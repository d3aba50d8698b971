//! Service container - wires the record store into the services.

use std::sync::Arc;

use account_service::{AccountManager, AccountService, CompanyManager, CompanyService, RecordStore};
use common::{AppConfig, AppResult};

/// Services shared by the record commands.
pub struct Services {
    accounts: Arc<dyn AccountService>,
    companies: Arc<dyn CompanyService>,
}

impl Services {
    pub fn new(accounts: Arc<dyn AccountService>, companies: Arc<dyn CompanyService>) -> Self {
        Self {
            accounts,
            companies,
        }
    }

    /// Open the store named by `config` and build every service over it.
    pub async fn open(config: &AppConfig) -> AppResult<Self> {
        let store = Arc::new(RecordStore::open(&config.store_path).await?);
        Ok(Self::from_store(store, &config.default_phone_country))
    }

    pub fn from_store(store: Arc<RecordStore>, default_phone_country: &str) -> Self {
        Self::new(
            Arc::new(AccountManager::new(store.clone(), default_phone_country)),
            Arc::new(CompanyManager::new(store, default_phone_country)),
        )
    }

    pub fn accounts(&self) -> Arc<dyn AccountService> {
        self.accounts.clone()
    }

    pub fn companies(&self) -> Arc<dyn CompanyService> {
        self.companies.clone()
    }
}
