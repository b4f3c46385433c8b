//! Portal facade
//!
//! Owns the database, the API clients, and the session manager for the
//! lifetime of the process. The UI layer receives this object once at
//! startup instead of reaching for global state.

use sabeh_api::{ApiClient, ApiConfig, AuthApi, FreightApi, NewsApi, ShipmentsApi};
use sabeh_session::{Session, SessionManager};
use sabeh_storage::{CredentialStore, Database};

use crate::config::Config;
use crate::Result;

pub struct Portal {
    config: Config,
    db: Database,
    session_manager: SessionManager,
    shipments: ShipmentsApi,
    news: NewsApi,
    freight: FreightApi,
}

impl Portal {
    pub fn new(config: Config) -> Result<Self> {
        let db = Database::open(&config.database_path)?;
        Self::with_database(config, db)
    }

    /// Wire the portal over an already opened database.
    pub fn with_database(config: Config, db: Database) -> Result<Self> {
        let store = CredentialStore::new(db.clone());
        let api_config = ApiConfig::for_environment(config.environment);
        let client = ApiClient::new(api_config, store.clone())?;

        let session_manager = SessionManager::new(store, AuthApi::new(client.clone()));

        tracing::info!(
            environment = config.environment.as_str(),
            "Portal assembled"
        );

        Ok(Self {
            config,
            db,
            session_manager,
            shipments: ShipmentsApi::new(client.clone()),
            news: NewsApi::new(client.clone()),
            freight: FreightApi::new(client),
        })
    }

    /// Run the startup check of the persisted session. The UI holds
    /// rendering until this returns.
    pub async fn initialize(&self) -> Session {
        self.session_manager.check_auth_status().await
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn session_manager(&self) -> &SessionManager {
        &self.session_manager
    }

    pub fn shipments(&self) -> &ShipmentsApi {
        &self.shipments
    }

    pub fn news(&self) -> &NewsApi {
        &self.news
    }

    pub fn freight(&self) -> &FreightApi {
        &self.freight
    }
}
