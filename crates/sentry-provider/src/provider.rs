use crate::data_sources::project::TYPE_NAME as PROJECT_TYPE_NAME;
use crate::error::Result as ProviderResult;
use crate::{ProjectDataSource, Schema, logger, project_schema};

use std::sync::Arc;

use sentry_client::Client;
use sentry_config::Config;

/// Configured provider: one shared Sentry client handed to every data source.
pub struct Provider {
    config: Config,
    client: Arc<Client>,
}

impl Provider {
    /// Load configuration from disk and environment, then build the provider.
    pub fn load() -> ProviderResult<Self> {
        Self::from_config(Config::load()?)
    }

    /// Validate `config` and build the shared client from it.
    pub fn from_config(config: Config) -> ProviderResult<Self> {
        config.validate()?;
        let client = Arc::new(Client::from_config(&config.api)?);
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn client(&self) -> Arc<Client> {
        Arc::clone(&self.client)
    }

    /// Install the process logger from `[logging]` and log the config summary.
    pub fn init_logging(&self) -> ProviderResult<()> {
        logger::initialize(&self.config.logging)?;
        self.config.log_summary();
        Ok(())
    }

    pub fn project_data_source(&self) -> ProjectDataSource<Client> {
        ProjectDataSource::new(self.client())
    }

    /// Data sources this provider registers with the host, by type name
    pub fn data_source_schemas() -> Vec<(&'static str, Schema)> {
        vec![(PROJECT_TYPE_NAME, project_schema())]
    }
}
