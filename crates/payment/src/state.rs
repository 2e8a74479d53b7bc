use crate::di::DependenciesInject;
use anyhow::{Context, Result};
use shared::config::{Config, ConnectionPool};

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
}

impl AppState {
    pub async fn new(pool: ConnectionPool, config: &Config) -> Result<Self> {
        let di_container = {
            DependenciesInject::new(pool.clone(), config.card_encryption_key.clone())
                .await
                .context("Failed to initialize dependency injection container")?
        };

        Ok(Self { di_container })
    }
}
