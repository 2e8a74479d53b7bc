use anyhow::{Context, Result, anyhow};

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub card_encryption_key: String,
    pub run_migrations: bool,
    pub max_connections: u32,
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("Missing env: DATABASE_URL")?;
        let card_encryption_key = std::env::var("CARD_ENCRYPTION_KEY")
            .context("Missing env: CARD_ENCRYPTION_KEY")?;
        let run_migrations_str =
            std::env::var("RUN_MIGRATIONS").context("Missing env: RUN_MIGRATIONS")?;

        let run_migrations = match run_migrations_str.as_str() {
            "true" => true,
            "false" => false,
            other => {
                return Err(anyhow!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{other}'",
                ));
            }
        };

        if card_encryption_key.is_empty() {
            return Err(anyhow!("CARD_ENCRYPTION_KEY must not be empty"));
        }

        let max_connections = match std::env::var("DB_MAX_CONNECTIONS") {
            Ok(value) => value
                .parse::<u32>()
                .context("DB_MAX_CONNECTIONS must be a valid u32 integer")?,
            Err(_) => 5,
        };

        Ok(Self {
            database_url,
            card_encryption_key,
            run_migrations,
            max_connections,
        })
    }
}
