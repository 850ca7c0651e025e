use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::{info, warn};

use crate::{config::Config, Error, Result};

#[cfg(test)]
pub mod memory_repo;
pub mod posts_repo;

#[derive(Clone)]
pub struct PostgresRepo {
    pool: PgPool,
}

impl PostgresRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects to the database, retrying on a fixed interval until the
    /// configured attempt limit is spent, then applies pending migrations.
    pub async fn connect(config: &Config) -> Result<Self> {
        let mut attempt: u32 = 0;

        let pool = loop {
            match PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(&config.database_url)
                .await
            {
                Ok(pool) => {
                    info!("✅ Connection to the database is successful!");
                    break pool;
                }
                Err(err) => {
                    if config.connect_retries.is_some_and(|max| attempt >= max) {
                        return Err(Error::DatabaseError(err));
                    }
                    warn!("🔥 Failed to connect to the database: {}", err);
                    attempt += 1;
                    tokio::time::sleep(config.retry_interval).await;
                }
            }
        };

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self::new(pool))
    }
}
