use std::{env, str::FromStr, time::Duration};

use crate::{Error, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub max_connections: u32,
    /// `None` retries the initial database connection forever.
    pub connect_retries: Option<u32>,
    pub retry_interval: Duration,
}

impl Config {
    pub fn init() -> Result<Config> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = match lookup("DATABASE_URL") {
            Some(url) => url,
            None => {
                let host = lookup("DATABASE_HOSTNAME").unwrap_or_else(|| "localhost".to_string());
                let port = lookup("DATABASE_PORT").unwrap_or_else(|| "5432".to_string());
                let name = lookup("DATABASE_NAME").unwrap_or_else(|| "fastapi".to_string());
                let user = lookup("DATABASE_USERNAME").unwrap_or_else(|| "postgres".to_string());
                let password = lookup("DATABASE_PASSWORD").unwrap_or_default();
                format!("postgres://{user}:{password}@{host}:{port}/{name}")
            }
        };

        Ok(Config {
            database_url,
            port: parse_or(&lookup, "PORT", 8080)?,
            max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 10)?,
            connect_retries: parse_opt(&lookup, "DATABASE_CONNECT_RETRIES")?,
            retry_interval: Duration::from_secs(parse_or(
                &lookup,
                "DATABASE_RETRY_INTERVAL_SECS",
                2,
            )?),
        })
    }
}

fn parse_opt<F, T>(lookup: &F, key: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|_| Error::Config(format!("{key} must be a number, got {raw:?}")))
        })
        .transpose()
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    Ok(parse_opt(lookup, key)?.unwrap_or(default))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(
            config.database_url,
            "postgres://postgres:@localhost:5432/fastapi"
        );
        assert_eq!(config.port, 8080);
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.connect_retries, None);
        assert_eq!(config.retry_interval, Duration::from_secs(2));
    }

    #[test]
    fn database_url_is_built_from_parts() {
        let config = config_from(&[
            ("DATABASE_HOSTNAME", "db"),
            ("DATABASE_PORT", "6543"),
            ("DATABASE_NAME", "posts"),
            ("DATABASE_USERNAME", "app"),
            ("DATABASE_PASSWORD", "secret"),
        ])
        .unwrap();

        assert_eq!(config.database_url, "postgres://app:secret@db:6543/posts");
    }

    #[test]
    fn explicit_database_url_wins() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://u:p@h/d"),
            ("DATABASE_HOSTNAME", "ignored"),
        ])
        .unwrap();

        assert_eq!(config.database_url, "postgres://u:p@h/d");
    }

    #[test]
    fn retry_policy_is_configurable() {
        let config = config_from(&[
            ("DATABASE_CONNECT_RETRIES", "5"),
            ("DATABASE_RETRY_INTERVAL_SECS", "1"),
        ])
        .unwrap();

        assert_eq!(config.connect_retries, Some(5));
        assert_eq!(config.retry_interval, Duration::from_secs(1));
    }

    #[test]
    fn bad_port_is_rejected() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, Error::Config(msg) if msg.contains("PORT")));
    }
}
