use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Context, Result};

/// Where the current resume and the template collection are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    File,
    Redis,
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StorageBackend::Memory),
            "file" => Ok(StorageBackend::File),
            "redis" => Ok(StorageBackend::Redis),
            other => bail!("Unknown STORAGE_BACKEND '{other}' (expected memory, file or redis)"),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub storage_backend: StorageBackend,
    pub data_dir: PathBuf,
    /// Only read when the backend is Redis.
    pub redis_url: Option<String>,
    /// Prepended to both storage keys; use `[A-Za-z0-9_.-]` so file names stay valid.
    pub storage_key_prefix: String,
    pub autosave_delay: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let storage_backend: StorageBackend = env_or("STORAGE_BACKEND", "file").parse()?;
        let redis_url = std::env::var("REDIS_URL").ok();
        if storage_backend == StorageBackend::Redis && redis_url.is_none() {
            bail!("Required environment variable 'REDIS_URL' is not set (STORAGE_BACKEND=redis)");
        }

        Ok(Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            storage_backend,
            data_dir: PathBuf::from(env_or("DATA_DIR", "./data")),
            redis_url,
            storage_key_prefix: env_or("STORAGE_KEY_PREFIX", ""),
            autosave_delay: Duration::from_millis(
                env_or("AUTOSAVE_DELAY_MS", "2000")
                    .parse::<u64>()
                    .context("AUTOSAVE_DELAY_MS must be a whole number of milliseconds")?,
            ),
        })
    }

    /// In-memory defaults for tests.
    #[cfg(test)]
    pub fn for_tests() -> Self {
        Config {
            port: 0,
            rust_log: "debug".to_string(),
            storage_backend: StorageBackend::Memory,
            data_dir: PathBuf::from("./data"),
            redis_url: None,
            storage_key_prefix: String::new(),
            autosave_delay: Duration::from_millis(2000),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
