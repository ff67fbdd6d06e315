use crate::error::{Result, StatementMapperError};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_EXPORT_DIR: &str = "public/exports";

/// Runtime settings for the HTTP service, read from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub export_dir: PathBuf,
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    /// Reads `PORT`, `EXPORT_DIR` and `ALLOWED_ORIGINS`, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| {
                StatementMapperError::ConfigError(format!(
                    "PORT must be a number between 1 and 65535, got '{}'",
                    raw
                ))
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let export_dir = std::env::var("EXPORT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_EXPORT_DIR));

        let allowed_origins = std::env::var("ALLOWED_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .unwrap_or_else(|_| default_origins());

        Ok(Self {
            port,
            export_dir,
            allowed_origins,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            export_dir: PathBuf::from(DEFAULT_EXPORT_DIR),
            allowed_origins: default_origins(),
        }
    }
}

fn default_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "http://localhost:3001".to_string(),
    ]
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
