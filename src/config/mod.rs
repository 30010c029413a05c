pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub use toml_config::TomlConfig;

pub const DEFAULT_NAME_SERVICE_URL: &str = "https://names.mcquay.me/api/v0/";
pub const DEFAULT_JOKE_SERVICE_URL: &str = "http://joke.loc8u.com:8888/joke?limitTo=nerdy";
pub const MAX_TIMEOUT_SECONDS: u64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "jokester")]
#[command(about = "Serves jokes about randomly named people")]
pub struct CliConfig {
    #[arg(long, env = "JOKESTER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, env = "JOKESTER_PORT", default_value = "3000")]
    pub port: u16,

    #[arg(long, env = "JOKESTER_NAME_SERVICE_URL", default_value = DEFAULT_NAME_SERVICE_URL)]
    pub name_service_url: String,

    #[arg(long, env = "JOKESTER_JOKE_SERVICE_URL", default_value = DEFAULT_JOKE_SERVICE_URL)]
    pub joke_service_url: String,

    #[arg(long, env = "JOKESTER_TIMEOUT_SECONDS", default_value = "30")]
    pub timeout_seconds: u64,

    /// TOML file whose values override the flags above
    #[arg(long, env = "JOKESTER_CONFIG")]
    pub config: Option<PathBuf>,

    #[arg(long, env = "JOKESTER_LOG_FORMAT", value_enum, default_value = "compact")]
    pub log_format: LogFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Applies the file named by `--config`, if any.
    pub fn resolve(self) -> Result<Self> {
        match self.config.clone() {
            Some(path) => {
                let file = TomlConfig::from_file(&path)?;
                Ok(self.merge(file))
            }
            None => Ok(self),
        }
    }

    /// Values present in `file` win over the current ones.
    pub fn merge(mut self, file: TomlConfig) -> Self {
        if let Some(server) = file.server {
            if let Some(host) = server.host {
                self.host = host;
            }
            if let Some(port) = server.port {
                self.port = port;
            }
        }
        if let Some(services) = file.services {
            if let Some(url) = services.name_url {
                self.name_service_url = url;
            }
            if let Some(url) = services.joke_url {
                self.joke_service_url = url;
            }
            if let Some(timeout) = services.timeout_seconds {
                self.timeout_seconds = timeout;
            }
        }
        self
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("host", &self.host)?;
        validate_range("port", self.port, 1, u16::MAX)?;
        validate_url("name_service_url", &self.name_service_url)?;
        validate_url("joke_service_url", &self.joke_service_url)?;
        validate_range("timeout_seconds", self.timeout_seconds, 1, MAX_TIMEOUT_SECONDS)?;
        Ok(())
    }
}

impl ConfigProvider for CliConfig {
    fn host(&self) -> &str {
        &self.host
    }

    fn port(&self) -> u16 {
        self.port
    }

    fn name_service_url(&self) -> &str {
        &self.name_service_url
    }

    fn joke_service_url(&self) -> &str {
        &self.joke_service_url
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
