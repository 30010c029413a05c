use thiserror::Error;

/// Failure talking to one of the upstream services.
#[derive(Error, Debug)]
pub enum RemoteCallError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed response body: {0}")]
    Body(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum JokeError {
    #[error("{service} call failed: {source}")]
    RemoteCall {
        service: &'static str,
        #[source]
        source: RemoteCallError,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl JokeError {
    pub fn remote(service: &'static str, source: impl Into<RemoteCallError>) -> Self {
        JokeError::RemoteCall {
            service,
            source: source.into(),
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, JokeError::RemoteCall { .. })
    }

    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            JokeError::RemoteCall {
                source: RemoteCallError::Transport(e),
                ..
            } if e.is_timeout()
        )
    }
}

pub type Result<T> = std::result::Result<T, JokeError>;
