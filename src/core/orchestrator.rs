use crate::core::{JokeProvider, NameProvider};
use crate::utils::error::JokeError;
use std::fmt;
use thiserror::Error;

/// The step of a joke request that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Name,
    Joke,
}

impl Stage {
    /// Fixed message shown to clients; upstream causes stay in the logs.
    pub fn client_message(self) -> &'static str {
        match self {
            Stage::Name => "failed to get name",
            Stage::Joke => "failed to get joke",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.client_message())
    }
}

#[derive(Error, Debug)]
#[error("{stage}: {source}")]
pub struct StageError {
    pub stage: Stage,
    #[source]
    pub source: JokeError,
}

/// Fetches a name, then a joke personalised with it.
pub struct JokeService<N: NameProvider, J: JokeProvider> {
    names: N,
    jokes: J,
}

impl<N: NameProvider, J: JokeProvider> JokeService<N, J> {
    pub fn new(names: N, jokes: J) -> Self {
        Self { names, jokes }
    }

    /// Runs both upstream calls in order and stops at the first failure.
    pub async fn tell_joke(&self) -> Result<String, StageError> {
        let name = self
            .names
            .random_name()
            .await
            .map_err(|source| StageError {
                stage: Stage::Name,
                source,
            })?;
        tracing::debug!("Got name: {} {}", name.first_name, name.last_name);

        let joke = self
            .jokes
            .joke_for(&name)
            .await
            .map_err(|source| StageError {
                stage: Stage::Joke,
                source,
            })?;
        tracing::debug!("Got joke ({} bytes)", joke.len());

        Ok(joke)
    }
}
