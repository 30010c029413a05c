pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{HttpJokeProvider, HttpNameProvider};
pub use app::server::{router, serve, shutdown_signal};
pub use config::CliConfig;
pub use core::orchestrator::{JokeService, Stage, StageError};
pub use domain::model::NamePair;
pub use utils::error::{JokeError, RemoteCallError, Result};
