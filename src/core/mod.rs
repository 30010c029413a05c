pub mod orchestrator;

pub use crate::domain::model::NamePair;
pub use crate::domain::ports::{ConfigProvider, JokeProvider, NameProvider};
pub use crate::utils::error::Result;
