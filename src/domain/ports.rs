use crate::domain::model::NamePair;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

#[async_trait]
pub trait NameProvider: Send + Sync {
    async fn random_name(&self) -> Result<NamePair>;
}

#[async_trait]
pub trait JokeProvider: Send + Sync {
    async fn joke_for(&self, name: &NamePair) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn host(&self) -> &str;
    fn port(&self) -> u16;
    fn name_service_url(&self) -> &str;
    fn joke_service_url(&self) -> &str;
    fn request_timeout(&self) -> Duration;

    fn server_addr(&self) -> String {
        format!("{}:{}", self.host(), self.port())
    }
}
