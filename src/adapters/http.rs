use crate::domain::model::{JokeEnvelope, NamePair};
use crate::domain::ports::{JokeProvider, NameProvider};
use crate::utils::error::{JokeError, RemoteCallError, Result};
use crate::utils::validation::validate_url;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

const NAME_SERVICE: &str = "name service";
const JOKE_SERVICE: &str = "joke service";

fn build_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| JokeError::ConfigError {
            message: format!("failed to build HTTP client: {}", e),
        })
}

/// GETs `url` and decodes a JSON body of type `T`.
///
/// Any non-2xx status is a failure; the body is decoded by hand so a
/// non-JSON payload surfaces as `RemoteCallError::Body`.
async fn get_json<T: DeserializeOwned>(
    client: &Client,
    service: &'static str,
    url: Url,
) -> Result<T> {
    tracing::debug!("Making {} request to: {}", service, url);
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| JokeError::remote(service, e))?;

    let status = response.status();
    tracing::debug!("{} response status: {}", service, status);
    if !status.is_success() {
        return Err(JokeError::remote(service, RemoteCallError::Status(status)));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| JokeError::remote(service, e))?;

    serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(
            "{} returned undecodable body: {}",
            service,
            String::from_utf8_lossy(&body)
        );
        JokeError::remote(service, e)
    })
}

#[derive(Debug, Clone)]
pub struct HttpNameProvider {
    client: Client,
    endpoint: Url,
}

impl HttpNameProvider {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout)?,
            endpoint: validate_url("name_service_url", endpoint)?,
        })
    }
}

#[async_trait::async_trait]
impl NameProvider for HttpNameProvider {
    async fn random_name(&self) -> Result<NamePair> {
        get_json(&self.client, NAME_SERVICE, self.endpoint.clone()).await
    }
}

#[derive(Debug, Clone)]
pub struct HttpJokeProvider {
    client: Client,
    endpoint: Url,
}

impl HttpJokeProvider {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout)?,
            endpoint: validate_url("joke_service_url", endpoint)?,
        })
    }

    /// Joke URL for `name`; query pairs already on the endpoint are kept.
    pub fn joke_url(&self, name: &NamePair) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("firstName", &name.first_name)
            .append_pair("lastName", &name.last_name);
        url
    }
}

#[async_trait::async_trait]
impl JokeProvider for HttpJokeProvider {
    async fn joke_for(&self, name: &NamePair) -> Result<String> {
        let envelope: JokeEnvelope =
            get_json(&self.client, JOKE_SERVICE, self.joke_url(name)).await?;
        Ok(envelope.into_text())
    }
}
