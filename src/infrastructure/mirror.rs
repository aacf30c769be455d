use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

use crate::domain::models::Person;
use crate::services::errors::ServiceError;

/// Client for the external REST mirror assumed to expose the same person list
/// at `GET <base_url>/persons`. Fetched fresh on every call; no caching and no
/// retries.
#[derive(Debug, Clone)]
pub struct MirrorClient {
    http: Client,
    endpoint: Url,
}

impl MirrorClient {
    pub fn new(base_url: &str) -> Result<Self, ServiceError> {
        let base = Url::parse(base_url)
            .map_err(|err| ServiceError::Upstream(format!("invalid mirror base url: {err}")))?;
        let endpoint = base
            .join("persons")
            .map_err(|err| ServiceError::Upstream(format!("invalid mirror endpoint: {err}")))?;
        Ok(Self {
            http: Client::new(),
            endpoint,
        })
    }

    pub async fn fetch_persons(&self) -> Result<Vec<Person>, ServiceError> {
        debug!(endpoint = %self.endpoint, "fetching person list from mirror");
        let response = self
            .http
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(|err| {
                warn!(error = %err, "mirror request failed");
                ServiceError::Upstream(err.to_string())
            })?
            .error_for_status()
            .map_err(|err| ServiceError::Upstream(err.to_string()))?;

        response
            .json::<Vec<Person>>()
            .await
            .map_err(|err| ServiceError::Upstream(format!("mirror returned invalid body: {err}")))
    }
}
