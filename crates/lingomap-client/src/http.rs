//! reqwest-backed lookup client.

use std::time::Duration;

use async_trait::async_trait;
use lingomap_core::{LanguageEntry, LanguageRequest, LanguageResponse};
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use tracing::{debug, instrument};

use crate::error::{LookupError, LookupResult};
use crate::LanguageLookup;

/// HTTP client for `POST /most_spoken_languages/`.
#[derive(Debug, Clone)]
pub struct HttpLanguageClient {
    endpoint: String,
    client: Client,
}

impl HttpLanguageClient {
    /// Where the backend listens when run locally.
    pub const DEFAULT_ENDPOINT: &'static str = "http://127.0.0.1:8000/most_spoken_languages/";

    /// Client with no request timeout; a lookup waits as long as the network does.
    pub fn new(endpoint: impl Into<String>) -> LookupResult<Self> {
        Self::with_timeout(endpoint, None)
    }

    pub fn with_timeout(endpoint: impl Into<String>, timeout: Option<Duration>) -> LookupResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            endpoint: endpoint.into(),
            client: builder.build()?,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl LanguageLookup for HttpLanguageClient {
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn fetch(&self, region: &str, count: u32) -> LookupResult<Vec<LanguageEntry>> {
        let request = LanguageRequest::new(region, count);

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(LookupError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: LanguageResponse = serde_json::from_str(&body)?;
        debug!(count = parsed.top_languages.len(), "languages_received");
        Ok(parsed.top_languages)
    }
}
