use crate::config::Config;
use crate::errors::FetchError;
use crate::models::{self, TranscriptKey};
use anyhow::Result;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::debug;

/// HTTP client for the earnings-transcript API. Holds the credential for the
/// process lifetime; the credential travels only in the `X-Api-Key` header
/// and is never logged.
pub struct TranscriptClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl TranscriptClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.http.user_agent)
            .timeout(config.http_timeout())
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
        })
    }

    /// Fetch the transcript for one key.
    ///
    /// `Ok(None)` means the provider published nothing for that quarter;
    /// non-2xx statuses, transport failures, and malformed bodies surface
    /// as `Err`. Nothing is retried.
    pub async fn fetch(&self, key: &TranscriptKey) -> Result<Option<Value>, FetchError> {
        debug!(
            "requesting {}?ticker={}&year={}&quarter={}",
            self.base_url, key.ticker, key.year, key.quarter
        );

        let year = key.year.to_string();
        let quarter = key.quarter.to_string();
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("ticker", key.ticker.as_str()),
                ("year", year.as_str()),
                ("quarter", quarter.as_str()),
            ])
            .header("X-Api-Key", &self.api_key)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        classify_response(status, &body)
    }
}

/// Interpret one API response. Pure so the fetch contract is testable
/// without a network.
pub(crate) fn classify_response(
    status: StatusCode,
    body: &str,
) -> Result<Option<Value>, FetchError> {
    if !status.is_success() {
        return Err(FetchError::Api {
            status: status.as_u16(),
            message: body.trim().to_string(),
        });
    }

    let body = body.trim();
    if body.is_empty() {
        return Ok(None);
    }

    let document: Value = serde_json::from_str(body)?;
    if models::is_empty_document(&document) {
        return Ok(None);
    }

    Ok(Some(document))
}
