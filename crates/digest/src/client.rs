use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::models::NodeList;

pub const DEFAULT_BASE_URL: &str = "https://www.drupal.org/api-d7";

#[derive(Debug, Clone)]
pub struct DrupalClientConfig {
    pub base_url: String,
    pub max_retries: u32,
    pub timeout_secs: u64,
}

impl DrupalClientConfig {
    /// Load client config from environment, falling back to the public
    /// drupal.org api-d7 endpoint. The remote API is unauthenticated.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("DRUPAL_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let max_retries = std::env::var("DRUPAL_MAX_RETRIES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3);
        let timeout_secs = std::env::var("DRUPAL_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Self {
            base_url,
            max_retries,
            timeout_secs,
        }
    }
}

#[derive(Clone)]
pub struct DrupalClient {
    client: Client,
    config: DrupalClientConfig,
}

#[derive(Debug, thiserror::Error)]
pub enum DrupalClientError {
    #[error("HTTP {status}: {body}")]
    HttpError { status: StatusCode, body: String },

    #[error("request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}

impl DrupalClient {
    pub fn new(config: DrupalClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    /// Issue a filtered `node.json` read and decode the `list` envelope,
    /// retrying transient errors.
    pub async fn fetch_nodes<T>(
        &self,
        query: &[(&str, String)],
    ) -> Result<NodeList<T>, DrupalClientError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}/node.json", self.config.base_url);
        let mut last_error = String::new();

        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                let backoff_secs = std::cmp::min(1u64 << attempt, 30);
                tracing::warn!(attempt, backoff_secs, "retrying after backoff");
                tokio::time::sleep(Duration::from_secs(backoff_secs)).await;
            }

            let response = match self.client.get(&url).query(query).send().await {
                Ok(resp) => resp,
                Err(e) => {
                    last_error = e.to_string();
                    if e.is_timeout() || e.is_connect() {
                        continue;
                    }
                    return Err(DrupalClientError::RequestError(e));
                }
            };

            let status = response.status();

            if status.is_success() {
                return response
                    .json::<NodeList<T>>()
                    .await
                    .map_err(DrupalClientError::RequestError);
            }

            // Honor Retry-After header for 429
            if status == StatusCode::TOO_MANY_REQUESTS {
                if let Some(retry_after) = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<u64>().ok())
                {
                    let wait = std::cmp::min(retry_after, 60);
                    tracing::warn!(wait, "rate-limited, waiting Retry-After");
                    tokio::time::sleep(Duration::from_secs(wait)).await;
                }
                last_error = "429 Too Many Requests".to_string();
                continue;
            }

            // Retry on 5xx
            if status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                last_error = format!("{status}: {body}");
                continue;
            }

            // Fail fast on 4xx (except 429 handled above)
            let body = response.text().await.unwrap_or_default();
            return Err(DrupalClientError::HttpError { status, body });
        }

        Err(DrupalClientError::MaxRetriesExceeded {
            attempts: self.config.max_retries + 1,
            last_error,
        })
    }
}
