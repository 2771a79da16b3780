use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::constants::{API_KEY_ENV, BASE_URL_ENV, CONCURRENT_REQUESTS, STEAM_API_BASE_URL};
use crate::error::{Error, Result};
use crate::response::ApiResponse;

#[derive(Clone)]
pub struct Client {
    api_key: Option<String>,
    base_url: String,
    concurrent_requests: usize,
    client: reqwest::Client,
}

#[derive(Default)]
pub struct ClientOptions {
    api_key: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    concurrent_requests: Option<usize>,
}

impl ClientOptions {
    pub fn new() -> Self {
        Self::default()
    }
    /// Read [`API_KEY_ENV`] and [`BASE_URL_ENV`], loading a `.env` file first if there is one
    pub fn from_env() -> Self {
        let _ = dotenv::dotenv();
        Self {
            api_key: dotenv::var(API_KEY_ENV).ok(),
            base_url: dotenv::var(BASE_URL_ENV).ok(),
            ..Self::default()
        }
    }
    /// Appended as `key` to every request
    pub fn api_key(mut self, key: String) -> Self {
        self.api_key = Some(key);
        self
    }
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }
    pub fn timeout_ms(self, ms: u64) -> Self {
        self.timeout(Duration::from_millis(ms))
    }
    /// How many requests the batched endpoints keep in flight
    pub fn concurrent_requests(mut self, count: usize) -> Self {
        self.concurrent_requests = Some(count);
        self
    }
    pub fn build(self) -> reqwest::Result<Client> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let base_url = self
            .base_url
            .unwrap_or_else(|| STEAM_API_BASE_URL.to_string());

        Ok(Client {
            api_key: self.api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            concurrent_requests: self.concurrent_requests.unwrap_or(CONCURRENT_REQUESTS).max(1),
            client: builder.build()?,
        })
    }
}

impl Client {
    /// Send a `GET` to `path` and return the body.
    ///
    /// Statuses outside of `200-299` are turned into [`Error::Transport`] holding the body.
    pub(crate) async fn get_bytes(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<u8>> {
        let url = self.endpoint_url(path);
        tracing::debug!(endpoint = path, "requesting steam web api");

        let mut req = self.client.get(&url).query(query);
        if let Some(key) = self.api_key.as_deref() {
            req = req.query(&[("key", key)]);
        }

        let resp = req.send().await?;
        let status = resp.status();
        let status_err = resp.error_for_status_ref().err();
        let bytes = resp.bytes().await?.to_vec();
        tracing::trace!(endpoint = path, %status, len = bytes.len(), "received response");

        match status_err {
            Some(source) => Err(Error::Transport {
                source,
                body: Some(bytes),
            }),
            None => Ok(bytes),
        }
    }

    /// Send a `GET` to `path`, decode the body as `R` and convert it into the payload `T`
    pub(crate) async fn get_json<R, T>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<ApiResponse<T>>
    where
        R: DeserializeOwned + Into<T>,
    {
        let bytes = self.get_bytes(path, query).await?;
        match serde_json::from_slice::<R>(&bytes) {
            Ok(envelope) => Ok(ApiResponse::new(envelope.into(), bytes)),
            Err(source) => Err(Error::Decode {
                source,
                body: bytes,
            }),
        }
    }

    fn endpoint_url(&self, path: &str) -> String {
        format!("{}/{}/", self.base_url, path.trim_matches('/'))
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }
    pub fn concurrent_requests(&self) -> usize {
        self.concurrent_requests
    }
}
