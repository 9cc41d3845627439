//! Firebase Realtime Database REST backend.
//!
//! Each read is `GET {base}/{path}.json[?auth=...]`. The database answers
//! `null` for paths with no data.

use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use serde_json::Value;
use url::Url;

use super::KeyValueStore;

#[derive(Debug, Clone)]
pub struct RtdbStore {
    client: reqwest::Client,
    base_url: Url,
    auth: Option<String>,
}

impl RtdbStore {
    /// Creates a client for the database at `base_url`.
    ///
    /// `auth` is sent as the `auth` query parameter (ID token or database
    /// secret). `timeout` bounds each read.
    pub fn new(base_url: &str, auth: Option<String>, timeout: Duration) -> Result<Self> {
        let base_url =
            Url::parse(base_url).with_context(|| format!("Invalid database URL: {base_url}"))?;
        if base_url.cannot_be_a_base() {
            bail!("Invalid database URL: {base_url}");
        }
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            client,
            base_url,
            auth: auth.filter(|token| !token.is_empty()),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds the REST URL for a record path.
    pub fn record_url(&self, path: &str) -> Result<Url> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let Some((last, parents)) = segments.split_last() else {
            bail!("Empty record path");
        };

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| anyhow!("Invalid database URL: {}", self.base_url))?
            .pop_if_empty()
            .extend(parents)
            .push(&format!("{last}.json"));
        if let Some(auth) = &self.auth {
            url.query_pairs_mut().append_pair("auth", auth);
        }
        Ok(url)
    }
}

impl KeyValueStore for RtdbStore {
    async fn get(&self, path: &str) -> Result<Option<Value>> {
        let url = self.record_url(path)?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Request for {path} failed"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("Database returned {status} for {path}: {body}");
        }

        let value: Value = response
            .json()
            .await
            .with_context(|| format!("Invalid JSON for {path}"))?;
        Ok((!value.is_null()).then_some(value))
    }
}
