use std::time::Instant;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value as JsonValue;

use crate::core::error::CmsError;
use crate::core::query::QueryParams;
use crate::core::source::ContentSource;
use crate::infra::config::Config;
use crate::infra::http::headers::add_standard_headers;
use crate::infra::runtime::limits::make_http_client;

/// Read-only client for the microCMS content API (`{base}/api/v1/...`).
#[derive(Clone)]
pub struct MicroCmsClient {
    base: String,
    api_key: String,
    http: Client,
}

impl MicroCmsClient {
    pub fn new(base: impl Into<String>, api_key: impl Into<String>) -> Result<Self, reqwest::Error> {
        Ok(Self {
            base: base.into(),
            api_key: api_key.into(),
            http: make_http_client()?,
        })
    }

    pub fn from_config(cfg: &Config) -> Result<Self, reqwest::Error> {
        Self::new(cfg.base_url.clone(), cfg.api_key.clone())
    }

    /// `{base}/api/v1/{endpoint}[/{content_id}][?query]`. No `?` is emitted for an empty query.
    pub fn build_url(
        &self,
        endpoint: &str,
        content_id: Option<&str>,
        query: &QueryParams,
    ) -> Result<Url, CmsError> {
        let mut url = Url::parse(&self.base)
            .map_err(|e| CmsError::InvalidUrl(format!("{}: {e}", self.base)))?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| CmsError::InvalidUrl(self.base.clone()))?;
            segments.pop_if_empty().extend(["api", "v1", endpoint]);
            if let Some(id) = content_id {
                segments.push(id);
            }
        }
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.iter());
        }
        Ok(url)
    }

    async fn get_json(&self, url: Url) -> Result<JsonValue, CmsError> {
        let start = Instant::now();
        let (builder, rid) = add_standard_headers(self.http.get(url.clone()), &self.api_key);
        tracing::debug!(url = %url, request_id = %rid, "microcms request");

        let res = async {
            let resp = builder.send().await.map_err(CmsError::Transport)?;
            let status = resp.status();
            if !status.is_success() {
                return Err(CmsError::Remote {
                    status: status.as_u16(),
                    reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
                });
            }
            resp.json::<JsonValue>().await.map_err(CmsError::Decode)
        }
        .await;

        match &res {
            Ok(_) => {
                let elapsed_ms = start.elapsed().as_millis() as f64;
                crate::infra::logging::log_metric("microcms", "remote_latency_ms", elapsed_ms);
            }
            Err(e) => {
                tracing::warn!(
                    url = %url,
                    request_id = %rid,
                    status = ?e.status(),
                    error = %e,
                    "microcms request failed"
                );
                crate::infra::logging::log_metric("microcms", "remote_error_total", 1.0);
            }
        }
        res
    }
}

#[async_trait]
impl ContentSource for MicroCmsClient {
    async fn fetch_list(&self, endpoint: &str, query: &QueryParams) -> Result<JsonValue, CmsError> {
        let url = self.build_url(endpoint, None, query)?;
        self.get_json(url).await
    }

    async fn fetch_one(
        &self,
        endpoint: &str,
        content_id: &str,
        query: &QueryParams,
    ) -> Result<JsonValue, CmsError> {
        let url = self.build_url(endpoint, Some(content_id), query)?;
        self.get_json(url).await
    }
}
