use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::core::error::CmsError;
use crate::core::query::QueryParams;
use crate::core::request::ContentRequest;

/// Backend abstraction so the dispatcher can run against the live API or a test double.
#[async_trait]
pub trait ContentSource: Send + Sync + 'static {
    async fn fetch_list(&self, endpoint: &str, query: &QueryParams) -> Result<JsonValue, CmsError>;

    async fn fetch_one(
        &self,
        endpoint: &str,
        content_id: &str,
        query: &QueryParams,
    ) -> Result<JsonValue, CmsError>;

    async fn fetch(&self, req: &ContentRequest) -> Result<JsonValue, CmsError> {
        match &req.content_id {
            Some(id) => self.fetch_one(&req.endpoint, id, &req.query).await,
            None => self.fetch_list(&req.endpoint, &req.query).await,
        }
    }
}
