//! Typed tool parameters. The SDK derives and enforces their JSON schema
//! before a call reaches the dispatcher.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::query::QueryParams;
use crate::core::request::{ContentQuery, ContentRequest};

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetContentsArgs {
    /// Content API endpoint name (e.g. "blogs")
    pub endpoint: String,
    /// Maximum number of items to return
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Number of items to skip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Sort order, e.g. "-publishedAt"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orders: Option<String>,
    /// Full-text search keyword
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    /// Filter expression, e.g. "title[contains]hello"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<String>,
    /// Comma-separated list of fields to return
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
    /// Depth of referenced content to expand
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<u32>,
}

impl ContentQuery for GetContentsArgs {
    fn into_request(self) -> ContentRequest {
        let query = QueryParams::new()
            .with_opt("limit", self.limit)
            .with_opt("offset", self.offset)
            .with_opt("orders", self.orders)
            .with_opt("q", self.q)
            .with_opt("filters", self.filters)
            .with_opt("fields", self.fields)
            .with_opt("depth", self.depth);
        ContentRequest::list(self.endpoint, query)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetContentArgs {
    /// Content API endpoint name (e.g. "blogs")
    pub endpoint: String,
    /// ID of the content item
    pub content_id: String,
    /// Comma-separated list of fields to return
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
    /// Depth of referenced content to expand
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<u32>,
    /// Draft key for reading unpublished content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draft_key: Option<String>,
}

impl ContentQuery for GetContentArgs {
    fn into_request(self) -> ContentRequest {
        let query = QueryParams::new()
            .with_opt("fields", self.fields)
            .with_opt("depth", self.depth)
            .with_opt("draftKey", self.draft_key);
        ContentRequest::one(self.endpoint, self.content_id, query)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchContentsArgs {
    /// Content API endpoint name (e.g. "blogs")
    pub endpoint: String,
    /// Full-text search keyword
    pub q: String,
    /// Maximum number of items to return
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Number of items to skip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Comma-separated list of fields to return
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
    /// Depth of referenced content to expand
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<u32>,
}

impl ContentQuery for SearchContentsArgs {
    fn into_request(self) -> ContentRequest {
        let query = QueryParams::new()
            .with("q", self.q)
            .with_opt("limit", self.limit)
            .with_opt("offset", self.offset)
            .with_opt("fields", self.fields)
            .with_opt("depth", self.depth);
        ContentRequest::list(self.endpoint, query)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FilterContentsArgs {
    /// Content API endpoint name (e.g. "blogs")
    pub endpoint: String,
    /// Filter expression, e.g. "category[equals]news[and]publishedAt[greater_than]2024-01-01"
    pub filters: String,
    /// Maximum number of items to return
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Number of items to skip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Comma-separated list of fields to return
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
    /// Depth of referenced content to expand
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<u32>,
}

impl ContentQuery for FilterContentsArgs {
    fn into_request(self) -> ContentRequest {
        let query = QueryParams::new()
            .with("filters", self.filters)
            .with_opt("limit", self.limit)
            .with_opt("offset", self.offset)
            .with_opt("fields", self.fields)
            .with_opt("depth", self.depth);
        ContentRequest::list(self.endpoint, query)
    }
}
