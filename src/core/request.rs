use crate::core::query::QueryParams;

/// A normalized read against the content API, produced by every tool and resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRequest {
    pub endpoint: String,
    pub content_id: Option<String>,
    pub query: QueryParams,
}

impl ContentRequest {
    pub fn list(endpoint: impl Into<String>, query: QueryParams) -> Self {
        Self { endpoint: endpoint.into(), content_id: None, query }
    }

    pub fn one(endpoint: impl Into<String>, content_id: impl Into<String>, query: QueryParams) -> Self {
        Self { endpoint: endpoint.into(), content_id: Some(content_id.into()), query }
    }
}

/// Typed tool arguments that know how to become a [`ContentRequest`].
pub trait ContentQuery {
    fn into_request(self) -> ContentRequest;
}
