use axum::{
    routing::{any_service, get},
    Router,
};
use std::sync::Arc;

use crate::core::source::ContentSource;
use crate::infra::runtime::mcp_transport::{make_streamable_http_service, LocalSessionManager};
use crate::tools::content::factory;

/// `/healthz` + streamable MCP at `/mcp`.
pub fn build_app(source: Arc<dyn ContentSource>) -> Router {
    let session_mgr = Arc::new(LocalSessionManager::default());
    let mcp_service = make_streamable_http_service(factory(source), session_mgr);

    Router::new()
        .route("/healthz", get(|| async { "ok" }))
        .route_service("/mcp", any_service(mcp_service))
}
