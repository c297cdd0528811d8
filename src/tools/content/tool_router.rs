use std::future::Future;
use std::sync::Arc;

use rmcp::handler::server::tool::{Parameters, ToolRouter};
use rmcp::model::{
    CallToolResult, Implementation, ListResourceTemplatesResult, PaginatedRequestParam,
    ReadResourceRequestParam, ReadResourceResult, ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData as McpError, RoleServer};

use crate::core::envelope;
use crate::core::request::ContentQuery;
use crate::core::source::ContentSource;
use crate::infra::runtime::mcp_transport::ServerHandler;
use crate::tools::content::args::{
    FilterContentsArgs, GetContentArgs, GetContentsArgs, SearchContentsArgs,
};
use crate::tools::content::resources;

/// MCP handler exposing microCMS content as tools and `microcms://` resources.
#[derive(Clone)]
pub struct CmsSvc {
    source: Arc<dyn ContentSource>,
}

impl CmsSvc {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self { source }
    }

    /// Shared path of every tool: normalize, fetch, wrap. Failures never escape as protocol errors.
    async fn run_tool<A: ContentQuery + Send>(&self, tool: &'static str, args: A) -> CallToolResult {
        let req = args.into_request();
        tracing::debug!(
            tool,
            endpoint = %req.endpoint,
            content_id = ?req.content_id,
            params = req.query.len(),
            "tool invoked"
        );
        match self.source.fetch(&req).await {
            Ok(payload) => envelope::tool_success(&payload),
            Err(e) => {
                tracing::warn!(tool, endpoint = %req.endpoint, error = %e, "tool call failed");
                envelope::tool_failure(&e)
            }
        }
    }

    pub async fn read(&self, uri: &str) -> Result<ReadResourceResult, McpError> {
        let req = resources::parse_uri(uri).ok_or_else(|| {
            McpError::invalid_params(format!("unknown resource uri: {uri}"), None)
        })?;
        tracing::debug!(uri, endpoint = %req.endpoint, content_id = ?req.content_id, "resource read");
        let outcome = self.source.fetch(&req).await;
        if let Err(e) = &outcome {
            tracing::warn!(uri, error = %e, "resource read failed");
        }
        Ok(envelope::resource_result(uri, outcome))
    }

    pub fn resource_templates() -> Result<ListResourceTemplatesResult, McpError> {
        let resource_templates = resources::templates()
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(ListResourceTemplatesResult {
            next_cursor: None,
            resource_templates,
        })
    }
}

#[rmcp::tool_router]
impl CmsSvc {
    #[rmcp::tool(
        name = "get_contents",
        description = "Get a list of contents from a microCMS endpoint"
    )]
    async fn get_contents(
        &self,
        params: Parameters<GetContentsArgs>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.run_tool("get_contents", params.0).await)
    }

    #[rmcp::tool(
        name = "get_content",
        description = "Get a single content item from a microCMS endpoint by its ID"
    )]
    async fn get_content(
        &self,
        params: Parameters<GetContentArgs>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.run_tool("get_content", params.0).await)
    }

    #[rmcp::tool(
        name = "search_contents",
        description = "Full-text search over the contents of a microCMS endpoint"
    )]
    async fn search_contents(
        &self,
        params: Parameters<SearchContentsArgs>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.run_tool("search_contents", params.0).await)
    }

    #[rmcp::tool(
        name = "filter_contents",
        description = "Get contents of a microCMS endpoint matching a filters expression"
    )]
    async fn filter_contents(
        &self,
        params: Parameters<FilterContentsArgs>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.run_tool("filter_contents", params.0).await)
    }
}

pub type CmsRouter = ToolRouter<CmsSvc>;

impl CmsSvc {
    pub fn router() -> CmsRouter {
        // Wrapper to expose the macro-generated private tool_router
        Self::tool_router()
    }
}

impl ServerHandler for CmsSvc {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder()
                .enable_resources()
                .enable_tools()
                .build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Implementation::from_build_env()
            },
            instructions: Some(
                "Read-only access to microCMS content. Use the tools to list, fetch, search \
                 and filter contents, or read microcms://{endpoint} and \
                 microcms://{endpoint}/{contentId} resources."
                    .into(),
            ),
            ..Default::default()
        }
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, McpError> {
        Self::resource_templates()
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        self.read(&request.uri).await
    }
}
