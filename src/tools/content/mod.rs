pub mod args;
pub mod resources;
pub mod tool_router;

use std::sync::Arc;

use crate::core::source::ContentSource;
use tool_router::{CmsRouter, CmsSvc};

/// Factory required by the rmcp stdio and Streamable HTTP transports.
/// Every session gets its own handler over the same shared source.
pub fn factory(
    source: Arc<dyn ContentSource>,
) -> impl Fn() -> (CmsSvc, CmsRouter) + Clone + Send + Sync + 'static {
    move || (CmsSvc::new(source.clone()), CmsSvc::router())
}
