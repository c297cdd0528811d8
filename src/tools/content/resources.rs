//! `microcms://` resource templates and URI matching.

use percent_encoding::percent_decode_str;
use rmcp::model::ResourceTemplate;
use serde_json::json;

use crate::core::query::QueryParams;
use crate::core::request::ContentRequest;

pub const SCHEME: &str = "microcms";

pub const CONTENT_TEMPLATE: &str = "microcms://{endpoint}/{contentId}";
pub const CONTENTS_TEMPLATE: &str = "microcms://{endpoint}";

/// The two addressable templates. Built through serde so the SDK's wire shape stays authoritative.
pub fn templates() -> Result<Vec<ResourceTemplate>, serde_json::Error> {
    [
        json!({
            "uriTemplate": CONTENT_TEMPLATE,
            "name": "content",
            "description": "A single content item from a microCMS endpoint",
            "mimeType": "application/json",
        }),
        json!({
            "uriTemplate": CONTENTS_TEMPLATE,
            "name": "contents",
            "description": "The content list of a microCMS endpoint",
            "mimeType": "application/json",
        }),
    ]
    .into_iter()
    .map(serde_json::from_value)
    .collect()
}

/// Match a resource URI against the templates. Resource reads never carry query options.
///
/// Segments are percent-decoded so the client encodes them exactly once, as it
/// does for tool arguments. A segment that does not decode to UTF-8 never matches.
pub fn parse_uri(uri: &str) -> Option<ContentRequest> {
    let rest = uri.strip_prefix(SCHEME)?.strip_prefix("://")?;
    let mut parts = rest.trim_end_matches('/').split('/');
    let endpoint = parts.next().filter(|s| !s.is_empty()).map(decode_segment)??;
    match (parts.next(), parts.next()) {
        (None, _) => Some(ContentRequest::list(endpoint, QueryParams::new())),
        (Some(id), None) if !id.is_empty() => {
            Some(ContentRequest::one(endpoint, decode_segment(id)?, QueryParams::new()))
        }
        _ => None,
    }
}

fn decode_segment(raw: &str) -> Option<String> {
    percent_decode_str(raw).decode_utf8().ok().map(|s| s.into_owned())
}
