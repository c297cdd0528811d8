use reqwest::RequestBuilder;

/// Header microCMS reads the API key from.
pub const API_KEY_HEADER: &str = "X-MICROCMS-API-KEY";

/// Generate a simple request id suitable for logging/correlation.
pub fn generate_request_id() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("mcms-{}-{}", now.as_secs(), now.subsec_nanos())
}

/// Attach the credential plus a fresh correlation id. Returns the updated builder and the request id used.
pub fn add_standard_headers(builder: RequestBuilder, api_key: &str) -> (RequestBuilder, String) {
    let rid = generate_request_id();
    let b = builder
        .header(API_KEY_HEADER, api_key)
        .header("x-request-id", rid.as_str());
    (b, rid)
}
