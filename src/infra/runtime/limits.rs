/// Build the shared reqwest client. Timeouts are left at reqwest's defaults.
pub fn make_http_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(format!("microcms-mcp-gateway/{}", env!("CARGO_PKG_VERSION")))
        .build()
}

#[cfg(test)]
mod tests {
    #[test]
    fn builds_client() {
        assert!(super::make_http_client().is_ok());
    }
}
