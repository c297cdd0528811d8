use thiserror::Error;

/// Failure of a single call against the microCMS content API.
#[derive(Debug, Error)]
pub enum CmsError {
    #[error("microCMS API error: {status} {reason}")]
    Remote { status: u16, reason: String },
    #[error("request to microCMS failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("microCMS response is not valid JSON: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("invalid microCMS url: {0}")]
    InvalidUrl(String),
}

impl CmsError {
    pub fn status(&self) -> Option<u16> {
        match self {
            CmsError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Startup configuration problems. Any of these stops the process before it serves.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("MICROCMS_API_KEY is not set")]
    MissingApiKey,
    #[error("Invalid MODE: {0}. Must be 'stdio' or 'http'")]
    InvalidMode(String),
    #[error("Invalid PORT: {0}")]
    InvalidPort(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_error_embeds_status_and_reason() {
        let e = CmsError::Remote { status: 404, reason: "Not Found".into() };
        assert_eq!(e.to_string(), "microCMS API error: 404 Not Found");
        assert_eq!(e.status(), Some(404));
    }

    #[test]
    fn invalid_url_has_no_status() {
        let e = CmsError::InvalidUrl("mailto:x".into());
        assert!(e.status().is_none());
        assert!(e.to_string().contains("mailto:x"));
    }

    #[test]
    fn config_error_messages() {
        assert_eq!(ConfigError::MissingApiKey.to_string(), "MICROCMS_API_KEY is not set");
        assert!(ConfigError::InvalidMode("tcp".into()).to_string().contains("Invalid MODE: tcp"));
    }
}
