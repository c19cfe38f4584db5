//! Fetch Errors

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error: {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(FetchError::Status(503).to_string(), "HTTP error: 503");
        assert_eq!(
            FetchError::Network("offline".into()).to_string(),
            "Network error: offline"
        );
    }
}
