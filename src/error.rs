use thiserror::Error;

#[derive(Debug, Error)]
pub enum FoomaxError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Request error: {0}")]
    RequestError(String),
    #[error("Response error: {0}")]
    ResponseError(String),
    #[error("Received an empty response from the API")]
    EmptyResponse,
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl FoomaxError {
    /// True for failures that happened before anything was sent.
    pub fn is_local(&self) -> bool {
        matches!(self, FoomaxError::ConfigError(_) | FoomaxError::InvalidInput(_))
    }
}

impl From<reqwest::Error> for FoomaxError {
    fn from(e: reqwest::Error) -> Self {
        FoomaxError::RequestError(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FoomaxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            FoomaxError::ConfigError("API_KEY environment variable not set".into()).to_string(),
            "Configuration error: API_KEY environment variable not set"
        );
        assert_eq!(
            FoomaxError::EmptyResponse.to_string(),
            "Received an empty response from the API"
        );
    }

    #[test]
    fn test_local_errors() {
        assert!(FoomaxError::InvalidInput("blank".into()).is_local());
        assert!(!FoomaxError::EmptyResponse.is_local());
        assert!(!FoomaxError::RequestError("timeout".into()).is_local());
    }
}
