use derive_more::Display;

/// Failures crossing the outbound HTTP boundary.
///
/// Shape mismatches in tolerated payloads (social links, technology tags)
/// never surface here; those normalize to empty values at the entity layer.
#[derive(Debug, Display)]
pub enum AppError {
    #[display("transport error: {_0}")]
    Transport(String),

    #[display("unexpected response status: {_0}")]
    UnexpectedStatus(u16),

    #[display("failed to decode response: {_0}")]
    Decode(String),

    #[display("configuration error: {_0}")]
    Config(String),
}

impl std::error::Error for AppError {}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            AppError::UnexpectedStatus(status.as_u16())
        } else {
            AppError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}
