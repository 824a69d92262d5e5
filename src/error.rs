use thiserror::Error;

/// Failure of a single upstream request. Terminal for that request only.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("Rate limit exceeded, please try again later")]
    RateLimited,

    #[error("Empty response body")]
    EmptyBody,

    #[error("JSON decoding error: {0}")]
    Decode(String),

    #[error("Participant {player_id} not found in match {match_id}")]
    ParticipantNotFound { match_id: String, player_id: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Decode(e.to_string())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unsupported region: {0}")]
pub struct UnsupportedRegionError(pub String);

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Player not found: {0}")]
    PlayerNotFound(String),

    #[error(transparent)]
    UnsupportedRegion(#[from] UnsupportedRegionError),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}
