use thiserror::Error;

#[derive(Error, Debug)]
pub enum KusError {
    #[error("Failed to fetch kus: {status}")]
    Transport { status: u16 },

    #[error("Failed to decode kus: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Expected a JSON array of kus, got {found}")]
    NotAList { found: &'static str },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl KusError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            KusError::Transport { status } if *status >= 500 => {
                "The server reported an internal error; check the backend logs"
            }
            KusError::Transport { .. } => "Check that the server exposes GET /api/kus",
            KusError::Decode(_) => "The endpoint must return a JSON body",
            KusError::NotAList { .. } => "The endpoint must return a JSON array",
            KusError::Http(_) => "Check that the base URL is reachable",
            KusError::Io(_) => "Check that the config file exists and is readable",
            KusError::ConfigError { .. } | KusError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and try again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, KusError>;
