use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("insufficient roster for {team}: need {needed}, found {found}")]
    RosterInsufficient {
        team: String,
        needed: usize,
        found: usize,
    },

    #[error("invalid roster: {0}")]
    InvalidRoster(String),

    #[error("unsupported schema version: found {found}, expected {expected}")]
    SchemaVersionMismatch { found: u8, expected: u8 },

    #[error("team not found: {0}")]
    TeamNotFound(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SimError {
    /// True when the error stems from caller-supplied data rather than
    /// an internal failure (callers can fix the input and retry).
    pub fn is_input_error(&self) -> bool {
        match self {
            SimError::RosterInsufficient { .. } => true,
            SimError::InvalidRoster(_) => true,
            SimError::SchemaVersionMismatch { .. } => true,
            SimError::TeamNotFound(_) => true,
            SimError::Serialization(_) => true,
            SimError::Io(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, SimError>;
