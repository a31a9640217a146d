use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreboardError {
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Unsupported schema version: found {found}, expected {expected}")]
    SchemaVersion { found: u8, expected: u8 },
}

impl From<serde_json::Error> for ScoreboardError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() {
            ScoreboardError::Deserialization(err.to_string())
        } else {
            ScoreboardError::Serialization(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, ScoreboardError>;
