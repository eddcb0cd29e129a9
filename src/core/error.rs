use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenquestError {
    #[error("Annotation failed: {0}")]
    Annotation(String),

    #[error("Invalid token stream: {0}")]
    InvalidStream(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Passage of {chars} characters exceeds the limit of {limit}")]
    PassageTooLarge { chars: usize, limit: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GenquestError>;
