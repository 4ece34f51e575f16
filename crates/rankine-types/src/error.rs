use thiserror::Error;

#[derive(Error, Debug)]
pub enum RankineError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Domain error: {0}")]
    Domain(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type RankineResult<T> = Result<T, RankineError>;
