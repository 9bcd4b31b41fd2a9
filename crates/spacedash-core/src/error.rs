use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("source error: {0}")]
    Source(String),
    #[error("render error: {0}")]
    Render(String),
}

pub type DashResult<T> = Result<T, DashError>;
