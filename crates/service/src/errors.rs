use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("parse error: {0}")]
    Parse(String),
    #[error("io error: {0}")]
    Io(String),
    #[error("unsupported document shape: {0}")]
    Shape(String),
}
