use thiserror::Error;

pub type Result<T> = std::result::Result<T, ModelError>;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("image must have non-zero dimensions, found {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("invalid container size: {0}")]
    InvalidContainer(String),
}
