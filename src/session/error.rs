use crate::model::{ImageSize, ModelError};
use crate::surface::SurfaceError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("source image could not be decoded: {0}")]
    Decode(#[from] image::ImageError),

    #[error("mask surface is {surface:?} but the source image is {image:?}")]
    SizeMismatch { image: ImageSize, surface: ImageSize },

    #[error("apply is unavailable: {0}")]
    ApplyUnavailable(String),

    #[error("editor session is closed")]
    Closed,

    #[error("invalid editor configuration: {0}")]
    InvalidConfig(String),

    #[error("configuration I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration JSON failure: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("configuration YAML failure: {0}")]
    SerdeYaml(#[from] serde_yaml::Error),

    #[error("mask surface failure: {0}")]
    Surface(#[from] SurfaceError),

    #[error("image model failure: {0}")]
    Model(#[from] ModelError),
}
