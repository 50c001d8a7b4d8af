use thiserror::Error;

use crate::model::ImageSize;

pub type Result<T> = std::result::Result<T, SurfaceError>;

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("mask pixels could not be read: {0}")]
    Unreadable(String),

    #[error("snapshot is {found:?} but the surface is {expected:?}")]
    SnapshotMismatch {
        expected: ImageSize,
        found: ImageSize,
    },

    #[error("mask encode failure: {0}")]
    Encode(#[from] image::ImageError),
}
