//! エラー型

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NewtonError {
    #[error("invalid region: {0}")]
    InvalidRegion(String),

    #[error("iteration cap must be greater than zero")]
    InvalidIterations,

    #[error("pixel ({x}, {y}) is outside of {width}x{height}")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[error("failed to write output: {0}")]
    OutputIo(#[from] std::io::Error),

    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, NewtonError>;
