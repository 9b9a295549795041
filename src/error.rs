use alloc::string::String;
use enough::StopReason;

use crate::pixel::Format;

/// Errors from texture loading and saving.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TextureError {
    #[error("unsupported pixel format id {0}")]
    UnsupportedFormat(u8),

    #[error("unknown pixel format name {0:?}")]
    UnknownFormatName(String),

    #[error("unsupported orientation id {0}")]
    UnsupportedOrientation(u8),

    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("{0} requires a block codec")]
    BlockCodecRequired(Format),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for TextureError {
    fn from(r: StopReason) -> Self {
        TextureError::Cancelled(r)
    }
}
