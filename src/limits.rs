use crate::error::TextureError;

/// Resource limits for load/save operations.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height), padding excluded.
    pub max_pixels: Option<u64>,
    /// Maximum size of the one allocation a call makes: the pixel buffer
    /// on load, the texture bytes on save.
    pub max_memory_bytes: Option<u64>,
}

fn enforce(limit: Option<u64>, value: u64, what: &str) -> Result<(), TextureError> {
    match limit {
        Some(max) if value > max => Err(TextureError::LimitExceeded(alloc::format!(
            "{what} {value} exceeds limit {max}"
        ))),
        _ => Ok(()),
    }
}

impl Limits {
    /// Check image dimensions.
    pub(crate) fn check(&self, width: u32, height: u32) -> Result<(), TextureError> {
        enforce(self.max_width, u64::from(width), "width")?;
        enforce(self.max_height, u64::from(height), "height")?;
        enforce(
            self.max_pixels,
            u64::from(width) * u64::from(height),
            "pixel count",
        )
    }

    /// Check an allocation size in bytes.
    pub(crate) fn check_memory(&self, bytes: usize) -> Result<(), TextureError> {
        enforce(self.max_memory_bytes, bytes as u64, "allocation of bytes")
    }
}
