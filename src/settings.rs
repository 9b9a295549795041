use crate::error::TextureError;
use crate::pixel::Format;
use crate::tile::{Orientation, TileLayout};

/// Geometry and encoding of one texture.
///
/// The texture bytes carry no header, so the same settings must be used to
/// save and to load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSettings {
    pub width: u32,
    pub height: u32,
    pub format: Format,
    pub orientation: Orientation,
    /// Round strides up to a power of two after rounding to whole tiles.
    pub pad_to_power_of_2: bool,
}

impl ImageSettings {
    /// Settings with `Default` orientation and power-of-two padding.
    pub fn new(width: u32, height: u32, format: Format) -> Self {
        Self {
            width,
            height,
            format,
            orientation: Orientation::Default,
            pad_to_power_of_2: true,
        }
    }

    /// Build settings from the numeric ids found in texture headers.
    pub fn from_raw(
        width: u32,
        height: u32,
        format: u8,
        orientation: u8,
    ) -> Result<Self, TextureError> {
        let format = Format::try_from(format)?;
        let orientation = Orientation::try_from(orientation)?;
        Ok(Self::new(width, height, format).with_orientation(orientation))
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_padding(mut self, pad_to_power_of_2: bool) -> Self {
        self.pad_to_power_of_2 = pad_to_power_of_2;
        self
    }

    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Padded tile canvas for these settings.
    pub fn layout(&self) -> Result<TileLayout, TextureError> {
        TileLayout::new(
            self.width,
            self.height,
            self.orientation,
            self.pad_to_power_of_2,
        )
    }

    /// Exact byte length of the encoded texture.
    pub fn encoded_len(&self) -> Result<usize, TextureError> {
        let pixels = self.layout()?.pixel_count();
        // Pixel counts are multiples of 64, so the division is exact.
        pixels
            .checked_mul(self.format.bits_per_pixel() as usize)
            .map(|bits| bits / 8)
            .ok_or(TextureError::DimensionsTooLarge {
                width: self.width,
                height: self.height,
            })
    }
}
