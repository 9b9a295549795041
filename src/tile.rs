//! 8x8 tile addressing.
//!
//! The GPU stores textures as a grid of 8x8 tiles. Tiles are laid out
//! row-major across a stride that is a multiple of 8 (and optionally a power
//! of two); pixels inside a tile follow a bit-interleaved (Morton) order.
//! [`TileCoords`] turns a linear stream position into the pixel coordinate
//! stored at that position.

use core::iter::FusedIterator;

use crate::error::TextureError;

/// Tile edge length in pixels.
pub const TILE_SIZE: u32 = 8;
const TILE_PIXELS: usize = 64;

/// How the tile grid maps onto the image.
///
/// Discriminants are the ids used by texture headers. `Default` and
/// `TransposeTile` address tiles across the width-derived stride, the other
/// two across the height-derived stride.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Orientation {
    #[default]
    Default = 0,
    /// Swap x and y inside each tile only.
    TransposeTile = 1,
    /// Rotate the image by 90 degrees.
    Rotate90 = 4,
    /// Swap x and y across the whole image.
    Transpose = 8,
}

impl Orientation {
    pub const fn id(self) -> u8 {
        self as u8
    }

    const fn uses_height_stride(self) -> bool {
        (self as u8) >= 4
    }
}

impl TryFrom<u8> for Orientation {
    type Error = TextureError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            0 => Ok(Self::Default),
            1 => Ok(Self::TransposeTile),
            4 => Ok(Self::Rotate90),
            8 => Ok(Self::Transpose),
            _ => Err(TextureError::UnsupportedOrientation(id)),
        }
    }
}

/// Round a dimension up to whole tiles, then optionally to a power of two.
fn padded_stride(dim: u32, pad_to_power_of_2: bool) -> Option<u32> {
    let tiled = dim.checked_next_multiple_of(TILE_SIZE)?;
    if pad_to_power_of_2 {
        tiled.checked_next_power_of_two()
    } else {
        Some(tiled)
    }
}

/// Padded canvas geometry for one texture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileLayout {
    stride_width: u32,
    stride_height: u32,
    stride: u32,
    orientation: Orientation,
    pixel_count: usize,
}

impl TileLayout {
    pub fn new(
        width: u32,
        height: u32,
        orientation: Orientation,
        pad_to_power_of_2: bool,
    ) -> Result<Self, TextureError> {
        if width == 0 || height == 0 {
            return Err(TextureError::InvalidDimensions { width, height });
        }
        let too_large = TextureError::DimensionsTooLarge { width, height };
        let (Some(stride_width), Some(stride_height)) = (
            padded_stride(width, pad_to_power_of_2),
            padded_stride(height, pad_to_power_of_2),
        ) else {
            return Err(too_large);
        };
        let pixel_count = (stride_width as usize)
            .checked_mul(stride_height as usize)
            .ok_or(too_large)?;
        let stride = if orientation.uses_height_stride() {
            stride_height
        } else {
            stride_width
        };
        Ok(Self {
            stride_width,
            stride_height,
            stride,
            orientation,
            pixel_count,
        })
    }

    /// Width rounded up to whole tiles (and to a power of two when padding).
    pub fn stride_width(&self) -> u32 {
        self.stride_width
    }

    pub fn stride_height(&self) -> u32 {
        self.stride_height
    }

    /// Tile-row width in pixels used for addressing.
    pub fn stride(&self) -> u32 {
        self.stride
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Number of pixels stored, padding included.
    pub fn pixel_count(&self) -> usize {
        self.pixel_count
    }

    /// Coordinates in storage order. Each call starts from the beginning.
    pub fn coords(&self) -> TileCoords {
        TileCoords {
            index: 0,
            len: self.pixel_count,
            stride: self.stride as usize,
            tiles_per_row: (self.stride / TILE_SIZE) as usize,
            orientation: self.orientation,
        }
    }
}

/// Iterator over `(x, y)` in storage order. See [`TileLayout::coords`].
#[derive(Clone, Debug)]
pub struct TileCoords {
    index: usize,
    len: usize,
    stride: usize,
    tiles_per_row: usize,
    orientation: Orientation,
}

impl TileCoords {
    fn coord_at(&self, i: usize) -> (u32, u32) {
        let tile = i / TILE_PIXELS;
        let x_out = (tile % self.tiles_per_row) * 8;
        let y_out = (tile / self.tiles_per_row) * 8;
        let x_in = ((i >> 2) & 4) | ((i >> 1) & 2) | (i & 1);
        let y_in = ((i >> 3) & 4) | ((i >> 2) & 2) | ((i >> 1) & 1);

        let (x, y) = match self.orientation {
            Orientation::Default => (x_out + x_in, y_out + y_in),
            Orientation::TransposeTile => (x_out + y_in, y_out + x_in),
            Orientation::Rotate90 => (y_out + y_in, self.stride - 1 - (x_out + x_in)),
            Orientation::Transpose => (y_out + y_in, x_out + x_in),
        };
        // Both axes are bounded by a u32 stride.
        (x as u32, y as u32)
    }
}

impl Iterator for TileCoords {
    type Item = (u32, u32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.len {
            return None;
        }
        let coord = self.coord_at(self.index);
        self.index += 1;
        Some(coord)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.index;
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.index = self.index.saturating_add(n).min(self.len);
        self.next()
    }
}

impl ExactSizeIterator for TileCoords {}
impl FusedIterator for TileCoords {}
