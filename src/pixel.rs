use core::fmt;
use core::str::FromStr;

use crate::error::TextureError;

/// Pixel encoding understood by the GPU texture unit.
///
/// Discriminants are the hardware format ids as they appear in texture
/// headers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Format {
    /// 4 bytes: A, B, G, R.
    Rgba8888 = 0,
    /// 3 bytes: B, G, R.
    Rgb888 = 1,
    /// 16-bit little-endian, R5 G5 B5 A1 from the high bits down.
    Rgba5551 = 2,
    /// 16-bit little-endian, R5 G6 B5 from the high bits down.
    Rgb565 = 3,
    /// 4 nibbles: A, B, G, R.
    Rgba4444 = 4,
    /// 2 bytes: alpha, luminance.
    La88 = 5,
    /// 2 bytes: green (low), red (high). Used for normal maps.
    Hl88 = 6,
    /// 1 byte luminance.
    L8 = 7,
    /// 1 byte alpha.
    A8 = 8,
    /// 2 nibbles: alpha, luminance.
    La44 = 9,
    /// 1 nibble luminance.
    L4 = 10,
    /// 1 nibble alpha.
    A4 = 11,
    /// ETC1 blocks, opaque.
    Etc1 = 12,
    /// ETC1 blocks, each preceded by a 4-bit-per-pixel alpha table.
    Etc1A4 = 13,
}

impl Format {
    pub const ALL: [Format; 14] = [
        Format::Rgba8888,
        Format::Rgb888,
        Format::Rgba5551,
        Format::Rgb565,
        Format::Rgba4444,
        Format::La88,
        Format::Hl88,
        Format::L8,
        Format::A8,
        Format::La44,
        Format::L4,
        Format::A4,
        Format::Etc1,
        Format::Etc1A4,
    ];

    /// Hardware format id.
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Storage cost per pixel. Block formats report the amortized cost
    /// (64 or 128 bits per 16 pixels).
    pub const fn bits_per_pixel(self) -> u32 {
        match self {
            Self::Rgba8888 => 32,
            Self::Rgb888 => 24,
            Self::Rgba5551 | Self::Rgb565 | Self::Rgba4444 | Self::La88 | Self::Hl88 => 16,
            Self::L8 | Self::A8 | Self::La44 | Self::Etc1A4 => 8,
            Self::L4 | Self::A4 | Self::Etc1 => 4,
        }
    }

    /// Whether pixels are stored as 4x4 compressed blocks.
    pub const fn is_block_compressed(self) -> bool {
        matches!(self, Self::Etc1 | Self::Etc1A4)
    }

    /// Whether the encoding stores an alpha channel.
    pub const fn has_alpha(self) -> bool {
        matches!(
            self,
            Self::Rgba8888
                | Self::Rgba5551
                | Self::Rgba4444
                | Self::La88
                | Self::A8
                | Self::La44
                | Self::A4
                | Self::Etc1A4
        )
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Rgba8888 => "RGBA8888",
            Self::Rgb888 => "RGB888",
            Self::Rgba5551 => "RGBA5551",
            Self::Rgb565 => "RGB565",
            Self::Rgba4444 => "RGBA4444",
            Self::La88 => "LA88",
            Self::Hl88 => "HL88",
            Self::L8 => "L8",
            Self::A8 => "A8",
            Self::La44 => "LA44",
            Self::L4 => "L4",
            Self::A4 => "A4",
            Self::Etc1 => "ETC1",
            Self::Etc1A4 => "ETC1A4",
        }
    }
}

impl TryFrom<u8> for Format {
    type Error = TextureError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Format::ALL
            .get(usize::from(id))
            .copied()
            .ok_or(TextureError::UnsupportedFormat(id))
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = TextureError;

    /// Parses canonical names, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .iter()
            .copied()
            .find(|f| f.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| TextureError::UnknownFormatName(s.into()))
    }
}
