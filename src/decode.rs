use alloc::vec;

use enough::Stop;
use imgref::ImgVec;

use crate::Color;
use crate::codec::ColorStream;
use crate::codec::block::BlockCodec;
use crate::error::TextureError;
use crate::limits::Limits;
use crate::settings::ImageSettings;

/// Pixels between cancellation checks (64 tiles).
pub(crate) const STOP_INTERVAL: usize = 64 * 64;

/// Builder for turning texture bytes into a pixel buffer.
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    settings: ImageSettings,
    limits: Option<&'a Limits>,
    block_codec: Option<&'a dyn BlockCodec>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8], settings: &ImageSettings) -> Self {
        Self {
            data,
            settings: *settings,
            limits: None,
            block_codec: None,
        }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Codec for [`Format::Etc1`](crate::Format::Etc1) and
    /// [`Format::Etc1A4`](crate::Format::Etc1A4). Ignored by other formats.
    pub fn with_block_codec(mut self, codec: &'a dyn BlockCodec) -> Self {
        self.block_codec = Some(codec);
        self
    }

    /// Decode to a `width` x `height` buffer.
    ///
    /// Padding pixels are dropped. If `data` ends early the remaining pixels
    /// stay transparent black; trailing bytes are ignored.
    pub fn decode(self, stop: impl Stop) -> Result<ImgVec<Color>, TextureError> {
        decode_texture(
            self.data,
            &self.settings,
            self.limits,
            self.block_codec,
            &stop,
        )
    }
}

/// Decode texture bytes with default limits and no block codec.
pub fn load(
    data: &[u8],
    settings: &ImageSettings,
    stop: impl Stop,
) -> Result<ImgVec<Color>, TextureError> {
    DecodeRequest::new(data, settings).decode(stop)
}

fn decode_texture<'a>(
    data: &'a [u8],
    settings: &ImageSettings,
    limits: Option<&Limits>,
    block_codec: Option<&'a dyn BlockCodec>,
    stop: &dyn Stop,
) -> Result<ImgVec<Color>, TextureError> {
    let ImageSettings {
        width,
        height,
        format,
        ..
    } = *settings;
    let layout = settings.layout()?;
    if let Some(limits) = limits {
        limits.check(width, height)?;
    }
    let w = width as usize;
    let h = height as usize;
    let pixel_count = w
        .checked_mul(h)
        .ok_or(TextureError::DimensionsTooLarge { width, height })?;
    if let Some(limits) = limits {
        limits.check_memory(pixel_count.saturating_mul(4))?;
    }
    let mut colors = ColorStream::new(data, format, block_codec)?;
    stop.check()?;

    log::debug!(
        "load {width}x{height} {format} {:?}: stride {}x{}, {} bytes in",
        layout.orientation(),
        layout.stride_width(),
        layout.stride_height(),
        data.len()
    );

    let mut pixels = vec![Color::default(); pixel_count];
    let mut decoded = 0;
    for (i, ((x, y), color)) in layout.coords().zip(colors.by_ref()).enumerate() {
        if i % STOP_INTERVAL == 0 {
            stop.check()?;
        }
        if x < width && y < height {
            pixels[y as usize * w + x as usize] = color;
        }
        decoded = i + 1;
    }

    if decoded < layout.pixel_count() {
        log::warn!(
            "texture data ended after {} of {} pixels ({} bytes)",
            decoded,
            layout.pixel_count(),
            colors.bytes_consumed()
        );
    }

    Ok(ImgVec::new(pixels, w, h))
}
