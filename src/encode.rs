use alloc::vec::Vec;

use enough::Stop;
use imgref::ImgRef;

use crate::Color;
use crate::codec::ColorSink;
use crate::codec::block::BlockCodec;
use crate::decode::STOP_INTERVAL;
use crate::error::TextureError;
use crate::limits::Limits;
use crate::settings::ImageSettings;

/// Builder for turning a pixel buffer into texture bytes.
///
/// The width and height of the settings are replaced by the dimensions of
/// the image being encoded.
pub struct EncodeRequest<'a> {
    settings: ImageSettings,
    limits: Option<&'a Limits>,
    block_codec: Option<&'a dyn BlockCodec>,
}

impl<'a> EncodeRequest<'a> {
    pub fn new(settings: &ImageSettings) -> Self {
        Self {
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

    /// Encode `img`. Padding pixels repeat the nearest edge pixel.
    pub fn encode(self, img: ImgRef<'_, Color>, stop: impl Stop) -> Result<Vec<u8>, TextureError> {
        encode_texture(
            img,
            &self.settings,
            self.limits,
            self.block_codec,
            &stop,
        )
    }
}

/// Encode a pixel buffer with default limits and no block codec.
pub fn save(
    img: ImgRef<'_, Color>,
    settings: &ImageSettings,
    stop: impl Stop,
) -> Result<Vec<u8>, TextureError> {
    EncodeRequest::new(settings).encode(img, stop)
}

/// Narrow buffer dimensions to `u32`. An axis that does not fit is
/// reported as `u32::MAX`; the other keeps its size.
fn image_dimensions(width: usize, height: usize) -> Result<(u32, u32), TextureError> {
    match (u32::try_from(width), u32::try_from(height)) {
        (Ok(width), Ok(height)) => Ok((width, height)),
        (w, h) => Err(TextureError::DimensionsTooLarge {
            width: w.unwrap_or(u32::MAX),
            height: h.unwrap_or(u32::MAX),
        }),
    }
}

fn encode_texture(
    img: ImgRef<'_, Color>,
    settings: &ImageSettings,
    limits: Option<&Limits>,
    block_codec: Option<&dyn BlockCodec>,
    stop: &dyn Stop,
) -> Result<Vec<u8>, TextureError> {
    let (width, height) = image_dimensions(img.width(), img.height())?;
    let settings = settings.with_dimensions(width, height);
    let layout = settings.layout()?;
    if let Some(limits) = limits {
        limits.check(width, height)?;
    }
    let out_len = settings.encoded_len()?;
    if let Some(limits) = limits {
        limits.check_memory(out_len)?;
    }
    let mut sink = ColorSink::new(settings.format, block_codec, out_len)?;
    stop.check()?;

    log::debug!(
        "save {width}x{height} {} {:?}: stride {}x{}, {out_len} bytes out",
        settings.format,
        layout.orientation(),
        layout.stride_width(),
        layout.stride_height()
    );

    let (max_x, max_y) = (width - 1, height - 1);
    let stride = img.stride();
    let buf = img.buf();
    for (i, (x, y)) in layout.coords().enumerate() {
        if i % STOP_INTERVAL == 0 {
            stop.check()?;
        }
        let (x, y) = (x.min(max_x) as usize, y.min(max_y) as usize);
        sink.push(buf[y * stride + x]);
    }

    Ok(sink.finish())
}
