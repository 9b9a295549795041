//! Glue between the pixel stream and an external ETC1 block codec.
//!
//! A block covers a 4x4 pixel area, which is exactly one quarter of the
//! Morton order inside an 8x8 tile: the 16 consecutive stream pixels of a
//! bundle land in one 4x4 square. The codec itself sees pixels in its own
//! column-major order, so bundles are reordered on the way in and out.

use crate::Color;
use crate::codec::cursor::{BitReader, BitWriter};

/// A 4x4 block compressor for 64-bit ETC1 blocks.
///
/// Pixel arrays are indexed `x * 4 + y` (column-major), the order used by
/// the ETC1 pixel index bits. Block words are the little-endian `u64` the
/// GPU reads. The alpha channel is ignored on encode and may hold anything
/// on decode; alpha is carried separately.
pub trait BlockCodec {
    fn decode_block(&self, block: u64) -> [Color; 16];

    fn encode_block(&self, pixels: &[Color; 16]) -> u64;
}

/// Codec index (`x * 4 + y`) of each stream pixel within a bundle.
const STREAM_TO_BLOCK: [usize; 16] = [0, 4, 1, 5, 8, 12, 9, 13, 2, 6, 3, 7, 10, 14, 11, 15];

/// Read one bundle: the optional alpha table, then the color block.
/// Returns colors in stream order.
pub(crate) fn decode_bundle(
    reader: &mut BitReader<'_>,
    has_alpha: bool,
    codec: &dyn BlockCodec,
) -> Option<[Color; 16]> {
    let alpha = if has_alpha {
        Some(reader.read_u64_le()?)
    } else {
        None
    };
    let block = reader.read_u64_le()?;
    let decoded = codec.decode_block(block);

    let mut out = [Color::default(); 16];
    for (slot, &j) in out.iter_mut().zip(&STREAM_TO_BLOCK) {
        let mut color = decoded[j];
        color.a = match alpha {
            Some(table) => ((table >> (4 * j)) & 0x0F) as u8 * 17,
            None => 255,
        };
        *slot = color;
    }
    Some(out)
}

/// Write one bundle given colors in stream order.
pub(crate) fn encode_bundle(
    pixels: &[Color; 16],
    has_alpha: bool,
    codec: &dyn BlockCodec,
    writer: &mut BitWriter,
) {
    let mut block = [Color::default(); 16];
    let mut table = 0u64;
    for (&color, &j) in pixels.iter().zip(&STREAM_TO_BLOCK) {
        block[j] = color;
        table |= u64::from(color.a / 16) << (4 * j);
    }
    if has_alpha {
        writer.write_u64_le(table);
    }
    writer.write_u64_le(codec.encode_block(&block));
}

/// Hands out decoded bundle pixels one at a time.
pub(crate) struct BundleReader<'c> {
    codec: &'c dyn BlockCodec,
    has_alpha: bool,
    buf: [Color; 16],
    next: usize,
}

impl<'c> BundleReader<'c> {
    pub(crate) fn new(codec: &'c dyn BlockCodec, has_alpha: bool) -> Self {
        Self {
            codec,
            has_alpha,
            buf: [Color::default(); 16],
            next: 16,
        }
    }

    pub(crate) fn next_color(&mut self, reader: &mut BitReader<'_>) -> Option<Color> {
        if self.next == 16 {
            self.buf = decode_bundle(reader, self.has_alpha, self.codec)?;
            self.next = 0;
        }
        let color = self.buf[self.next];
        self.next += 1;
        Some(color)
    }
}

/// Collects pixels until a full bundle can be compressed.
pub(crate) struct BundleWriter<'c> {
    codec: &'c dyn BlockCodec,
    has_alpha: bool,
    buf: [Color; 16],
    len: usize,
}

impl<'c> BundleWriter<'c> {
    pub(crate) fn new(codec: &'c dyn BlockCodec, has_alpha: bool) -> Self {
        Self {
            codec,
            has_alpha,
            buf: [Color::default(); 16],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, color: Color, writer: &mut BitWriter) {
        self.buf[self.len] = color;
        self.len += 1;
        if self.len == 16 {
            encode_bundle(&self.buf, self.has_alpha, self.codec, writer);
            self.len = 0;
        }
    }

    /// Emit a partial bundle, repeating its last pixel. Tile-aligned
    /// streams never leave one.
    pub(crate) fn finish(&mut self, writer: &mut BitWriter) {
        if self.len == 0 {
            return;
        }
        let last = self.buf[self.len - 1];
        self.buf[self.len..].fill(last);
        encode_bundle(&self.buf, self.has_alpha, self.codec, writer);
        self.len = 0;
    }
}
