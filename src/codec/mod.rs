//! Per-format pixel packing.
//!
//! Channel expansion uses the hardware's integer formulas (`v * 33 / 4` for
//! 5-bit fields, `v * 65 / 16` for 6-bit, `v * 17` for nibbles) and packing
//! truncates (`c / 8`, `c / 4`, `c / 16`). Both are exact inverses at the
//! format's native precision and must not be swapped for rounded variants.

pub(crate) mod block;
pub(crate) mod cursor;

use alloc::vec::Vec;

use crate::Color;
use crate::error::TextureError;
use crate::pixel::Format;
use block::{BlockCodec, BundleReader, BundleWriter};
use cursor::{BitReader, BitWriter};

#[inline]
fn expand5(v: u16) -> u8 {
    (v * 33 / 4) as u8
}

#[inline]
fn expand6(v: u16) -> u8 {
    (v * 65 / 16) as u8
}

#[inline]
fn gray(v: u8, a: u8) -> Color {
    Color::new(v, v, v, a)
}

/// How a format lays out its pixels: one at a time, or in 4x4 block
/// bundles handled by `B`.
enum Packing<B> {
    Pixels(Format),
    Blocks(B),
}

impl<B> Packing<B> {
    /// Pick the packing for `format`, failing before any I/O when a block
    /// format has no codec.
    fn new<'c>(
        format: Format,
        codec: Option<&'c dyn BlockCodec>,
        bundles: impl FnOnce(&'c dyn BlockCodec, bool) -> B,
    ) -> Result<Self, TextureError> {
        if !format.is_block_compressed() {
            return Ok(Packing::Pixels(format));
        }
        let codec = codec.ok_or(TextureError::BlockCodecRequired(format))?;
        Ok(Packing::Blocks(bundles(codec, format == Format::Etc1A4)))
    }
}

fn read_pixel(r: &mut BitReader<'_>, format: Format) -> Option<Color> {
    let color = match format {
        Format::L8 => gray(r.read_u8()?, 255),
        Format::A8 => Color::new(255, 255, 255, r.read_u8()?),
        Format::La44 => {
            let a = r.read_nibble()? * 17;
            let l = r.read_nibble()? * 17;
            gray(l, a)
        }
        Format::La88 => {
            let a = r.read_u8()?;
            let l = r.read_u8()?;
            gray(l, a)
        }
        Format::Hl88 => {
            let g = r.read_u8()?;
            let red = r.read_u8()?;
            Color::new(red, g, 255, 255)
        }
        Format::Rgb565 => {
            let s = r.read_u16_le()?;
            Color::new(
                expand5(s >> 11),
                expand6((s >> 5) & 0x3F),
                expand5(s & 0x1F),
                255,
            )
        }
        Format::Rgb888 => {
            let b = r.read_u8()?;
            let g = r.read_u8()?;
            let red = r.read_u8()?;
            Color::new(red, g, b, 255)
        }
        Format::Rgba5551 => {
            let s = r.read_u16_le()?;
            Color::new(
                expand5((s >> 11) & 0x1F),
                expand5((s >> 6) & 0x1F),
                expand5((s >> 1) & 0x1F),
                (s & 1) as u8 * 255,
            )
        }
        Format::Rgba4444 => {
            let a = r.read_nibble()? * 17;
            let b = r.read_nibble()? * 17;
            let g = r.read_nibble()? * 17;
            let red = r.read_nibble()? * 17;
            Color::new(red, g, b, a)
        }
        Format::Rgba8888 => {
            let a = r.read_u8()?;
            let b = r.read_u8()?;
            let g = r.read_u8()?;
            let red = r.read_u8()?;
            Color::new(red, g, b, a)
        }
        Format::L4 => gray(r.read_nibble()? * 17, 255),
        Format::A4 => Color::new(255, 255, 255, r.read_nibble()? * 17),
        Format::Etc1 | Format::Etc1A4 => unreachable!("{format} is read in block bundles"),
    };
    Some(color)
}

fn write_pixel(w: &mut BitWriter, format: Format, c: Color) {
    match format {
        Format::L8 => w.write_u8(c.g),
        Format::A8 => w.write_u8(c.a),
        Format::La44 => {
            w.write_nibble(c.a / 16);
            w.write_nibble(c.g / 16);
        }
        Format::La88 => {
            w.write_u8(c.a);
            w.write_u8(c.g);
        }
        Format::Hl88 => {
            w.write_u8(c.g);
            w.write_u8(c.r);
        }
        Format::Rgb565 => w.write_u16_le(
            (u16::from(c.r / 8) << 11) | (u16::from(c.g / 4) << 5) | u16::from(c.b / 8),
        ),
        Format::Rgb888 => {
            w.write_u8(c.b);
            w.write_u8(c.g);
            w.write_u8(c.r);
        }
        Format::Rgba5551 => w.write_u16_le(
            (u16::from(c.r / 8) << 11)
                | (u16::from(c.g / 8) << 6)
                | (u16::from(c.b / 8) << 1)
                | u16::from(c.a / 128),
        ),
        Format::Rgba4444 => {
            w.write_nibble(c.a / 16);
            w.write_nibble(c.b / 16);
            w.write_nibble(c.g / 16);
            w.write_nibble(c.r / 16);
        }
        Format::Rgba8888 => {
            w.write_u8(c.a);
            w.write_u8(c.b);
            w.write_u8(c.g);
            w.write_u8(c.r);
        }
        Format::L4 => w.write_nibble(c.g / 16),
        Format::A4 => w.write_nibble(c.a / 16),
        Format::Etc1 | Format::Etc1A4 => unreachable!("{format} is written in block bundles"),
    }
}

/// Decodes colors from texture bytes until the input runs out.
pub(crate) struct ColorStream<'a> {
    reader: BitReader<'a>,
    packing: Packing<BundleReader<'a>>,
}

impl<'a> ColorStream<'a> {
    pub(crate) fn new(
        data: &'a [u8],
        format: Format,
        codec: Option<&'a dyn BlockCodec>,
    ) -> Result<Self, TextureError> {
        Ok(Self {
            reader: BitReader::new(data),
            packing: Packing::new(format, codec, BundleReader::new)?,
        })
    }

    pub(crate) fn bytes_consumed(&self) -> usize {
        self.reader.bytes_consumed()
    }
}

impl Iterator for ColorStream<'_> {
    type Item = Color;

    fn next(&mut self) -> Option<Color> {
        match &mut self.packing {
            Packing::Pixels(format) => read_pixel(&mut self.reader, *format),
            Packing::Blocks(bundles) => bundles.next_color(&mut self.reader),
        }
    }
}

/// Packs colors into texture bytes.
pub(crate) struct ColorSink<'a> {
    writer: BitWriter,
    packing: Packing<BundleWriter<'a>>,
}

impl<'a> ColorSink<'a> {
    pub(crate) fn new(
        format: Format,
        codec: Option<&'a dyn BlockCodec>,
        capacity: usize,
    ) -> Result<Self, TextureError> {
        Ok(Self {
            writer: BitWriter::with_capacity(capacity),
            packing: Packing::new(format, codec, BundleWriter::new)?,
        })
    }

    pub(crate) fn push(&mut self, c: Color) {
        match &mut self.packing {
            Packing::Pixels(format) => write_pixel(&mut self.writer, *format, c),
            Packing::Blocks(bundles) => bundles.push(c, &mut self.writer),
        }
    }

    pub(crate) fn finish(mut self) -> Vec<u8> {
        if let Packing::Blocks(bundles) = &mut self.packing {
            bundles.finish(&mut self.writer);
        }
        self.writer.into_bytes()
    }
}
