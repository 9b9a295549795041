#![allow(dead_code)]

use picatex::{BlockCodec, Color, ImgVec};

/// Test stand-in for an ETC1 compressor: keeps the top nibble of each
/// pixel's green channel, pixel `j` at bits `4j`, and decodes to gray.
pub struct GrayNibbleCodec;

impl BlockCodec for GrayNibbleCodec {
    fn decode_block(&self, block: u64) -> [Color; 16] {
        core::array::from_fn(|j| {
            let v = ((block >> (4 * j)) & 0x0F) as u8 * 17;
            Color::new(v, v, v, 0)
        })
    }

    fn encode_block(&self, pixels: &[Color; 16]) -> u64 {
        pixels
            .iter()
            .enumerate()
            .fold(0, |acc, (j, c)| acc | (u64::from(c.g / 16) << (4 * j)))
    }
}

/// Deterministic xorshift pixels.
pub fn noise_image(w: usize, h: usize, seed: u32) -> ImgVec<Color> {
    let mut state = seed | 1;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state
    };
    let pixels = (0..w * h)
        .map(|_| {
            let [r, g, b, a] = next().to_le_bytes();
            Color::new(r, g, b, a)
        })
        .collect();
    ImgVec::new(pixels, w, h)
}

/// Each pixel encodes its own position.
pub fn position_image(w: usize, h: usize) -> ImgVec<Color> {
    let pixels = (0..h)
        .flat_map(|y| (0..w).map(move |x| Color::new(x as u8, y as u8, (x ^ y) as u8, 255)))
        .collect();
    ImgVec::new(pixels, w, h)
}

pub fn gray_image(w: usize, h: usize) -> ImgVec<Color> {
    let pixels = (0..w * h)
        .map(|i| {
            let v = (i % 16) as u8 * 17;
            Color::new(v, v, v, 255 - v)
        })
        .collect();
    ImgVec::new(pixels, w, h)
}
