//! # picatex
//!
//! Texture codec for the PICA200 handheld GPU: converts between linear RGBA
//! pixel buffers and the GPU's tiled, packed texture bytes.
//!
//! ## Layout
//!
//! Textures are stored as 8x8 tiles, tiles row-major across a stride that is
//! the image width (or height, for rotated orientations) rounded up to a
//! multiple of 8 and, by default, to a power of two. Inside a tile, pixels
//! follow a bit-interleaved (Morton) order. Saving fills the padding with
//! the nearest edge pixel; loading drops it.
//!
//! ## Supported Formats
//!
//! | Format | Bits/px | Channels |
//! |---|---|---|
//! | RGBA8888 | 32 | A, B, G, R bytes |
//! | RGB888 | 24 | B, G, R bytes |
//! | RGBA5551, RGB565, RGBA4444 | 16 | packed |
//! | LA88, HL88 | 16 | two bytes |
//! | L8, A8, LA44 | 8 | |
//! | L4, A4 | 4 | two pixels per byte |
//! | ETC1, ETC1A4 | 4, 8 | via a caller-supplied [`BlockCodec`] |
//!
//! Conversions to lower bit depths truncate; expansions use the hardware's
//! integer formulas, so a save/load round trip is exact at each format's
//! native precision.
//!
//! ## Non-Goals
//!
//! - ETC1 block compression itself (plug one in through [`BlockCodec`])
//! - Container headers (width, height and format travel out of band)
//!
//! ## Usage
//!
//! ```no_run
//! use picatex::{Format, ImageSettings, Orientation, load, save};
//! use enough::Unstoppable;
//!
//! let data: &[u8] = &[]; // raw texture bytes from a container
//! let settings = ImageSettings::new(100, 60, Format::Rgb565)
//!     .with_orientation(Orientation::Default);
//!
//! let img = load(data, &settings, Unstoppable)?;
//! assert_eq!((img.width(), img.height()), (100, 60));
//!
//! let bytes = save(img.as_ref(), &settings, Unstoppable)?;
//! assert_eq!(bytes.len(), settings.encoded_len()?);
//! # Ok::<(), picatex::TextureError>(())
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod codec;
mod error;
mod limits;
mod pixel;
mod settings;
mod tile;

mod decode;
mod encode;

/// One RGBA pixel, 8 bits per channel.
pub type Color = rgb::RGBA8;

// Re-exports
pub use codec::block::BlockCodec;
pub use decode::{DecodeRequest, load};
pub use encode::{EncodeRequest, save};
pub use enough::{Stop, Unstoppable};
pub use error::TextureError;
pub use imgref::{ImgRef, ImgVec};
pub use limits::Limits;
pub use pixel::Format;
pub use settings::ImageSettings;
pub use tile::{Orientation, TILE_SIZE, TileCoords, TileLayout};
