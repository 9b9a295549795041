mod common;

use common::{GrayNibbleCodec, gray_image, noise_image, position_image};
use picatex::*;

fn encode(img: ImgRef<'_, Color>, settings: &ImageSettings) -> Vec<u8> {
    EncodeRequest::new(settings)
        .with_block_codec(&GrayNibbleCodec)
        .encode(img, Unstoppable)
        .unwrap()
}

fn decode(data: &[u8], settings: &ImageSettings) -> ImgVec<Color> {
    DecodeRequest::new(data, settings)
        .with_block_codec(&GrayNibbleCodec)
        .decode(Unstoppable)
        .unwrap()
}

const ORIENTATIONS: [Orientation; 4] = [
    Orientation::Default,
    Orientation::TransposeTile,
    Orientation::Rotate90,
    Orientation::Transpose,
];

// ── Lossless formats ─────────────────────────────────────────────────

#[test]
fn rgba8888_roundtrip_non_power_of_two() {
    let img = noise_image(13, 7, 0xDEAD_BEEF);
    let settings = ImageSettings::new(13, 7, Format::Rgba8888);

    let bytes = save(img.as_ref(), &settings, Unstoppable).unwrap();
    assert_eq!(bytes.len(), 16 * 8 * 4);
    assert_eq!(bytes.len(), settings.encoded_len().unwrap());

    let decoded = load(&bytes, &settings, Unstoppable).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (13, 7));
    assert_eq!(decoded.buf(), img.buf());
}

#[test]
fn rgba8888_roundtrip_every_orientation() {
    let img = noise_image(21, 10, 7);
    for orientation in ORIENTATIONS {
        for pad in [true, false] {
            let settings = ImageSettings::new(21, 10, Format::Rgba8888)
                .with_orientation(orientation)
                .with_padding(pad);
            let bytes = save(img.as_ref(), &settings, Unstoppable).unwrap();
            let decoded = load(&bytes, &settings, Unstoppable).unwrap();
            assert_eq!(decoded.buf(), img.buf(), "{orientation:?} pad={pad}");
        }
    }
}

#[test]
fn rgb888_drops_alpha_only() {
    let img = noise_image(9, 17, 42);
    let settings = ImageSettings::new(9, 17, Format::Rgb888);
    let bytes = save(img.as_ref(), &settings, Unstoppable).unwrap();
    assert_eq!(bytes.len(), 16 * 32 * 3);

    let decoded = load(&bytes, &settings, Unstoppable).unwrap();
    for (a, b) in img.pixels().zip(decoded.pixels()) {
        assert_eq!((a.r, a.g, a.b, 255), (b.r, b.g, b.b, b.a));
    }
}

// ── Lossy formats ────────────────────────────────────────────────────

#[test]
fn rgb565_error_is_bounded() {
    let img = noise_image(30, 12, 99);
    let settings = ImageSettings::new(30, 12, Format::Rgb565);
    let bytes = save(img.as_ref(), &settings, Unstoppable).unwrap();
    let decoded = load(&bytes, &settings, Unstoppable).unwrap();
    for (a, b) in img.pixels().zip(decoded.pixels()) {
        assert!(a.r.abs_diff(b.r) <= 7, "{a:?} vs {b:?}");
        assert!(a.g.abs_diff(b.g) <= 3, "{a:?} vs {b:?}");
        assert!(a.b.abs_diff(b.b) <= 7, "{a:?} vs {b:?}");
        assert_eq!(b.a, 255);
    }
}

#[test]
fn all_formats_stable_after_first_quantization() {
    let img = noise_image(19, 11, 0x1234_5678);
    for format in Format::ALL {
        for orientation in ORIENTATIONS {
            let settings = ImageSettings::new(19, 11, format).with_orientation(orientation);
            let first = encode(img.as_ref(), &settings);
            assert_eq!(first.len(), settings.encoded_len().unwrap(), "{format}");

            let quantized = decode(&first, &settings);
            let second = encode(quantized.as_ref(), &settings);
            assert_eq!(first, second, "{format} {orientation:?}");
            assert_eq!(decode(&second, &settings).buf(), quantized.buf());
        }
    }
}

// ── Known bit patterns ───────────────────────────────────────────────

#[test]
fn rgb565_full_red_loads_as_255() {
    let settings = ImageSettings::new(1, 1, Format::Rgb565);
    let data: Vec<u8> = [0x00, 0xF8].repeat(64);
    let img = load(&data, &settings, Unstoppable).unwrap();
    assert_eq!(img.buf()[0], Color::new(255, 0, 0, 255));
}

#[test]
fn la44_high_nibble_is_alpha() {
    let settings = ImageSettings::new(1, 1, Format::La44);
    let img = load(&[0xF0; 64], &settings, Unstoppable).unwrap();
    assert_eq!(img.buf()[0], Color::new(0, 0, 0, 255));
}

// ── Padding ──────────────────────────────────────────────────────────

#[test]
fn padding_replicates_edge_on_save() {
    let img = position_image(5, 5);
    let small = ImageSettings::new(5, 5, Format::Rgba8888);
    let bytes = save(img.as_ref(), &small, Unstoppable).unwrap();
    assert_eq!(bytes.len(), 64 * 4);

    // Same bytes viewed as the full 8x8 canvas expose the padding.
    let full = load(&bytes, &ImageSettings::new(8, 8, Format::Rgba8888), Unstoppable).unwrap();
    assert_eq!(full[(7usize, 2usize)], img[(4usize, 2usize)]);
    assert_eq!(full[(2usize, 6usize)], img[(2usize, 4usize)]);
    assert_eq!(full[(7usize, 7usize)], img[(4usize, 4usize)]);
    assert_eq!(full[(3usize, 3usize)], img[(3usize, 3usize)]);
}

#[test]
fn padding_is_dropped_on_load() {
    let img = position_image(8, 8);
    let bytes = save(
        img.as_ref(),
        &ImageSettings::new(8, 8, Format::Rgba8888),
        Unstoppable,
    )
    .unwrap();
    let cropped = load(&bytes, &ImageSettings::new(5, 5, Format::Rgba8888), Unstoppable).unwrap();
    for y in 0..5usize {
        for x in 0..5usize {
            assert_eq!(cropped[(x, y)], img[(x, y)]);
        }
    }
}

#[test]
fn exact_power_of_two_sizes_need_no_extra_padding() {
    for (w, h, stride_w, stride_h) in [(8, 8, 8, 8), (16, 8, 16, 8), (9, 9, 16, 16), (64, 40, 64, 64)] {
        let settings = ImageSettings::new(w, h, Format::A8);
        assert_eq!(
            settings.encoded_len().unwrap(),
            (stride_w * stride_h) as usize,
            "{w}x{h}"
        );
    }
}

#[test]
fn unpadded_strides_only_round_to_tiles() {
    let settings = ImageSettings::new(24, 12, Format::L8).with_padding(false);
    assert_eq!(settings.encoded_len().unwrap(), 24 * 16);
    let img = noise_image(24, 12, 3);
    let bytes = save(img.as_ref(), &settings, Unstoppable).unwrap();
    assert_eq!(bytes.len(), 24 * 16);
}

// ── Orientation ──────────────────────────────────────────────────────

#[test]
fn transpose_matches_default_of_transposed_image() {
    let img = noise_image(12, 20, 5);
    let transposed: Vec<Color> = (0..12usize)
        .flat_map(|x| (0..20usize).map(move |y| (x, y)))
        .map(|(x, y)| img[(x, y)])
        .collect();
    let transposed = ImgVec::new(transposed, 20, 12);

    let a = save(
        img.as_ref(),
        &ImageSettings::new(12, 20, Format::Rgba8888).with_orientation(Orientation::Transpose),
        Unstoppable,
    )
    .unwrap();
    let b = save(
        transposed.as_ref(),
        &ImageSettings::new(20, 12, Format::Rgba8888),
        Unstoppable,
    )
    .unwrap();
    assert_eq!(a, b);
}

#[test]
fn strided_subimage_is_sampled_correctly() {
    let big = position_image(16, 16);
    let sub = big.sub_image(3, 2, 10, 9);
    let settings = ImageSettings::new(10, 9, Format::Rgba8888);
    let bytes = save(sub, &settings, Unstoppable).unwrap();
    let decoded = load(&bytes, &settings, Unstoppable).unwrap();
    for y in 0..9usize {
        for x in 0..10usize {
            assert_eq!(decoded[(x, y)], big[(x + 3, y + 2)]);
        }
    }
}

// ── Block formats ────────────────────────────────────────────────────

#[test]
fn etc1a4_roundtrip_with_alpha() {
    let img = gray_image(12, 12);
    let settings = ImageSettings::new(12, 12, Format::Etc1A4);
    let bytes = encode(img.as_ref(), &settings);
    assert_eq!(bytes.len(), 16 * 16);
    assert_eq!(decode(&bytes, &settings).buf(), img.buf());
}

#[test]
fn etc1_is_opaque() {
    let img = gray_image(8, 8);
    let settings = ImageSettings::new(8, 8, Format::Etc1);
    let bytes = encode(img.as_ref(), &settings);
    assert_eq!(bytes.len(), 32);
    let decoded = decode(&bytes, &settings);
    for (a, b) in img.pixels().zip(decoded.pixels()) {
        assert_eq!(Color::new(a.r, a.g, a.b, 255), b);
    }
}

#[test]
fn block_format_without_codec_fails_up_front() {
    let settings = ImageSettings::new(8, 8, Format::Etc1);
    assert!(matches!(
        load(&[0; 32], &settings, Unstoppable),
        Err(TextureError::BlockCodecRequired(Format::Etc1))
    ));
    let img = gray_image(8, 8);
    assert!(matches!(
        save(img.as_ref(), &settings, Unstoppable),
        Err(TextureError::BlockCodecRequired(Format::Etc1))
    ));
}
