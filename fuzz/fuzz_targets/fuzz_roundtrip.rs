#![no_main]
use libfuzzer_sys::fuzz_target;
use picatex::*;

fuzz_target!(|data: &[u8]| {
    let Some((&[format, orientation, w, h, pad], body)) = data.split_first_chunk::<5>() else {
        return;
    };
    let Ok(settings) = ImageSettings::from_raw(u32::from(w), u32::from(h), format, orientation)
    else {
        return;
    };
    let settings = settings.with_padding(pad & 1 == 1);

    // Block formats need a codec; the glue is covered by unit tests.
    if settings.format.is_block_compressed() {
        let _ = load(body, &settings, enough::Unstoppable);
        return;
    }

    // After one lossy pass, save/load must be a fixed point.
    let Ok(first) = load(body, &settings, enough::Unstoppable) else {
        return;
    };
    let encoded = save(first.as_ref(), &settings, enough::Unstoppable)
        .expect("decoded image failed to encode");
    assert_eq!(encoded.len(), settings.encoded_len().unwrap());
    let second = load(&encoded, &settings, enough::Unstoppable).expect("re-encoded data failed to decode");
    let reencoded = save(second.as_ref(), &settings, enough::Unstoppable).unwrap();
    assert_eq!(encoded, reencoded, "roundtrip byte mismatch");
});
