#![no_main]
use libfuzzer_sys::fuzz_target;
use picatex::*;

// Header: format id, orientation id, width, height, padding flag.
fuzz_target!(|data: &[u8]| {
    let Some((&[format, orientation, w, h, pad], body)) = data.split_first_chunk::<5>() else {
        return;
    };
    let Ok(settings) = ImageSettings::from_raw(u32::from(w), u32::from(h), format, orientation)
    else {
        return;
    };
    let settings = settings.with_padding(pad & 1 == 1);

    // Must never panic, whatever the body holds.
    let _ = load(body, &settings, enough::Unstoppable);
});
