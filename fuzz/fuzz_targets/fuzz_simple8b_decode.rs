#![no_main]

use libfuzzer_sys::fuzz_target;
use tickpack::simple8b;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must never panic the decoder, whatever the
    // framing or selector contents.
    let counted = simple8b::count_bytes(data);

    let mut dec = simple8b::Decoder::new(data);
    let mut n = 0usize;
    while dec.next() {
        let _ = dec.read();
        n += 1;
    }

    // When the framing is whole words, the streaming decoder agrees
    // with the counted total.
    if let Ok(total) = counted {
        assert_eq!(n, total, "streamed {} values, counted {}", n, total);
    }
});
