#![no_main]

use libfuzzer_sys::fuzz_target;
use tickpack::timestamp;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must never panic the decoder; oversized RLE
    // counts are rejected before allocation.
    if let Ok(mut dec) = timestamp::Decoder::new(data) {
        let mut n = 0usize;
        while dec.next() {
            let _ = dec.read();
            n += 1;
        }

        // A frame that decodes also reports a matching cardinality.
        assert_eq!(timestamp::count(data).unwrap(), n, "count mismatch");
    }
});
