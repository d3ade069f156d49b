#![no_main]

use libfuzzer_sys::fuzz_target;
use tickpack::simple8b;

fuzz_target!(|data: &[u8]| {
    // Bytes are interpreted as u64 values, masked below the 60-bit
    // packing ceiling.
    let mut values = Vec::with_capacity(data.len() / 8);
    for chunk in data.chunks_exact(8) {
        let v = u64::from_le_bytes(chunk.try_into().unwrap());
        values.push(v & simple8b::MAX_VALUE);
    }

    let mut enc = simple8b::Encoder::new();
    for &v in &values {
        enc.write(v).unwrap();
    }
    let bytes = enc.bytes().unwrap().to_vec();

    // Property 1: the stream frames into whole words
    assert_eq!(bytes.len() % 8, 0, "partial word in output");

    // Property 2: count_bytes sees every encoded value
    assert_eq!(
        simple8b::count_bytes(&bytes).unwrap(),
        values.len(),
        "count mismatch"
    );

    // Property 3: decode inverts encode
    let mut dec = simple8b::Decoder::new(&bytes);
    let mut out = Vec::with_capacity(values.len());
    while dec.next() {
        out.push(dec.read());
    }
    assert_eq!(out, values, "round trip mismatch");
});
