#![no_main]

use libfuzzer_sys::fuzz_target;
use tickpack::timestamp;

fuzz_target!(|data: &[u8]| {
    // Bytes are interpreted as u32 nanosecond deltas from a fixed base,
    // keeping the series inside the packable range.
    let mut ts = Vec::with_capacity(data.len() / 4);
    let mut t = 1_695_000_000_000_000_000_i64;
    for chunk in data.chunks_exact(4) {
        let delta = u32::from_le_bytes(chunk.try_into().unwrap());
        t += i64::from(delta);
        ts.push(t);
    }

    let mut enc = timestamp::Encoder::new();
    for &v in &ts {
        enc.write(v);
    }
    let bytes = enc.bytes().unwrap();

    // Property 1: frame cardinality agrees with the input
    assert_eq!(timestamp::count(&bytes).unwrap(), ts.len(), "count mismatch");

    // Property 2: decode inverts encode
    let mut dec = timestamp::Decoder::new(&bytes).unwrap();
    let mut out = Vec::with_capacity(ts.len());
    while dec.next() {
        out.push(dec.read());
    }
    assert_eq!(out, ts, "round trip mismatch");
});
