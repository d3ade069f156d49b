use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use tickpack::{simple8b, timestamp};

fn bench_simple8b_encode(c: &mut Criterion) {
    let values = vec![15u64; 1024];

    let mut group = c.benchmark_group("simple8b_encode");
    group.throughput(Throughput::Bytes(1024 * 8));
    group.bench_function("1024_values", |b| {
        b.iter(|| {
            let mut enc = simple8b::Encoder::new();
            for &v in black_box(&values) {
                enc.write(v).unwrap();
            }
            black_box(enc.bytes().unwrap().len())
        })
    });
    group.finish();
}

fn bench_simple8b_decode(c: &mut Criterion) {
    let mut enc = simple8b::Encoder::new();
    for _ in 0..1024 {
        enc.write(10).unwrap();
    }
    let bytes = enc.bytes().unwrap().to_vec();

    let mut group = c.benchmark_group("simple8b_decode");
    group.throughput(Throughput::Bytes(1024 * 8));
    group.bench_function("1024_values", |b| {
        b.iter(|| {
            let mut dec = simple8b::Decoder::new(black_box(&bytes));
            let mut total = 0u64;
            while dec.next() {
                total += dec.read();
            }
            black_box(total)
        })
    });
    group.finish();
}

fn bench_timestamp_encode(c: &mut Criterion) {
    let base = 1_695_000_000_000_000_000_i64;

    // Jittered series takes the packed path, the regular one RLE.
    let jittered: Vec<i64> = (0..1000)
        .map(|i| base + i * 1_000_000_000 + (i * 7919) % 1000)
        .collect();
    let regular: Vec<i64> = (0..1000).map(|i| base + i * 1_000_000_000).collect();

    let mut group = c.benchmark_group("timestamp_encode");
    group.throughput(Throughput::Elements(1000));
    for (name, ts) in [("packed", &jittered), ("rle", &regular)] {
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut enc = timestamp::Encoder::new();
                for &t in black_box(ts) {
                    enc.write(t);
                }
                black_box(enc.bytes().unwrap().len())
            })
        });
    }
    group.finish();
}

fn bench_timestamp_decode(c: &mut Criterion) {
    let base = 1_695_000_000_000_000_000_i64;
    let mut enc = timestamp::Encoder::new();
    for i in 0..1000 {
        enc.write(base + i * 1_000_000_000 + (i * 7919) % 1000);
    }
    let bytes = enc.bytes().unwrap();

    let mut group = c.benchmark_group("timestamp_decode");
    group.throughput(Throughput::Elements(1000));
    group.bench_function("1000_timestamps", |b| {
        b.iter(|| {
            let mut dec = timestamp::Decoder::new(black_box(&bytes)).unwrap();
            let mut n = 0usize;
            while dec.next() {
                n += 1;
            }
            black_box(n)
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_simple8b_encode,
    bench_simple8b_decode,
    bench_timestamp_encode,
    bench_timestamp_decode
);
criterion_main!(benches);
