//! Generate sample timestamp series and report tickpack compression.

use clap::Parser;
use rand::Rng;
use std::fs;
use std::path::PathBuf;
use tickpack::timestamp;

#[derive(Parser)]
#[command(name = "tpk-gen")]
#[command(about = "Generate a synthetic timestamp series and report tickpack compression")]
struct Args {
    /// Output file for the encoded frame (omit to only print stats)
    output: Option<PathBuf>,

    /// Number of timestamps to generate
    #[arg(short, long, default_value = "1000")]
    readings: usize,

    /// Nominal spacing between timestamps in nanoseconds (default: 1s)
    #[arg(long, default_value = "1000000000")]
    interval_ns: i64,

    /// Random jitter applied to each timestamp in nanoseconds
    #[arg(long, default_value = "0")]
    jitter_ns: i64,

    /// Insert one large gap mid-series that forces the raw fallback
    #[arg(long)]
    gap: bool,

    /// Starting timestamp in nanoseconds since the Unix epoch
    #[arg(long, default_value = "1695000000000000000")]
    start_ns: i64,
}

fn encoding_name(tag: u8) -> &'static str {
    match tag {
        timestamp::ENCODING_PACKED => "packed",
        timestamp::ENCODING_RLE => "rle",
        timestamp::ENCODING_RAW => "raw",
        _ => "unknown",
    }
}

fn main() {
    let args = Args::parse();
    let mut rng = rand::thread_rng();

    let mut enc = timestamp::Encoder::new();
    let mut t = args.start_ns;
    for i in 0..args.readings {
        let jitter = if args.jitter_ns > 0 {
            rng.gen_range(-args.jitter_ns..=args.jitter_ns)
        } else {
            0
        };
        if args.gap && i == args.readings / 2 {
            t += 1 << 61;
        }
        enc.write(t + jitter);
        t += args.interval_ns;
    }

    let bytes = match enc.bytes() {
        Ok(b) => b,
        Err(e) => {
            eprintln!("encoding failed: {e}");
            std::process::exit(1);
        }
    };

    let raw_size = enc.len() * 8;
    let tag = bytes.first().map_or(0, |b| b >> 4);
    println!("readings:  {}", enc.len());
    println!("encoding:  {}", encoding_name(tag));
    println!("raw:       {} bytes", raw_size);
    println!("encoded:   {} bytes", bytes.len());
    if !bytes.is_empty() {
        println!("ratio:     {:.1}x", raw_size as f64 / bytes.len() as f64);
    }

    if let Some(path) = args.output {
        if let Err(e) = fs::write(&path, &bytes) {
            eprintln!("failed to write {}: {e}", path.display());
            std::process::exit(1);
        }
        println!("wrote {}", path.display());
    }
}
