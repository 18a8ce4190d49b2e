//! tracectx - CLI untuk encode/decode trace context binary
//!
//! Usage:
//!   tracectx encode <TRACE_ID_HEX32> <SPAN_ID_HEX16> [OPTIONS]
//!   tracectx decode <HEX>
//!   tracectx bench [--iterations N]

use std::hint::black_box;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use tracectx::{TraceContext, TraceOptions, TOTAL_LEN};

const DEFAULT_ITERATIONS: usize = 1_000_000;

/// Perintah yang dijalankan
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Encode {
        trace_id: String,
        span_id: String,
        options: String,
    },
    Decode {
        hex: String,
    },
    Bench,
    Help,
}

/// CLI configuration
#[derive(Debug)]
struct CliConfig {
    command: Command,
    iterations: usize,
    verbose: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            command: Command::Help,
            iterations: DEFAULT_ITERATIONS,
            verbose: false,
        }
    }
}

fn print_help() {
    println!("tracectx - Binary Trace Context Codec\n");
    println!("Usage:");
    println!("  tracectx encode <TRACE_ID_HEX32> <SPAN_ID_HEX16> [OPTIONS]");
    println!("  tracectx decode <HEX>");
    println!("  tracectx bench [--iterations N]\n");
    println!("Options:");
    println!("  -n, --iterations <N>  Bench iterations (default: {})", DEFAULT_ITERATIONS);
    println!("  -v, --verbose         Debug logging (override dengan RUST_LOG)");
    println!("  -h, --help            Show this help");
}

fn parse_args(args: &[String]) -> Result<CliConfig> {
    let mut config = CliConfig::default();
    let mut positional: Vec<String> = Vec::new();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--iterations" | "-n" => {
                let value = args.get(i + 1).context("--iterations butuh nilai")?;
                config.iterations = value
                    .parse()
                    .with_context(|| format!("iterations tidak valid: {value}"))?;
                i += 1;
            }
            "--verbose" | "-v" => {
                config.verbose = true;
            }
            "--help" | "-h" => {
                config.command = Command::Help;
                return Ok(config);
            }
            other => positional.push(other.to_string()),
        }
        i += 1;
    }

    let mut positional = positional.into_iter();
    config.command = match positional.next().as_deref() {
        Some("encode") => {
            let trace_id = positional.next().context("encode butuh TRACE_ID")?;
            let span_id = positional.next().context("encode butuh SPAN_ID")?;
            let options = positional.next().unwrap_or_else(|| "0".to_string());
            Command::Encode {
                trace_id,
                span_id,
                options,
            }
        }
        Some("decode") => Command::Decode {
            hex: positional.next().context("decode butuh HEX")?,
        },
        Some("bench") => Command::Bench,
        Some(other) => bail!("perintah tidak dikenal: {other}"),
        None => Command::Help,
    };

    if let Some(extra) = positional.next() {
        bail!("argumen berlebih: {extra}");
    }

    Ok(config)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Parse hex big-endian menjadi array byte dengan panjang tetap
fn parse_hex_fixed<const N: usize>(field: &str, input: &str) -> Result<[u8; N]> {
    let input = input.trim_start_matches("0x");
    let bytes = hex::decode(input).with_context(|| format!("{field} bukan hex: {input}"))?;
    let Ok(bytes) = <[u8; N]>::try_from(bytes.as_slice()) else {
        bail!("{field} harus {} karakter hex, dapat {}", N * 2, input.len());
    };
    Ok(bytes)
}

fn parse_trace_id(input: &str) -> Result<[u64; 2]> {
    let bytes = parse_hex_fixed::<16>("trace id", input)?;
    let mut hi = [0u8; 8];
    let mut lo = [0u8; 8];
    hi.copy_from_slice(&bytes[..8]);
    lo.copy_from_slice(&bytes[8..]);
    Ok([u64::from_be_bytes(hi), u64::from_be_bytes(lo)])
}

fn parse_span_id(input: &str) -> Result<u64> {
    let bytes = parse_hex_fixed::<8>("span id", input)?;
    Ok(u64::from_be_bytes(bytes))
}

fn parse_options(input: &str) -> Result<TraceOptions> {
    let bits = match input.strip_prefix("0x") {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => input.parse::<u8>(),
    }
    .with_context(|| format!("options harus 0..=255: {input}"))?;
    Ok(TraceOptions::new(bits))
}

fn run_encode(trace_id: &str, span_id: &str, options: &str) -> Result<()> {
    let ctx = TraceContext::new(
        parse_trace_id(trace_id)?,
        parse_span_id(span_id)?,
        parse_options(options)?,
    );
    debug!(%ctx, sampled = ctx.is_sampled(), "encoding trace context");

    let mut buf = [0u8; TOTAL_LEN];
    let n = ctx.encode_into(&mut buf)?;
    println!("{}", hex::encode(&buf[..n]));
    Ok(())
}

fn run_decode(input: &str) -> Result<()> {
    let input = input.trim_start_matches("0x");
    let bytes = hex::decode(input).context("input bukan hex")?;
    if bytes.len() > TOTAL_LEN {
        warn!(
            len = bytes.len(),
            ignored = bytes.len() - TOTAL_LEN,
            "trailing bytes diabaikan"
        );
    }

    let ctx = TraceContext::decode(&bytes).context("trace context tidak valid")?;
    debug!(len = bytes.len(), "decoded trace context");

    println!("trace_id: {}", ctx.trace_id_hex());
    println!("span_id:  {}", ctx.span_id_hex());
    println!(
        "options:  {:#04x} (sampled={})",
        ctx.options.bits(),
        ctx.is_sampled()
    );
    Ok(())
}

fn run_bench(iterations: usize) -> Result<()> {
    if iterations == 0 {
        bail!("iterations harus > 0");
    }
    info!(iterations, "starting codec benchmark");

    println!("📊 Trace Context Codec Benchmark");
    println!("--------------------------------");

    let mut buf = [0u8; TOTAL_LEN];

    // Benchmark encode
    let start = Instant::now();
    for i in 0..iterations {
        let i = i as u64;
        let _ = tracectx::encode(black_box(&mut buf), [i, !i], i, (i & 1) as u8);
    }
    let encode_duration = start.elapsed();

    // Benchmark decode
    let encoded = black_box(buf);
    let start = Instant::now();
    for _ in 0..iterations {
        let _ = black_box(tracectx::decode(black_box(&encoded)));
    }
    let decode_duration = start.elapsed();

    let encode_ns = encode_duration.as_nanos() as f64 / iterations as f64;
    let decode_ns = decode_duration.as_nanos() as f64 / iterations as f64;

    println!("  Wire size: {} bytes", TOTAL_LEN);
    println!("  Operations: {}", iterations);
    println!("  Encode latency: {:.2} ns/op", encode_ns);
    println!("  Decode latency: {:.2} ns/op", decode_ns);
    println!(
        "  Encode throughput: {:.2} M ops/sec",
        iterations as f64 / encode_duration.as_secs_f64() / 1_000_000.0
    );
    Ok(())
}

fn run(config: CliConfig) -> Result<()> {
    match config.command {
        Command::Encode {
            trace_id,
            span_id,
            options,
        } => run_encode(&trace_id, &span_id, &options),
        Command::Decode { hex } => run_decode(&hex),
        Command::Bench => run_bench(config.iterations),
        Command::Help => {
            print_help();
            Ok(())
        }
    }
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match parse_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e:#}");
            print_help();
            std::process::exit(2);
        }
    };

    init_logging(config.verbose);

    if let Err(e) = run(config) {
        eprintln!("❌ Error: {e:#}");
        std::process::exit(1);
    }
}
