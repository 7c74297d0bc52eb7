//! Scaling probe for the full-cube aligner.
//!
//! Run with:
//! `cargo run --example scale_probe -- --format table`
//!
//! Reports wall-clock time and RSS delta across increasing sequence
//! lengths, and verifies small sizes against the recursive oracle. Both
//! time and memory should track the cube volume (product of lengths).

use std::env;
use std::time::Instant;

use sysinfo::{get_current_pid, ProcessRefreshKind, System};
use tri_align::{align3, oracle};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("scale_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    let mut sys = System::new();
    let mut measurements = Vec::new();

    eprintln!("[1/2] Equal-length triples (cube volume = len^3)...");
    for &len in &[4usize, 5, 6, 16, 32, 64, 96, 128] {
        measurements.push(probe_triple(&options, &mut sys, len, len, len));
    }

    eprintln!("[2/2] Skewed-length triples (one short sequence)...");
    for &(a, b, c) in &[(4, 5, 3), (64, 128, 8), (256, 256, 16), (512, 512, 4)] {
        measurements.push(probe_triple(&options, &mut sys, a, b, c));
    }

    let failed = measurements.iter().filter(|m| m.status == "failed").count();
    eprintln!();
    eprintln!(
        "{} measurements, {} verified against the oracle, {} failed",
        measurements.len(),
        measurements.iter().filter(|m| m.status == "passed").count(),
        failed
    );

    options.format.write(&measurements);
    if failed > 0 {
        std::process::exit(1);
    }
}

fn probe_triple(
    options: &Options,
    sys: &mut System,
    n1: usize,
    n2: usize,
    n3: usize,
) -> Measurement {
    let s1 = deterministic_dna(n1, 0);
    let s2 = deterministic_dna(n2, 1);
    let s3 = deterministic_dna(n3, 2);

    let before = rss_kib(sys);
    let start = Instant::now();
    let aln = align3(&s1, &s2, &s3).expect("probe inputs are gap-free");
    let wall_s = start.elapsed().as_secs_f64();
    let after = rss_kib(sys);

    let status = if n1.max(n2).max(n3) <= options.verify_limit {
        if oracle::score(&s1, &s2, &s3) == aln.score {
            "passed"
        } else {
            "failed"
        }
    } else {
        "not_checked"
    };

    eprintln!(
        "      lens=({n1},{n2},{n3}) score={} columns={} time={wall_s:.3}s status={status}",
        aln.score,
        aln.columns()
    );

    Measurement {
        size_desc: format!("{n1}x{n2}x{n3}"),
        score: aln.score,
        wall_s,
        rss_delta_kib: after.saturating_sub(before),
        status,
    }
}

struct Measurement {
    size_desc: String,
    score: u32,
    wall_s: f64,
    rss_delta_kib: u64,
    status: &'static str,
}

struct Options {
    format: OutputFormat,
    verify_limit: usize,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        // The oracle is combinatorial; anything much past 6 takes minutes.
        let mut verify_limit = 6usize;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--format=") {
                format = OutputFormat::from_str(value)?;
            } else if arg == "--format" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --format".to_string())?
                    .into();
                format = OutputFormat::from_str(&value)?;
            } else if let Some(value) = arg.strip_prefix("--verify-limit=") {
                verify_limit = value
                    .parse::<usize>()
                    .map_err(|_| "verify limit must be a non-negative integer".to_string())?;
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        Ok(Self {
            format,
            verify_limit,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --example scale_probe [-- <options>]

Options:
  --format <csv|table>     Output format (default: csv)
  --verify-limit <N>       Maximum per-sequence length to verify against the
                           recursive oracle (default: 6)
  -h, --help               Print this help message
"
        );
    }
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[Measurement]) {
        match self {
            OutputFormat::Csv => {
                println!("size_desc,score,wall_s,rss_delta_kib,status");
                for m in measurements {
                    println!(
                        "{},{},{:.3},{},{}",
                        m.size_desc, m.score, m.wall_s, m.rss_delta_kib, m.status
                    );
                }
            }
            OutputFormat::Table => {
                println!(
                    "{:<14}  {:>8}  {:>10}  {:>14}  {}",
                    "size", "score", "wall_s", "rss_delta_kib", "status"
                );
                for m in measurements {
                    println!(
                        "{:<14}  {:>8}  {:>10.3}  {:>14}  {}",
                        m.size_desc, m.score, m.wall_s, m.rss_delta_kib, m.status
                    );
                }
            }
        }
    }
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory() / 1024
    } else {
        0
    }
}

fn deterministic_dna(len: usize, offset: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len)
        .map(|i| ALPHABET[(i + offset) % ALPHABET.len()])
        .collect()
}
