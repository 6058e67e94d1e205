//! Command‑line entry point for `gilbert2d`.
//!
//! Prints the cells of a `WIDTH × HEIGHT` grid in generalized Hilbert order,
//! one `x y` pair per line.

use std::{
    io::{self, BufWriter, ErrorKind, Write},
    ops::Range,
    process,
};

use anyhow::{Result, bail};
use clap::Parser;
use gilbert::Gilbert;
use log::LevelFilter;

/// Parse a `--chunk` value of the form `START:END` into a non-empty,
/// half-open range of curve offsets.
fn parse_chunk(value: &str) -> Result<Range<u64>, String> {
    let Some((lo, hi)) = value.split_once(':') else {
        return Err(format!("expected START:END, got '{value}'"));
    };
    let offset = |text: &str| {
        text.trim()
            .parse::<u64>()
            .map_err(|e| format!("bad offset '{text}' in '{value}': {e}"))
    };
    let range = offset(lo)?..offset(hi)?;
    if range.is_empty() {
        return Err(format!("empty chunk {}..{}", range.start, range.end));
    }
    Ok(range)
}

#[derive(Parser)]
#[command(name = "gilbert2d")]
#[command(version = env!("CARGO_PKG_VERSION"))]
/// Print a generalized Hilbert curve over a WIDTH×HEIGHT grid.
struct Cli {
    /// Sets the level of verbosity (`-v`, `-vv`, ...).
    #[arg(short, action = clap::ArgAction::Count, help = "Sets the level of verbosity")]
    v: u8,

    #[arg(
        short = 'n',
        long = "number",
        default_value_t = false,
        help = "Prefix each line with its curve offset"
    )]
    /// Print `offset x y` instead of `x y`.
    number: bool,

    #[arg(
        long = "chunk",
        value_name = "START:END",
        value_parser = parse_chunk,
        help = "Print only the curve segment from START (inclusive) to END (exclusive)"
    )]
    /// Optional offset range for the printed segment.
    chunk: Option<Range<u64>>,

    #[arg(value_parser = clap::value_parser!(u32).range(1..), help = "Grid width")]
    /// Grid width.
    width: u32,

    #[arg(value_parser = clap::value_parser!(u32).range(1..), help = "Grid height")]
    /// Grid height.
    height: u32,
}

/// Map the `-v` count to a log level.
const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the stderr logger.
fn init_logging(verbosity: u8) {
    env_logger::Builder::new()
        .filter_level(level_for(verbosity))
        .format_timestamp(None)
        .init();
}

/// Write the requested part of the curve to `out`.
fn print_curve(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let curve = Gilbert::new(cli.width, cli.height)?;
    let range = cli.chunk.clone().unwrap_or(0..curve.length());
    if range.end > curve.length() {
        bail!(
            "chunk end ({}) exceeds curve length ({})",
            range.end,
            curve.length()
        );
    }
    log::info!(
        "printing offsets {}..{} of a {}x{} grid",
        range.start,
        range.end,
        cli.width,
        cli.height
    );

    let cells = curve.iter_from(range.start)?;
    for (offset, p) in range.zip(cells) {
        if cli.number {
            writeln!(out, "{offset} {} {}", p.x, p.y)?;
        } else {
            writeln!(out, "{} {}", p.x, p.y)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Whether the error came from a closed stdout, e.g. `gilbert2d 9 9 | head`.
fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == ErrorKind::BrokenPipe)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.v);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if let Err(err) = print_curve(&cli, &mut out) {
        if is_broken_pipe(&err) {
            return;
        }
        eprintln!("{err:#}");
        process::exit(1);
    }
}
