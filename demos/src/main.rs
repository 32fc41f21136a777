//! Times bulk insertion of unique random keys into several map variants.

mod key_supplier;

use chainmap::Map;
use clap::Parser;
use key_supplier::{KeySupplier, RandomKeys};
use std::io::{self, Write};
use std::process::ExitCode;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

#[derive(Debug, Parser)]
#[command(name = "compare", about = "Compare put performance of map implementations")]
struct Cli {
    /// Number of keys to put into each map.
    #[arg(short = 'n', long, default_value_t = 10_000)]
    count: usize,

    /// Number of buckets of the chained maps.
    #[arg(short, long, default_value_t = chainmap::hash_map::DEFAULT_CAPACITY)]
    capacity: usize,

    /// Length of the generated keys.
    #[arg(long, default_value_t = 36, value_parser = clap::value_parser!(u32).range(1..=64))]
    key_len: u32,

    /// Increase log verbosity; may be repeated.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, thiserror::Error)]
enum Error {
    #[error(transparent)]
    Map(#[from] chainmap::Error),

    #[error("cannot generate {count} unique keys of length {key_len}")]
    KeysExhausted { count: usize, key_len: u32 },

    #[error("failed to write timings: {0}")]
    Io(#[from] io::Error),
}

fn configure_logging(verbose: u8) {
    use tracing::level_filters::LevelFilter;

    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::fmt()
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .with_env_filter(format!("off,compare={level}"))
        .init();
}

/// Puts every key with its sequence number and returns the elapsed time.
fn time_puts(map: &mut dyn Map<String, usize>, keys: &[String]) -> Duration {
    let start = Instant::now();
    for (i, key) in keys.iter().enumerate() {
        map.put(key.clone(), i);
    }
    start.elapsed()
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<(), Error> {
    let interface = chainmap::HashMap::<String, usize>::with_capacity(cli.capacity)?;
    let mut chained = chainmap::HashMap::<String, usize>::with_capacity(cli.capacity)?;

    let exhausted = Error::KeysExhausted {
        count: cli.count,
        key_len: cli.key_len,
    };
    let mut supplier = RandomKeys::new(cli.key_len as usize);
    if supplier
        .key_space()
        .is_some_and(|space| cli.count as u128 > space)
    {
        return Err(exhausted);
    }
    let keys: Vec<String> = (0..cli.count)
        .map(|_| supplier.next_key())
        .collect::<Option<_>>()
        .ok_or(exhausted)?;
    info!(count = keys.len(), capacity = cli.capacity, "Generated keys.");

    let mut variants: Vec<(&str, Box<dyn Map<String, usize>>)> = vec![
        (
            "Original",
            Box::new(std::collections::HashMap::<String, usize>::new()),
        ),
        ("InterfaceImplemented", Box::new(interface)),
    ];
    for (name, map) in &mut variants {
        let elapsed = time_puts(map.as_mut(), &keys);
        debug!(name = *name, len = map.len(), "Filled map.");
        writeln!(out, "{name} time: {:.3}", elapsed.as_secs_f64())?;
    }

    let start = Instant::now();
    for (i, key) in keys.iter().enumerate() {
        chained.put(key.clone(), i);
    }
    let elapsed = start.elapsed();
    debug!(
        len = chained.len(),
        load_factor = chained.load_factor(),
        "Filled chained map."
    );
    writeln!(out, "CustomHashMap time: {:.3}", elapsed.as_secs_f64())?;

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    configure_logging(cli.verbose);
    debug!(?cli, "Parsed arguments.");

    match run(&cli, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "Comparison failed.");
            ExitCode::FAILURE
        }
    }
}
