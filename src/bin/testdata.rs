//! Writes the survey seed script (`test_data.sql` by default).

use std::path::PathBuf;

use chrono::{Local, NaiveDateTime, Timelike};
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use surveyseed::{
    GenerateError, Generator,
    catalog::Catalog,
    config::{
        DEFAULT_OUTPUT_FILE, GeneratorConfig, SEED_ENV_VAR, resolve_seed,
    },
    output::write_dataset,
    sql::parse_timestamp,
};

#[derive(Parser)]
pub struct Args {
    /// Where to write the script. An existing file is overwritten.
    #[clap(default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,
    /// Seeds the random source, making the output reproducible (together
    /// with `--now`). Falls back to `SURVEYSEED_SEED`.
    #[clap(long)]
    seed: Option<u64>,
    /// The reference time, as `YYYY-MM-DD HH:MM:SS`. Defaults to the local
    /// clock.
    #[clap(long, value_parser = parse_timestamp)]
    now: Option<NaiveDateTime>,
}

fn main() -> Result<(), GenerateError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let args = Args::parse();
    let seed = resolve_seed(args.seed, std::env::var(SEED_ENV_VAR).ok());
    let now = args.now.unwrap_or_else(|| {
        let now = Local::now().naive_local();
        now.with_nanosecond(0).unwrap_or(now)
    });

    let rng = match seed {
        Some(seed) => ChaCha20Rng::seed_from_u64(seed),
        None => ChaCha20Rng::from_os_rng(),
    };

    tracing::info!(?seed, %now, "Generating test data");

    let mut generator =
        Generator::new(rng, now, GeneratorConfig::default(), Catalog::default())?;
    let dataset = generator.generate();
    let summary = write_dataset(&args.output, &dataset)?;

    println!("Generated {}", args.output.display());
    println!("{summary}");

    Ok(())
}
