//! Triforce generator
//!
//! Writes `triforce.tritvm` into the working directory. Takes no arguments.

use triforce::config::{Config, DEFAULT_LOG_FILTER, OUTPUT_FILE};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER)).init();

    log::debug!("triforce v{}", triforce::VERSION);
    let report = triforce::write(OUTPUT_FILE, &Config::default())?;

    println!("{}", report.summary(OUTPUT_FILE));
    Ok(())
}
