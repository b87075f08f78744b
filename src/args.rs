use clap::Parser;

use saxpy_kernel::{Result, SaxpyConfig, Strategy};

/// Iterative multi-threaded SAXPY with per-iteration averages.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Vector size
    #[arg(short = 'p', long, default_value_t = 10_000_000)]
    pub size: usize,

    /// Seed for the random input
    #[arg(short, long, default_value_t = 1)]
    pub seed: u64,

    /// Number of worker threads
    #[arg(short = 'n', long, default_value_t = 2)]
    pub threads: usize,

    /// Maximum iterations
    #[arg(short, long, default_value_t = 1000)]
    pub iterations: usize,

    /// Iteration strategy: persistent, respawn
    #[arg(long, default_value = "persistent", value_parser = parse_strategy)]
    pub strategy: Strategy,
}

impl Args {
    /// Validates the parsed values into a kernel configuration.
    pub fn config(&self) -> Result<SaxpyConfig> {
        let cfg = SaxpyConfig::new(self.size, self.threads, self.iterations)?;
        Ok(cfg.with_strategy(self.strategy))
    }
}

fn parse_strategy(s: &str) -> std::result::Result<Strategy, String> {
    Strategy::try_from(s)
}
