mod args;
mod init;
mod report;

use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use log::{Level, debug, info, log_enabled};

use crate::{args::Args, init::SaxpyInput};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    log_parameters(&args);

    // Validate before allocating anything
    let cfg = args.config()?;

    let SaxpyInput { x, mut y, a } =
        SaxpyInput::random(cfg.len(), args.seed).context("failed to initialize X and Y")?;
    let mut y_avgs = vec![0.; cfg.iterations()];

    if log_enabled!(Level::Debug) {
        debug!("vector X = [{}]", report::render(&x));
        debug!("vector Y = [{}]", report::render(&y));
        debug!("a = {a:.6}");
    }

    let start = Instant::now();
    saxpy_kernel::run(&cfg, &x, &mut y, a, &mut y_avgs)?;
    let elapsed = start.elapsed();

    if log_enabled!(Level::Debug) {
        debug!("final vector Y = [{}]", report::render(&y));
    }

    println!("Execution time: {:.6} ms", elapsed.as_secs_f64() * 1e3);
    println!("Last 3 values of Y: {}", report::tail(&y, 3));
    println!("Last 3 values of Y_avgs: {}", report::tail(&y_avgs, 3));

    Ok(())
}

fn log_parameters(args: &Args) {
    info!(
        "parsed parameters: size={} seed={} threads={} iterations={} strategy={}",
        args.size, args.seed, args.threads, args.iterations, args.strategy
    );
}
