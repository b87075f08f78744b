//! A data-parallel iterative SAXPY kernel.
//!
//! Every iteration updates `Y[i] = Y[i] + a * X[i]` and records the mean of `Y` in
//! `Y_avgs[iteration]`. The vector is split in contiguous partitions, one per worker thread;
//! workers own their slice of `Y` and publish partial sums through a locked accumulator.

pub mod accumulator;
pub mod config;
pub mod context;
pub mod error;
pub mod execution;
pub mod partition;
pub mod worker;

use log::debug;

pub use accumulator::AvgAccumulator;
pub use config::SaxpyConfig;
pub use context::SharedCtx;
pub use error::{KernelErr, Result};
pub use execution::{Executor, PersistentExec, RespawnExec, Strategy};
pub use partition::{Partition, PartitionPlan};
pub use worker::{WorkerTask, saxpy_step};

/// The largest supported vector length, the maximum index representable by an `i32`.
pub const MAX_LEN: usize = i32::MAX as usize;

/// Runs the kernel, updating `y` and `y_avgs` in place.
///
/// # Arguments
/// * `cfg` - The validated shape of the run.
/// * `x` - The read-only input vector.
/// * `y` - The vector updated on every iteration.
/// * `a` - The scalar multiplier.
/// * `y_avgs` - One slot per iteration, contributions are added to its current values.
///
/// # Returns
/// A `SizeMismatch` error if any buffer disagrees with `cfg`, or a `Spawn` error if a worker
/// thread couldn't be created. On error `y_avgs` is left untouched.
pub fn run(cfg: &SaxpyConfig, x: &[f64], y: &mut [f64], a: f64, y_avgs: &mut [f64]) -> Result<()> {
    check_size("X", x.len(), cfg.len())?;
    check_size("Y", y.len(), cfg.len())?;
    check_size("Y_avgs", y_avgs.len(), cfg.iterations())?;

    debug!(
        "running saxpy kernel: len={} threads={} iterations={} strategy={}",
        cfg.len(),
        cfg.threads(),
        cfg.iterations(),
        cfg.strategy()
    );

    let plan = PartitionPlan::new(cfg.len(), cfg.threads())?;
    let accumulator = AvgAccumulator::from_slice(y_avgs, cfg.len());
    let ctx = SharedCtx::new(x, a, &accumulator);

    let mut tasks = plan.split_mut(y)?;
    cfg.strategy().execute(&ctx, &mut tasks, cfg.iterations())?;

    accumulator.pull_avgs(y_avgs);
    Ok(())
}

fn check_size(what: &'static str, got: usize, expected: usize) -> Result<()> {
    if got != expected {
        return Err(KernelErr::SizeMismatch {
            what,
            got,
            expected,
        });
    }

    Ok(())
}
