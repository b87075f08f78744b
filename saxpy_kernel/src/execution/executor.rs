use crate::{Result, context::SharedCtx, worker::WorkerTask};

/// Drives the worker tasks through every iteration of a run.
///
/// An `Executor` decides when worker threads are created and joined relative to the
/// iteration loop. Every implementation must hand each worker the iteration it reports as
/// an immutable value and must join all of its threads before returning.
pub trait Executor {
    /// Should run `iterations` SAXPY steps on every task, contributing each partial sum to
    /// the accumulator slot of the iteration that produced it.
    ///
    /// # Arguments
    /// * `ctx` - The shared read-only inputs and the accumulator.
    /// * `tasks` - One task per partition, each owning its slice of `Y`.
    /// * `iterations` - The amount of iterations to run.
    ///
    /// # Returns
    /// A `Spawn` error if the host refuses to create a worker thread.
    fn execute(
        &self,
        ctx: &SharedCtx<'_>,
        tasks: &mut [WorkerTask<'_>],
        iterations: usize,
    ) -> Result<()>;
}
