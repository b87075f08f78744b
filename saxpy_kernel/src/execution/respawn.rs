use std::thread;

use super::{Executor, join_all, spawn_worker};
use crate::{Result, context::SharedCtx, worker::WorkerTask};

/// Spawns a fresh batch of workers for every iteration.
///
/// Every batch is joined before the next one is created, so iteration `k` always starts
/// from the `Y` left behind by iteration `k - 1`. A run creates `tasks * iterations` threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct RespawnExec;

impl Executor for RespawnExec {
    fn execute(
        &self,
        ctx: &SharedCtx<'_>,
        tasks: &mut [WorkerTask<'_>],
        iterations: usize,
    ) -> Result<()> {
        for it in 0..iterations {
            thread::scope(|s| -> Result<()> {
                let handles = tasks
                    .iter_mut()
                    .map(|task| {
                        spawn_worker(s, task.id(), task.partition(), move || {
                            task.step_and_contribute(ctx, it)
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;

                join_all(handles);
                Ok(())
            })?;
        }

        Ok(())
    }
}
