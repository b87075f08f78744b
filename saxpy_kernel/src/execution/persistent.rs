use std::thread;

use super::{Executor, join_all, spawn_worker};
use crate::{Result, context::SharedCtx, worker::WorkerTask};

/// Spawns every worker exactly once, each one looping over all the iterations.
///
/// A run creates as many threads as there are tasks. Workers never wait on each other,
/// the slots of `Y_avgs` become final once every worker has been joined.
#[derive(Debug, Clone, Copy, Default)]
pub struct PersistentExec;

impl Executor for PersistentExec {
    fn execute(
        &self,
        ctx: &SharedCtx<'_>,
        tasks: &mut [WorkerTask<'_>],
        iterations: usize,
    ) -> Result<()> {
        thread::scope(|s| -> Result<()> {
            let mut handles = Vec::with_capacity(tasks.len());

            for task in tasks.iter_mut() {
                let handle = spawn_worker(s, task.id(), task.partition(), move || {
                    for it in 0..iterations {
                        task.step_and_contribute(ctx, it);
                    }
                })?;

                handles.push(handle);
            }

            join_all(handles);
            Ok(())
        })
    }
}
