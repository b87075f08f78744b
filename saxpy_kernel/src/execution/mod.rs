mod executor;
mod persistent;
mod respawn;

use std::{
    fmt::{self, Display},
    panic,
    thread::{self, Scope, ScopedJoinHandle},
};

use log::debug;

pub use executor::Executor;
pub use persistent::PersistentExec;
pub use respawn::RespawnExec;

use crate::{KernelErr, Result, context::SharedCtx, partition::Partition, worker::WorkerTask};

/// How the iteration loop relates to the lifecycle of the worker threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Every worker is spawned once and iterates internally.
    #[default]
    Persistent,
    /// A fresh batch of workers is spawned and joined for every iteration.
    Respawn,
}

impl TryFrom<&str> for Strategy {
    type Error = String;

    fn try_from(s: &str) -> std::result::Result<Self, Self::Error> {
        match s {
            "persistent" => Ok(Self::Persistent),
            "respawn" => Ok(Self::Respawn),
            _ => Err(format!(
                "unknown strategy '{s}', expected 'persistent' or 'respawn'"
            )),
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Persistent => f.write_str("persistent"),
            Self::Respawn => f.write_str("respawn"),
        }
    }
}

impl Executor for Strategy {
    fn execute(
        &self,
        ctx: &SharedCtx<'_>,
        tasks: &mut [WorkerTask<'_>],
        iterations: usize,
    ) -> Result<()> {
        match self {
            Self::Persistent => PersistentExec.execute(ctx, tasks, iterations),
            Self::Respawn => RespawnExec.execute(ctx, tasks, iterations),
        }
    }
}

/// Spawns a named worker thread inside `scope`.
fn spawn_worker<'scope, 'env, F>(
    scope: &'scope Scope<'scope, 'env>,
    worker: usize,
    partition: Partition,
    f: F,
) -> Result<ScopedJoinHandle<'scope, ()>>
where
    F: FnOnce() + Send + 'scope,
{
    debug!(
        "spawning worker: worker={worker} start={} end={}",
        partition.start, partition.end
    );

    thread::Builder::new()
        .name(format!("saxpy-worker-{worker}"))
        .spawn_scoped(scope, f)
        .map_err(|source| KernelErr::Spawn { worker, source })
}

/// Joins every handle in order, re-raising the first worker panic on this thread.
fn join_all(handles: Vec<ScopedJoinHandle<'_, ()>>) {
    for handle in handles {
        if let Err(payload) = handle.join() {
            panic::resume_unwind(payload);
        }
    }
}
