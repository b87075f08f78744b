use std::num::NonZeroUsize;

use crate::{KernelErr, Result, execution::Strategy, partition::check_len};

/// Immutable shape of a kernel run.
///
/// Every bound is validated on construction, before any vector is allocated.
#[derive(Debug, Clone)]
pub struct SaxpyConfig {
    len: usize,
    threads: NonZeroUsize,
    iterations: usize,
    strategy: Strategy,
}

impl SaxpyConfig {
    /// Creates a new kernel configuration using the persistent strategy.
    ///
    /// # Args
    /// * `len` - The length of `X` and `Y`.
    /// * `threads` - The amount of worker threads, one per partition.
    /// * `iterations` - The amount of SAXPY iterations, one average is produced per iteration.
    ///
    /// # Returns
    /// An `InvalidPartitionCount` error if `threads` is zero or an `InvalidVectorLength`
    /// error if `len` is out of bounds.
    pub fn new(len: usize, threads: usize, iterations: usize) -> Result<Self> {
        let threads = NonZeroUsize::new(threads).ok_or(KernelErr::InvalidPartitionCount)?;
        check_len(len)?;

        Ok(Self {
            len,
            threads,
            iterations,
            strategy: Strategy::default(),
        })
    }

    /// Replaces the iteration strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn threads(&self) -> NonZeroUsize {
        self.threads
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
}
