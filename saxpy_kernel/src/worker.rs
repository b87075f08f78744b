use log::trace;

use crate::{context::SharedCtx, partition::Partition};

/// Performs one SAXPY iteration `y[i] = y[i] + a * x[i]` over equally long slices.
///
/// # Arguments
/// * `a` - The scalar multiplier.
/// * `x` - The read-only input slice.
/// * `y` - The slice updated in place.
///
/// # Returns
/// The sum of the updated `y` values.
pub fn saxpy_step(a: f64, x: &[f64], y: &mut [f64]) -> f64 {
    debug_assert_eq!(x.len(), y.len());

    y.iter_mut().zip(x).fold(0., |acc, (y, x)| {
        *y += a * x;
        acc + *y
    })
}

/// The unit of work handed to a single worker thread.
///
/// It exclusively owns the worker's slice of `Y`, no other task can observe it while the
/// parallel phase is running.
#[derive(Debug)]
pub struct WorkerTask<'a> {
    id: usize,
    partition: Partition,
    y: &'a mut [f64],
}

impl<'a> WorkerTask<'a> {
    /// Creates a new `WorkerTask`.
    ///
    /// Intended to be used only by `PartitionPlan::split_mut`.
    pub(crate) fn new(id: usize, partition: Partition, y: &'a mut [f64]) -> Self {
        debug_assert_eq!(partition.len(), y.len());
        Self { id, partition, y }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn partition(&self) -> Partition {
        self.partition
    }

    /// The current state of this task's slice of `Y`.
    pub fn y(&self) -> &[f64] {
        &*self.y
    }

    /// Runs a single iteration over this task's partition.
    ///
    /// # Arguments
    /// * `ctx` - The shared read-only inputs.
    ///
    /// # Returns
    /// The partial sum of the updated values.
    pub fn step(&mut self, ctx: &SharedCtx<'_>) -> f64 {
        let x = &ctx.x()[self.partition.range()];
        saxpy_step(ctx.a(), x, self.y)
    }

    /// Runs a single iteration and publishes its partial sum for `iteration`.
    pub fn step_and_contribute(&mut self, ctx: &SharedCtx<'_>, iteration: usize) {
        let partial_sum = self.step(ctx);
        ctx.accumulator().contribute(iteration, partial_sum);

        trace!(
            "contributed: worker={} iteration={iteration} partial_sum={partial_sum}",
            self.id
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saxpy_step_updates_and_sums() {
        let x = [1., 2., 3.];
        let mut y = [1., 1., 1.];

        let acc = saxpy_step(2., &x, &mut y);
        assert_eq!(y, [3., 5., 7.]);
        assert_eq!(acc, 15.);
    }

    #[test]
    fn test_saxpy_step_empty_slice() {
        let mut y: [f64; 0] = [];
        assert_eq!(saxpy_step(3., &[], &mut y), 0.);
    }

    #[test]
    fn test_zero_scalar_keeps_y() {
        let x = [4., 5.];
        let mut y = [0.5, 0.25];

        let acc = saxpy_step(0., &x, &mut y);
        assert_eq!(y, [0.5, 0.25]);
        assert_eq!(acc, 0.75);
    }
}
