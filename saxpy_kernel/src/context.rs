use crate::accumulator::AvgAccumulator;

/// Everything a worker may touch besides its own slice of `Y`.
///
/// `x` and `a` are read-only, the accumulator is the only shared state a worker writes to
/// and it does so through the accumulator's lock.
#[derive(Debug, Clone, Copy)]
pub struct SharedCtx<'a> {
    x: &'a [f64],
    a: f64,
    accumulator: &'a AvgAccumulator,
}

impl<'a> SharedCtx<'a> {
    pub fn new(x: &'a [f64], a: f64, accumulator: &'a AvgAccumulator) -> Self {
        Self { x, a, accumulator }
    }

    pub fn x(&self) -> &'a [f64] {
        self.x
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn accumulator(&self) -> &'a AvgAccumulator {
        self.accumulator
    }
}
