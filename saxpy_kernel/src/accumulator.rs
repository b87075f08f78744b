use parking_lot::Mutex;

/// The per-iteration averages of `Y`, shared by every worker.
///
/// A single lock guards the whole array, each contribution is one read-modify-write on a
/// single slot while holding it.
#[derive(Debug)]
pub struct AvgAccumulator {
    divisor: f64,
    avgs: Mutex<Box<[f64]>>,
}

impl AvgAccumulator {
    /// Creates a new `AvgAccumulator` with every slot set to zero.
    ///
    /// # Arguments
    /// * `iterations` - The amount of slots, one per iteration.
    /// * `len` - The length of the averaged vector.
    pub fn new(iterations: usize, len: usize) -> Self {
        Self::from_slice(&vec![0.; iterations], len)
    }

    /// Creates a new `AvgAccumulator` starting from the given averages.
    ///
    /// # Arguments
    /// * `avgs` - The initial value of every slot.
    /// * `len` - The length of the averaged vector.
    pub fn from_slice(avgs: &[f64], len: usize) -> Self {
        Self {
            divisor: len as f64,
            avgs: Mutex::new(avgs.into()),
        }
    }

    /// Adds a worker's share of the average of `iteration`.
    ///
    /// # Arguments
    /// * `iteration` - The slot to contribute to.
    /// * `partial_sum` - The sum of the worker's updated values for that iteration.
    ///
    /// # Panics
    /// If `iteration` is out of bounds.
    pub fn contribute(&self, iteration: usize, partial_sum: f64) {
        let mut avgs = self.avgs.lock();
        avgs[iteration] += partial_sum / self.divisor;
    }

    /// Returns the amount of iteration slots.
    pub fn iterations(&self) -> usize {
        self.avgs.lock().len()
    }

    /// Copies the current averages into `out`.
    ///
    /// # Panics
    /// If `out` isn't as long as the amount of iterations.
    pub fn pull_avgs(&self, out: &mut [f64]) {
        out.copy_from_slice(&self.avgs.lock());
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn test_contributions_add_up_to_the_mean() {
        let accumulator = AvgAccumulator::new(2, 4);

        accumulator.contribute(0, 2.);
        accumulator.contribute(0, 6.);
        accumulator.contribute(1, 4.);

        let mut out = [0.; 2];
        accumulator.pull_avgs(&mut out);
        assert_eq!(out, [2., 1.]);
    }

    #[test]
    fn test_starts_from_the_given_averages() {
        let accumulator = AvgAccumulator::from_slice(&[1., 0.5], 2);
        accumulator.contribute(1, 1.);

        let mut out = [0.; 2];
        accumulator.pull_avgs(&mut out);
        assert_eq!(out, [1., 1.]);
    }

    #[test]
    fn test_concurrent_contributions_are_not_lost() {
        const THREADS: usize = 8;
        const ITERATIONS: usize = 64;
        const REPEATS: usize = 100;

        let accumulator = AvgAccumulator::new(ITERATIONS, 1);

        thread::scope(|s| {
            for _ in 0..THREADS {
                s.spawn(|| {
                    for _ in 0..REPEATS {
                        for it in 0..ITERATIONS {
                            accumulator.contribute(it, 1.);
                        }
                    }
                });
            }
        });

        let mut avgs = [0.; ITERATIONS];
        accumulator.pull_avgs(&mut avgs);
        assert_eq!(accumulator.iterations(), ITERATIONS);
        assert!(avgs.iter().all(|&avg| avg == (THREADS * REPEATS) as f64));
    }
}
