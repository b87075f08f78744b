use rand::{SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, Uniform, uniform::Error as UniformError};

/// The randomly initialized inputs of a run.
#[derive(Debug)]
pub struct SaxpyInput {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub a: f64,
}

impl SaxpyInput {
    /// Draws `X`, `Y` and `a` uniformly from `[0, 1)`.
    ///
    /// `X[i]` and `Y[i]` are drawn in pairs, `a` is drawn last. The same seed always yields
    /// the same input.
    ///
    /// # Arguments
    /// * `len` - The length of `X` and `Y`.
    /// * `seed` - The seed of the random number generator.
    pub fn random(len: usize, seed: u64) -> Result<Self, UniformError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let unit = Uniform::new(0.0_f64, 1.0)?;

        let (x, y) = (0..len)
            .map(|_| (unit.sample(&mut rng), unit.sample(&mut rng)))
            .unzip();
        let a = unit.sample(&mut rng);

        Ok(Self { x, y, a })
    }
}
