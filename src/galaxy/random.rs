use rand::Rng;

/// The only randomness generation ever sees.
///
/// Reproducibility is defined by call order and formulas; the resulting stars
/// are bit-identical only when the same generator algorithm is plugged in.
pub trait RandomSource {
    /// Uniform real in `[0, 1)`
    fn next_unit(&mut self) -> f64;

    /// Uniform integer in `[0, n)`. `n` must be non-zero.
    fn next_index(&mut self, n: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.gen_range(0.0..1.0)
    }

    fn next_index(&mut self, n: usize) -> usize {
        self.gen_range(0..n)
    }
}
