use rand::Rng;

/// Upper bound (exclusive) of a generated bar amplitude.
pub const AMPLITUDE_MAX: f64 = 100.0;

/// One frame of bar amplitudes, each in `[0, AMPLITUDE_MAX)`.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualizerSample {
    values: Vec<f64>,
}

impl VisualizerSample {
    /// All bars at zero; what the view shows before the first tick.
    pub fn silent(bars: usize) -> Self {
        Self {
            values: vec![0.0; bars],
        }
    }

    /// Draw `bars` independent amplitudes uniformly from `[0, AMPLITUDE_MAX)`.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, bars: usize) -> Self {
        Self {
            values: (0..bars).map(|_| rng.gen_range(0.0..AMPLITUDE_MAX)).collect(),
        }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.values.len()
    }
}
