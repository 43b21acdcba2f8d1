use crate::error::NnError;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use rand_distr::Normal;

/// Distribution parameters are drawn from when a neuron is created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Init {
    /// Uniform on `[low, high)`.
    Uniform { low: f64, high: f64 },
    Normal { mean: f64, std: f64 },
}

impl Default for Init {
    /// Uniform on `[-1, 1)`, as in the classic micrograd neuron.
    fn default() -> Self {
        Init::Uniform {
            low: -1.0,
            high: 1.0,
        }
    }
}

impl Init {
    /// Checks the distribution parameters.
    pub fn validate(&self) -> Result<(), NnError> {
        match *self {
            Init::Uniform { low, high } => {
                if low >= high || !(high - low).is_finite() {
                    return Err(NnError::InvalidInit(format!(
                        "uniform bounds must satisfy low < high with a finite width, got [{}, {})",
                        low, high
                    )));
                }
            }
            Init::Normal { mean, std } => {
                if !mean.is_finite() || !std.is_finite() || std < 0.0 {
                    return Err(NnError::InvalidInit(format!(
                        "normal needs a finite mean and a finite std >= 0, got mean={} std={}",
                        mean, std
                    )));
                }
            }
        }
        Ok(())
    }

    /// Draws `n` samples from `rng`.
    ///
    /// Randomness comes only from the caller's generator, so a seeded
    /// generator gives reproducible parameters.
    pub fn sample<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Vec<f64>, NnError> {
        self.validate()?;
        let samples = match *self {
            Init::Uniform { low, high } => {
                let dist = Uniform::new(low, high);
                (0..n).map(|_| dist.sample(&mut *rng)).collect()
            }
            Init::Normal { mean, std } => {
                let dist =
                    Normal::new(mean, std).map_err(|e| NnError::InvalidInit(e.to_string()))?;
                (0..n).map(|_| dist.sample(&mut *rng)).collect()
            }
        };
        Ok(samples)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests; // Link to the test file
