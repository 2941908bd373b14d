// dataforge-core/src/domain/sampling.rs
//
// Sampling primitives shared by the domain generators. All randomness
// flows through the caller's rng so a generator stays reproducible from
// its own seeded stream.

use rand::Rng;

use crate::domain::error::DomainError;

/// Half-away-from-zero rounding to `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Uniform float in `[lo, hi)`, rounded to the declared precision.
pub fn uniform(rng: &mut impl Rng, lo: f64, hi: f64, decimals: u32) -> f64 {
    round_to(rng.random_range(lo..hi), decimals)
}

/// Exponential draw via inverse CDF, rounded to the declared precision.
/// `1.0 - u` keeps ln away from zero since `u` is drawn from `[0, 1)`.
pub fn exponential(rng: &mut impl Rng, mean: f64, decimals: u32) -> f64 {
    let u: f64 = rng.random_range(0.0..1.0);
    round_to(-mean * (1.0 - u).ln(), decimals)
}

/// Weighted-categorical sampler with an explicit probability vector.
/// Construction validates arity and that the weights sum to 1 within
/// floating tolerance, failing fast before any row is sampled.
pub struct WeightedChoice<T: Clone> {
    choices: Vec<T>,
    cumulative: Vec<f64>,
}

const WEIGHT_TOLERANCE: f64 = 1e-6;

impl<T: Clone> WeightedChoice<T> {
    pub fn new(column: &str, choices: &[T], weights: &[f64]) -> Result<Self, DomainError> {
        if choices.len() != weights.len() {
            return Err(DomainError::WeightArityMismatch {
                column: column.to_string(),
                choices: choices.len(),
                weights: weights.len(),
            });
        }
        let sum: f64 = weights.iter().sum();
        if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(DomainError::InvalidWeights {
                column: column.to_string(),
                sum,
            });
        }
        let mut cumulative = Vec::with_capacity(weights.len());
        let mut acc = 0.0;
        for w in weights {
            acc += w;
            cumulative.push(acc);
        }
        Ok(Self {
            choices: choices.to_vec(),
            cumulative,
        })
    }

    pub fn sample(&self, rng: &mut impl Rng) -> T {
        let ticket: f64 = rng.random_range(0.0..1.0);
        for (i, bound) in self.cumulative.iter().enumerate() {
            if ticket < *bound {
                return self.choices[i].clone();
            }
        }
        // Cumulative rounding can leave the last bound a hair under 1.0.
        self.choices[self.choices.len() - 1].clone()
    }

    pub fn sample_n(&self, count: usize, rng: &mut impl Rng) -> Vec<T> {
        (0..count).map(|_| self.sample(rng)).collect()
    }
}
