use rand::Rng;
use rand_distr::{Beta, Distribution};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum SampleError {
    #[error("three-point values out of order: {optimistic} / {likely} / {pessimistic}")]
    OutOfOrder {
        optimistic: f64,
        likely: f64,
        pessimistic: f64,
    },
    #[error("invalid beta distribution parameters")]
    Distribution,
}

pub trait ThreePointSampler {
    fn sample(&mut self, optimistic: f64, likely: f64, pessimistic: f64) -> Result<f64, SampleError>;
}

pub struct BetaPertSampler<R: Rng> {
    rng: R,
}

impl<R: Rng> BetaPertSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ThreePointSampler for BetaPertSampler<R> {
    fn sample(&mut self, optimistic: f64, likely: f64, pessimistic: f64) -> Result<f64, SampleError> {
        let out_of_order = SampleError::OutOfOrder {
            optimistic,
            likely,
            pessimistic,
        };
        if pessimistic < optimistic {
            return Err(out_of_order);
        }
        if (pessimistic - optimistic).abs() < f64::EPSILON {
            return Ok(optimistic);
        }
        if likely < optimistic || likely > pessimistic {
            return Err(out_of_order);
        }

        let range = pessimistic - optimistic;
        let alpha = 1.0 + 4.0 * ((likely - optimistic) / range);
        let beta = 1.0 + 4.0 * ((pessimistic - likely) / range);
        let beta_dist = Beta::new(alpha, beta).map_err(|_| SampleError::Distribution)?;
        let sample = beta_dist.sample(&mut self.rng);
        Ok(optimistic + sample * range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn sample_stays_within_range() {
        let mut sampler = BetaPertSampler::new(StdRng::seed_from_u64(7));
        for _ in 0..500 {
            let value = sampler.sample(3.0, 5.0, 8.0).unwrap();
            assert!((3.0..=8.0).contains(&value));
        }
    }

    #[test]
    fn sample_returns_optimistic_for_degenerate_range() {
        let mut sampler = BetaPertSampler::new(StdRng::seed_from_u64(7));
        assert_eq!(sampler.sample(4.0, 4.0, 4.0), Ok(4.0));
    }

    #[test]
    fn sample_rejects_inverted_values() {
        let mut sampler = BetaPertSampler::new(StdRng::seed_from_u64(7));
        assert!(matches!(
            sampler.sample(8.0, 5.0, 3.0),
            Err(SampleError::OutOfOrder { .. })
        ));
        assert!(matches!(
            sampler.sample(3.0, 9.0, 8.0),
            Err(SampleError::OutOfOrder { .. })
        ));
    }
}
