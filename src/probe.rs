//! Latency probes
//!
//! A probe turns a source name into a latency value. The menu driver only
//! sees the [`LatencyProbe`] trait, so the random simulation used by the
//! binary can be swapped for a fixed value or a closure in tests.

use crate::error::{AppError, Result};
use crate::models::Config;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;
use std::thread;
use std::time::Duration;

/// Source of latency measurements
pub trait LatencyProbe {
    /// Measure the latency for `source`, in milliseconds
    fn measure(&mut self, source: &str) -> Result<i64>;
}

impl<F> LatencyProbe for F
where
    F: FnMut(&str) -> i64,
{
    fn measure(&mut self, source: &str) -> Result<i64> {
        Ok(self(source))
    }
}

/// Draws a uniform random latency and then blocks for a fixed delay
#[derive(Debug, Clone)]
pub struct SimulatedProbe {
    rng: StdRng,
    range: RangeInclusive<i64>,
    delay: Duration,
}

impl SimulatedProbe {
    /// Create a probe seeded from system entropy
    pub fn new(range: RangeInclusive<i64>, delay: Duration) -> Result<Self> {
        Self::with_rng(StdRng::from_entropy(), range, delay)
    }

    /// Create a probe whose draws are reproducible for a given seed
    pub fn seeded(seed: u64, range: RangeInclusive<i64>, delay: Duration) -> Result<Self> {
        Self::with_rng(StdRng::seed_from_u64(seed), range, delay)
    }

    /// Build the probe described by the configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        match config.seed {
            Some(seed) => Self::seeded(seed, config.latency_range(), config.simulation_delay()),
            None => Self::new(config.latency_range(), config.simulation_delay()),
        }
    }

    fn with_rng(rng: StdRng, range: RangeInclusive<i64>, delay: Duration) -> Result<Self> {
        if range.is_empty() {
            return Err(AppError::config(format!(
                "Latency range {}..={} is empty",
                range.start(),
                range.end()
            )));
        }
        Ok(Self { rng, range, delay })
    }

    pub fn range(&self) -> &RangeInclusive<i64> {
        &self.range
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl LatencyProbe for SimulatedProbe {
    fn measure(&mut self, _source: &str) -> Result<i64> {
        let latency = self.rng.gen_range(self.range.clone());
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        Ok(latency)
    }
}

/// Always reports the same latency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedProbe(pub i64);

impl LatencyProbe for FixedProbe {
    fn measure(&mut self, _source: &str) -> Result<i64> {
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_simulated_draws_stay_in_range() {
        let mut probe = SimulatedProbe::seeded(7, 1..=100, Duration::ZERO).unwrap();
        for _ in 0..500 {
            let latency = probe.measure("New York").unwrap();
            assert!((1..=100).contains(&latency));
        }
    }

    #[test]
    fn test_seeded_probe_is_deterministic() {
        let mut a = SimulatedProbe::seeded(42, -50..=50, Duration::ZERO).unwrap();
        let mut b = SimulatedProbe::seeded(42, -50..=50, Duration::ZERO).unwrap();

        let draws_a: Vec<i64> = (0..20).map(|_| a.measure("x").unwrap()).collect();
        let draws_b: Vec<i64> = (0..20).map(|_| b.measure("x").unwrap()).collect();
        assert_eq!(draws_a, draws_b);
    }

    #[test]
    fn test_single_value_range() {
        let mut probe = SimulatedProbe::seeded(1, 5..=5, Duration::ZERO).unwrap();
        assert_eq!(probe.measure("x").unwrap(), 5);
    }

    #[test]
    fn test_empty_range_rejected() {
        #[allow(clippy::reversed_empty_ranges)]
        let err = SimulatedProbe::seeded(1, 10..=1, Duration::ZERO).unwrap_err();
        assert_eq!(err.category(), "CONFIG");
    }

    #[test]
    fn test_delay_is_applied() {
        let mut probe = SimulatedProbe::seeded(3, 1..=2, Duration::from_millis(20)).unwrap();
        let start = Instant::now();
        probe.measure("x").unwrap();
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn test_from_config() {
        let mut config = Config::default();
        config.simulation_delay_ms = 0;
        config.min_latency_ms = 200;
        config.max_latency_ms = 300;
        config.seed = Some(9);

        let mut probe = SimulatedProbe::from_config(&config).unwrap();
        assert_eq!(probe.range(), &(200..=300));
        assert_eq!(probe.delay(), Duration::ZERO);
        let latency = probe.measure("x").unwrap();
        assert!((200..=300).contains(&latency));
    }

    #[test]
    fn test_fixed_and_closure_probes() {
        let mut fixed = FixedProbe(-3);
        assert_eq!(fixed.measure("anywhere").unwrap(), -3);

        let mut by_length = |source: &str| source.len() as i64;
        assert_eq!(by_length.measure("Tokyo").unwrap(), 5);
    }
}
