use anyhow::{ensure, Result};

/// Construction-time simulation parameters.
///
/// Defaults match the classic setup: a 50x50 field, 4 workers, 15% of
/// cells alive initially, one generation every 200 ms.
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Side length of the square field.
    pub size: usize,
    /// Number of row bands computed in parallel per generation.
    pub workers: usize,
    /// Probability that a cell starts alive.
    pub fill_rate: f64,
    /// Milliseconds between generations while running.
    pub interval_ms: u64,
    /// Random seed for the initial fill (if `None`, then random seed is
    /// generated).
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            size: 50,
            workers: 4,
            fill_rate: 0.15,
            interval_ms: 200,
            seed: None,
        }
    }
}

impl SimConfig {
    pub const MIN_INTERVAL_MS: u64 = 50;
    pub const MAX_INTERVAL_MS: u64 = 500;

    /// Rejects configurations the simulation cannot start from.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.size >= 1, "grid side length must be positive");
        ensure!(self.workers >= 1, "worker count must be positive");
        ensure!(
            (0.0..=1.0).contains(&self.fill_rate),
            "fill rate {} outside [0, 1]",
            self.fill_rate
        );
        ensure!(
            (Self::MIN_INTERVAL_MS..=Self::MAX_INTERVAL_MS).contains(&self.interval_ms),
            "generation interval {} ms outside {}..={} ms",
            self.interval_ms,
            Self::MIN_INTERVAL_MS,
            Self::MAX_INTERVAL_MS
        );
        Ok(())
    }

    /// Clamps a requested speed change into the legal interval range.
    pub fn clamp_interval(interval_ms: u64) -> u64 {
        interval_ms.clamp(Self::MIN_INTERVAL_MS, Self::MAX_INTERVAL_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::SimConfig;

    #[test]
    fn default_config_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_each_malformed_field() {
        let zero_size = SimConfig {
            size: 0,
            ..Default::default()
        };
        assert!(zero_size.validate().is_err());

        let zero_workers = SimConfig {
            workers: 0,
            ..Default::default()
        };
        assert!(zero_workers.validate().is_err());

        let bad_fill = SimConfig {
            fill_rate: 1.5,
            ..Default::default()
        };
        assert!(bad_fill.validate().is_err());

        let negative_fill = SimConfig {
            fill_rate: -0.1,
            ..Default::default()
        };
        assert!(negative_fill.validate().is_err());

        let too_fast = SimConfig {
            interval_ms: 10,
            ..Default::default()
        };
        assert!(too_fast.validate().is_err());

        let too_slow = SimConfig {
            interval_ms: 1000,
            ..Default::default()
        };
        assert!(too_slow.validate().is_err());
    }

    #[test]
    fn clamp_interval_bounds() {
        assert_eq!(SimConfig::clamp_interval(10), SimConfig::MIN_INTERVAL_MS);
        assert_eq!(SimConfig::clamp_interval(200), 200);
        assert_eq!(SimConfig::clamp_interval(9999), SimConfig::MAX_INTERVAL_MS);
    }
}
