//! SA configuration.

/// Configuration for one annealing solve.
///
/// # Examples
///
/// ```
/// use knapsack_anneal::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(250.0)
///     .with_steps_per_round(500)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct SaConfig {
    /// Starting temperature. Higher values accept more worsening moves
    /// early in the search.
    pub initial_temperature: f64,

    /// Inner search steps per cooling round.
    pub steps_per_round: usize,

    /// Geometric cooling factor in (0, 1), applied once per round.
    pub cooling_factor: f64,

    /// Random seed for reproducibility. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 100.0,
            steps_per_round: 100,
            cooling_factor: 0.85,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_steps_per_round(mut self, n: usize) -> Self {
        self.steps_per_round = n;
        self
    }

    pub fn with_cooling_factor(mut self, factor: f64) -> Self {
        self.cooling_factor = factor;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err(format!(
                "initial_temperature must be positive, got {}",
                self.initial_temperature
            ));
        }
        if self.steps_per_round == 0 {
            return Err("steps_per_round must be at least 1".into());
        }
        if !(self.cooling_factor > 0.0 && self.cooling_factor < 1.0) {
            return Err(format!(
                "cooling_factor must be in (0, 1), got {}",
                self.cooling_factor
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = SaConfig::default();
        assert_eq!(config.initial_temperature, 100.0);
        assert_eq!(config.steps_per_round, 100);
        assert_eq!(config.cooling_factor, 0.85);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_config_builder() {
        let config = SaConfig::default()
            .with_initial_temperature(50.0)
            .with_steps_per_round(10)
            .with_cooling_factor(0.9)
            .with_seed(123);

        assert_eq!(config.initial_temperature, 50.0);
        assert_eq!(config.steps_per_round, 10);
        assert_eq!(config.cooling_factor, 0.9);
        assert_eq!(config.seed, Some(123));
    }

    #[test]
    fn test_config_validation() {
        assert!(SaConfig::default().validate().is_ok());

        let zero_temp = SaConfig::default().with_initial_temperature(0.0);
        assert!(zero_temp.validate().is_err());

        let nan_temp = SaConfig::default().with_initial_temperature(f64::NAN);
        assert!(nan_temp.validate().is_err());

        let zero_steps = SaConfig::default().with_steps_per_round(0);
        assert!(zero_steps.validate().is_err());

        let hot_cooling = SaConfig::default().with_cooling_factor(1.0);
        assert!(hot_cooling.validate().is_err());

        let negative_cooling = SaConfig::default().with_cooling_factor(-0.1);
        assert!(negative_cooling.validate().is_err());
    }
}
