//! ACO configuration.

/// Configuration for the ant colony solver.
///
/// # Examples
///
/// ```
/// use antrail::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_num_ants(50)
///     .with_num_iterations(100)
///     .with_beta(2.0)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct AcoConfig {
    /// Index of the tour's start node. Index 0 is conventionally the
    /// caller's own start location.
    pub start: usize,

    /// Number of ants released per iteration.
    pub num_ants: usize,

    /// Number of colony iterations. The solver always runs exactly this
    /// many; there is no early-termination policy.
    pub num_iterations: usize,

    /// Pheromone-influence exponent (alpha). Higher values make ants
    /// follow established trails more aggressively.
    pub alpha: f64,

    /// Distance-influence exponent (beta). Higher values make ants
    /// greedier toward near nodes.
    pub beta: f64,

    /// Pheromone evaporation rate (rho) in `[0, 1)`. 0 disables
    /// evaporation; values close to 1 cause rapid forgetting.
    pub evaporation_rate: f64,

    /// Pheromone deposit coefficient (Q). Each ant deposits `Q / cost`
    /// on every directed edge of its tour.
    pub deposit: f64,

    /// Emit one progress line per iteration to stdout.
    pub verbose: bool,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            start: 0,
            num_ants: 20,
            num_iterations: 50,
            alpha: 1.0,
            beta: 5.0,
            evaporation_rate: 0.4,
            deposit: 1000.0,
            verbose: false,
            seed: None,
        }
    }
}

impl AcoConfig {
    pub fn with_start(mut self, start: usize) -> Self {
        self.start = start;
        self
    }

    pub fn with_num_ants(mut self, n: usize) -> Self {
        self.num_ants = n;
        self
    }

    pub fn with_num_iterations(mut self, n: usize) -> Self {
        self.num_iterations = n;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_evaporation_rate(mut self, rho: f64) -> Self {
        self.evaporation_rate = rho;
        self
    }

    pub fn with_deposit(mut self, q: f64) -> Self {
        self.deposit = q;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// The start index is checked against the matrix at run time, not
    /// here, since the configuration does not know the matrix size.
    pub fn validate(&self) -> Result<(), String> {
        if self.num_ants == 0 {
            return Err("num_ants must be at least 1".into());
        }
        if self.num_iterations == 0 {
            return Err("num_iterations must be at least 1".into());
        }
        if !(0.0..1.0).contains(&self.evaporation_rate) {
            return Err(format!(
                "evaporation_rate must be in [0, 1), got {}",
                self.evaporation_rate
            ));
        }
        if !self.alpha.is_finite() || !self.beta.is_finite() {
            return Err("alpha and beta must be finite".into());
        }
        if !self.deposit.is_finite() || self.deposit < 0.0 {
            return Err(format!(
                "deposit must be finite and non-negative, got {}",
                self.deposit
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AcoConfig::default();
        assert_eq!(config.start, 0);
        assert_eq!(config.num_ants, 20);
        assert_eq!(config.num_iterations, 50);
        assert!((config.alpha - 1.0).abs() < 1e-10);
        assert!((config.beta - 5.0).abs() < 1e-10);
        assert!((config.evaporation_rate - 0.4).abs() < 1e-10);
        assert!((config.deposit - 1000.0).abs() < 1e-10);
        assert!(!config.verbose);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_validate_ok() {
        assert!(AcoConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_ants() {
        assert!(AcoConfig::default().with_num_ants(0).validate().is_err());
    }

    #[test]
    fn test_validate_zero_iterations() {
        assert!(AcoConfig::default()
            .with_num_iterations(0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_evaporation_range() {
        assert!(AcoConfig::default()
            .with_evaporation_rate(1.0)
            .validate()
            .is_err());
        assert!(AcoConfig::default()
            .with_evaporation_rate(-0.1)
            .validate()
            .is_err());
        assert!(AcoConfig::default()
            .with_evaporation_rate(0.0)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_negative_deposit() {
        assert!(AcoConfig::default().with_deposit(-1.0).validate().is_err());
    }
}
