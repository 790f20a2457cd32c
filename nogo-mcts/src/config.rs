//! Search configuration parameters.

use std::time::Duration;

use crate::playout::PlayoutPolicy;

/// Configuration for the NoGo tree search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Wall-clock budget per move. The check runs after each completed
    /// simulation; there is no mid-simulation preemption.
    pub budget: Duration,

    /// Hard cap on simulations per move, bounding the search when the
    /// wall-clock budget is generous (or replaced by the cap in tests).
    pub max_simulations: u32,

    /// RAVE mixing weight beta: the child score blends
    /// `(1 - beta) * Q + beta * Q_rave`.
    pub rave_bias: f32,

    /// Virtual RAVE sample count seeded into every new node, so the RAVE
    /// mean is well-defined before any real sample arrives.
    pub rave_prior_visits: u32,

    /// Virtual RAVE value sum seeded into every new node. Together with
    /// `rave_prior_visits` this fixes the initial RAVE mean (2.0 with the
    /// defaults).
    pub rave_prior_value: f32,

    /// Leaf evaluation policy.
    pub playout: PlayoutPolicy,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            budget: Duration::from_millis(1000),
            max_simulations: 900_000,
            rave_bias: 0.5,
            rave_prior_visits: 10,
            rave_prior_value: 20.0,
            playout: PlayoutPolicy::LibertyRollout,
        }
    }
}

impl SearchConfig {
    /// Create a config for deterministic tests: a small simulation cap with
    /// a budget large enough that the cap always binds first.
    pub fn for_testing() -> Self {
        Self {
            budget: Duration::from_secs(3600),
            max_simulations: 128,
            ..Self::default()
        }
    }

    /// Builder pattern: set the wall-clock budget.
    pub fn with_budget(mut self, budget: Duration) -> Self {
        self.budget = budget;
        self
    }

    /// Builder pattern: set the simulation cap.
    pub fn with_max_simulations(mut self, n: u32) -> Self {
        self.max_simulations = n;
        self
    }

    /// Builder pattern: set the RAVE mixing weight.
    pub fn with_rave_bias(mut self, beta: f32) -> Self {
        self.rave_bias = beta;
        self
    }

    /// Builder pattern: set the leaf evaluation policy.
    pub fn with_playout(mut self, playout: PlayoutPolicy) -> Self {
        self.playout = playout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.max_simulations, 900_000);
        assert!((config.rave_bias - 0.5).abs() < 1e-6);
        assert_eq!(config.rave_prior_visits, 10);
        assert!((config.rave_prior_value - 20.0).abs() < 1e-6);
        assert_eq!(config.playout, PlayoutPolicy::LibertyRollout);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SearchConfig::default()
            .with_max_simulations(500)
            .with_budget(Duration::from_millis(50))
            .with_playout(PlayoutPolicy::MobilityScore);

        assert_eq!(config.max_simulations, 500);
        assert_eq!(config.budget, Duration::from_millis(50));
        assert_eq!(config.playout, PlayoutPolicy::MobilityScore);
    }

    #[test]
    fn test_testing_config_cap_binds() {
        let config = SearchConfig::for_testing();
        assert!(config.budget >= Duration::from_secs(3600));
        assert!(config.max_simulations <= 1024);
    }
}
