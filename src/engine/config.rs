//! Engine configuration.
//!
//! [`EngineConfig`] holds every parameter that controls the evolutionary
//! search. Out-of-range values are rejected by [`EngineConfig::validate`]
//! at engine construction, never discovered mid-run.

use super::types::ConfigError;

/// Configuration for the word-guessing search engine.
///
/// # Defaults
///
/// ```
/// use evoguess::engine::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.population_size, 20);
/// assert_eq!(config.max_generations, 1000);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use evoguess::engine::EngineConfig;
///
/// let config = EngineConfig::default()
///     .with_population_size(50)
///     .with_mutation_rate(0.05)
///     .with_tournament_size(5)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Number of individuals in each generation.
    ///
    /// Larger populations increase diversity but cost more per step.
    /// Typical range: 10–100.
    pub population_size: usize,

    /// Per-position probability of replacing a letter with a uniform
    /// random draw (0.0–1.0).
    ///
    /// This is a trial probability, not a guaranteed-change probability:
    /// the replacement may coincide with the original letter.
    pub mutation_rate: f64,

    /// Generation cap. The engine is terminal once the generation counter
    /// reaches this value; further steps are no-ops.
    pub max_generations: usize,

    /// Sample size for tournament parent selection, capped at the
    /// population size. Higher values mean stronger selection pressure.
    pub tournament_size: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` seeds from entropy. A fixed seed reproduces the entire
    /// sequence of generations byte for byte.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            population_size: 20,
            mutation_rate: 0.1,
            max_generations: 1000,
            tournament_size: 3,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the per-position mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the generation cap.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the tournament sample size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Preset for quick demos: small population, short run.
    ///
    /// - Population: 10, Generations: 200
    pub fn fast() -> Self {
        Self {
            population_size: 10,
            max_generations: 200,
            ..Self::default()
        }
    }

    /// Preset for long words: larger population, gentler mutation,
    /// generous generation cap.
    ///
    /// - Population: 50, Mutation: 0.05, Generations: 5000
    pub fn thorough() -> Self {
        Self {
            population_size: 50,
            mutation_rate: 0.05,
            max_generations: 5000,
            ..Self::default()
        }
    }

    /// Validates the configuration.
    ///
    /// Rates are not clamped: a value outside its range is an error, so a
    /// misconfigured caller finds out at construction.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 1 {
            return Err(ConfigError::PopulationTooSmall);
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::MutationRateOutOfRange(self.mutation_rate));
        }
        if self.tournament_size < 2 {
            return Err(ConfigError::TournamentTooSmall);
        }
        Ok(())
    }
}
