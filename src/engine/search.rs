//! Stepwise evolutionary search loop.
//!
//! [`SearchEngine`] owns one population and advances it a single
//! generation per [`step`](SearchEngine::step) call:
//! selection → crossover → mutation → replacement → best tracking.

use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::config::EngineConfig;
use super::selection::tournament_pair;
use super::types::{random_letter, ConfigError, Individual, StepReport};

/// Genetic search engine converging on a hidden target word.
///
/// The engine has two states. It is *running* while the best cost is
/// positive and the generation counter is below the cap; it is *terminal*
/// once either condition fails. Terminal is absorbing: further `step()`
/// calls return the current state unchanged with `improved = false`.
///
/// Elitism of one guarantees the running best survives every replacement,
/// so the best cost never increases across steps.
///
/// # Usage
///
/// ```
/// use evoguess::engine::{EngineConfig, SearchEngine};
///
/// let config = EngineConfig::default().with_seed(42);
/// let mut engine = SearchEngine::new("cat", config)?;
///
/// let initial = engine.initialize_population();
/// assert_eq!(initial.generation, 0);
///
/// while !engine.is_terminal() {
///     let report = engine.step();
///     assert!(report.best_cost <= 3);
/// }
/// # Ok::<(), evoguess::engine::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SearchEngine {
    target: Vec<u8>,
    config: EngineConfig,
    rng: Pcg32,
    population: Vec<Individual>,
    generation: usize,
    best: Option<Individual>,
    cost_history: Vec<usize>,
}

impl SearchEngine {
    /// Creates an engine for `target`.
    ///
    /// The target is lower-cased and its length is fixed for the lifetime
    /// of the engine. Empty or non-ASCII-alphabetic targets and
    /// out-of-range parameters are rejected here, never mid-run.
    pub fn new(target: &str, config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        if target.is_empty() {
            return Err(ConfigError::EmptyTarget);
        }
        if let Some(bad) = target.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(ConfigError::TargetNotAlphabetic(bad));
        }

        let rng = match config.seed {
            Some(seed) => Pcg32::seed_from_u64(seed),
            None => Pcg32::from_rng(&mut rand::rng()),
        };

        Ok(Self {
            target: target.to_ascii_lowercase().into_bytes(),
            config,
            rng,
            population: Vec::new(),
            generation: 0,
            best: None,
            cost_history: Vec::new(),
        })
    }

    /// Creates the initial random population and the first best.
    ///
    /// Produces `population_size` uniformly random words, resets the
    /// generation counter to 0, and scans once for the lowest-cost
    /// individual (first occurrence wins ties). The returned report has
    /// `improved = true`: the first best is an improvement over nothing.
    ///
    /// Calling this again restarts the search from scratch; the previous
    /// best and history are discarded.
    pub fn initialize_population(&mut self) -> StepReport {
        self.population = (0..self.config.population_size)
            .map(|_| Individual::random(&self.target, &mut self.rng))
            .collect();
        self.generation = 0;

        let best = best_of(&self.population).clone();
        debug!(
            "initialized population of {} ({}-letter words), best cost {}",
            self.population.len(),
            self.target.len(),
            best.cost()
        );
        self.cost_history = vec![best.cost()];
        self.best = Some(best.clone());

        StepReport {
            generation: 0,
            best_cost: best.cost(),
            best_guess: best,
            improved: true,
        }
    }

    /// Advances the search by one generation.
    ///
    /// When the engine is terminal this is an idempotent no-op returning
    /// the current state with `improved = false`. Otherwise the next
    /// generation is seeded with the running best, filled with mutated
    /// crossover children of tournament-selected parents, and swapped in
    /// whole. Breeding stops as soon as a child matches the target
    /// exactly; any shortfall is padded with fresh random individuals so
    /// the population size stays fixed.
    ///
    /// # Panics
    ///
    /// Panics if called before [`initialize_population`](Self::initialize_population).
    pub fn step(&mut self) -> StepReport {
        let elite = self
            .best
            .as_ref()
            .expect("initialize_population must be called before step")
            .clone();

        if self.is_terminal() {
            return self.report(false);
        }

        let mut next = Vec::with_capacity(self.config.population_size);
        next.push(elite);
        while next.len() < self.config.population_size {
            let (p1, p2) =
                tournament_pair(&self.population, self.config.tournament_size, &mut self.rng);
            let mut letters = crossover(
                self.population[p1].letters(),
                self.population[p2].letters(),
                &mut self.rng,
            );
            mutate(&mut letters, self.config.mutation_rate, &mut self.rng);
            let child = Individual::new(letters, &self.target);
            let solved = child.cost() == 0;
            next.push(child);
            if solved {
                break;
            }
        }
        // After an early exact match, keep the population-size invariant.
        while next.len() < self.config.population_size {
            next.push(Individual::random(&self.target, &mut self.rng));
        }

        self.population = next;
        self.generation += 1;

        let generation_best = best_of(&self.population);
        let improved = generation_best.cost() < self.best_cost();
        if improved {
            debug!(
                "generation {}: best cost {} -> {} ({})",
                self.generation,
                self.best_cost(),
                generation_best.cost(),
                generation_best
            );
            self.best = Some(generation_best.clone());
        }
        self.cost_history.push(self.best_cost());
        trace!("generation {}: best cost {}", self.generation, self.best_cost());

        self.report(improved)
    }

    /// Whether the search has stopped: exact match found or generation cap
    /// reached. Terminal engines ignore further `step()` calls.
    ///
    /// # Panics
    ///
    /// Panics if called before [`initialize_population`](Self::initialize_population).
    pub fn is_terminal(&self) -> bool {
        self.best_cost() == 0 || self.generation >= self.config.max_generations
    }

    /// Current generation index (0 right after initialization).
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Lowest-cost individual observed across all generations.
    ///
    /// # Panics
    ///
    /// Panics if called before [`initialize_population`](Self::initialize_population).
    pub fn best_guess(&self) -> &Individual {
        self.best
            .as_ref()
            .expect("initialize_population must be called before best_guess")
    }

    /// Cost of the running best. Monotonically non-increasing.
    ///
    /// # Panics
    ///
    /// Panics if called before [`initialize_population`](Self::initialize_population).
    pub fn best_cost(&self) -> usize {
        self.best_guess().cost()
    }

    /// The generation cap.
    pub fn max_generations(&self) -> usize {
        self.config.max_generations
    }

    /// The current generation's individuals. Empty before initialization;
    /// exactly `population_size` long afterwards.
    pub fn population(&self) -> &[Individual] {
        &self.population
    }

    /// The lower-cased target word.
    pub fn target(&self) -> &str {
        std::str::from_utf8(&self.target).expect("target is ASCII")
    }

    /// Best cost after initialization and after each completed step.
    ///
    /// One entry per row of a convergence plot: `1 + completed_steps`
    /// entries, non-increasing. Terminal no-op steps add nothing.
    pub fn cost_history(&self) -> &[usize] {
        &self.cost_history
    }

    /// The engine's configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn report(&self, improved: bool) -> StepReport {
        let best = self.best_guess();
        StepReport {
            generation: self.generation,
            best_guess: best.clone(),
            best_cost: best.cost(),
            improved,
        }
    }
}

/// Lowest-cost individual; first occurrence wins ties.
fn best_of(population: &[Individual]) -> &Individual {
    population
        .iter()
        .reduce(|best, ind| if ind.cost() < best.cost() { ind } else { best })
        .expect("population must not be empty")
}

/// Single-point recombination.
///
/// Concatenates `p1`'s prefix up to a uniform split in `[1, L-1]` with
/// `p2`'s suffix from the split. Words shorter than two letters have no
/// split point; `p1` is returned unchanged.
fn crossover<R: Rng>(p1: &[u8], p2: &[u8], rng: &mut R) -> Vec<u8> {
    assert_eq!(p1.len(), p2.len(), "parents must have equal length");
    if p1.len() < 2 {
        return p1.to_vec();
    }
    let split = rng.random_range(1..p1.len());
    let mut child = p1[..split].to_vec();
    child.extend_from_slice(&p2[split..]);
    child
}

/// Per-position mutation trial.
///
/// Each letter is independently replaced with probability `rate` by a
/// uniform random draw, which may repeat the original letter.
fn mutate<R: Rng>(letters: &mut [u8], rate: f64, rng: &mut R) {
    for letter in letters.iter_mut() {
        if rng.random_range(0.0..1.0) < rate {
            *letter = random_letter(rng);
        }
    }
}
