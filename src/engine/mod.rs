//! Genetic word-guessing search engine.
//!
//! The engine evolves a population of candidate words toward a hidden
//! target, one generation per [`SearchEngine::step`] call. Cost is the
//! Hamming distance to the target (count of position-wise mismatches), so
//! cost 0 means the word has been guessed exactly.
//!
//! # Key Types
//!
//! - [`EngineConfig`]: tunable parameters (population size, mutation rate,
//!   generation cap, tournament size, RNG seed)
//! - [`SearchEngine`]: owns the population, the running best, and the RNG;
//!   drives one generational update per `step()`
//! - [`Individual`]: a candidate word with its cached cost
//! - [`StepReport`]: per-step progress snapshot for callers rendering
//!   convergence
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

mod config;
mod search;
mod selection;
mod types;

pub use config::EngineConfig;
pub use search::SearchEngine;
pub use types::{hamming_cost, ConfigError, Individual, StepReport};
