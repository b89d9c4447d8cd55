//! Word-guessing by evolutionary search.
//!
//! `evoguess` converges on a hidden target word with a genetic algorithm and
//! reports progress one generation at a time, so a caller can render
//! convergence as it happens:
//!
//! - **[`engine`]**: the search engine: random population initialization,
//!   Hamming-distance cost, tournament selection, single-point crossover,
//!   per-position mutation, and elitist generational replacement.
//! - **[`session`]**: a thin facade owning one engine per game, exposing
//!   `start`/`step`/`is_finished`/`best` for turn-taking callers.
//!
//! # Architecture
//!
//! The engine is synchronous and single-threaded: every `step()` fully
//! replaces the population and advances the generation counter before
//! returning, with no I/O and no suspension points. Randomness is owned by
//! the engine (a PCG generator seeded from
//! [`engine::EngineConfig::seed`]), so a fixed seed reproduces an entire
//! run byte for byte.

pub mod engine;
pub mod session;
