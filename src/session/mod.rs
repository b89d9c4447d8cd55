//! One-game-at-a-time session facade.
//!
//! [`Session`] owns an optional [`SearchEngine`] slot with explicit
//! transitions: [`start`](Session::start) builds and initializes a fresh
//! engine for a target word, [`step`](Session::step) forwards to it, and
//! [`is_finished`](Session::is_finished) / [`best`](Session::best) are pure
//! derivations of engine state. Presentation (tables, plots, prompts) is
//! the caller's business; the facade only hands out progress reports.

use log::debug;

use crate::engine::{ConfigError, EngineConfig, Individual, SearchEngine, StepReport};

/// Drives one word-guessing game at a time.
///
/// # Usage
///
/// ```
/// use evoguess::engine::EngineConfig;
/// use evoguess::session::Session;
///
/// let mut session = Session::new(EngineConfig::default().with_seed(42));
/// let initial = session.start("cat")?;
/// assert_eq!(initial.generation, 0);
///
/// while !session.is_finished() {
///     session.step();
/// }
///
/// let (guess, cost) = session.best();
/// assert!(cost <= 3);
/// println!("final guess: {guess} (cost {cost})");
/// # Ok::<(), evoguess::engine::ConfigError>(())
/// ```
///
/// # Panics
///
/// [`step`](Session::step), [`is_finished`](Session::is_finished) and
/// [`best`](Session::best) panic when no game has been started; call
/// [`start`](Session::start) first. The facade is not for concurrent use;
/// a caller driving one session from several threads must serialize
/// access.
#[derive(Debug, Clone, Default)]
pub struct Session {
    config: EngineConfig,
    engine: Option<SearchEngine>,
}

impl Session {
    /// Creates a session; every game started on it uses `config`.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            engine: None,
        }
    }

    /// Starts a new game against `target`.
    ///
    /// Builds a fresh engine, initializes its population, and returns the
    /// generation-0 report. Starting while a game is active replaces it;
    /// the previous game's state is discarded.
    pub fn start(&mut self, target: &str) -> Result<StepReport, ConfigError> {
        let mut engine = SearchEngine::new(target, self.config.clone())?;
        let report = engine.initialize_population();
        debug!(
            "game started: {}-letter target, population {}, cap {}",
            engine.target().len(),
            self.config.population_size,
            self.config.max_generations
        );
        self.engine = Some(engine);
        Ok(report)
    }

    /// Advances the active game by one generation.
    ///
    /// A no-op returning the unchanged state once the game is finished.
    pub fn step(&mut self) -> StepReport {
        self.active_mut().step()
    }

    /// Whether the active game is over: exact match or generation cap.
    pub fn is_finished(&self) -> bool {
        let engine = self.active();
        engine.best_cost() == 0 || engine.generation() >= engine.max_generations()
    }

    /// The active game's best guess so far and its cost.
    pub fn best(&self) -> (&Individual, usize) {
        let engine = self.active();
        (engine.best_guess(), engine.best_cost())
    }

    /// Whether a game has been started and not cleared.
    pub fn is_active(&self) -> bool {
        self.engine.is_some()
    }

    /// The active engine, for callers rendering per-generation detail
    /// beyond the running best.
    pub fn engine(&self) -> Option<&SearchEngine> {
        self.engine.as_ref()
    }

    /// The configuration applied to every game.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Ends the active game, if any.
    pub fn clear(&mut self) {
        self.engine = None;
    }

    fn active(&self) -> &SearchEngine {
        self.engine
            .as_ref()
            .expect("no active game: call start() first")
    }

    fn active_mut(&mut self) -> &mut SearchEngine {
        self.engine
            .as_mut()
            .expect("no active game: call start() first")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> Session {
        Session::new(EngineConfig::default().with_seed(42))
    }

    #[test]
    fn test_start_returns_generation_zero() {
        let mut session = seeded();
        let report = session.start("cat").expect("valid target");
        assert_eq!(report.generation, 0);
        assert!(report.improved);
        assert!(session.is_active());
    }

    #[test]
    fn test_invalid_target_is_rejected() {
        let mut session = seeded();
        assert_eq!(session.start("").err(), Some(ConfigError::EmptyTarget));
        assert_eq!(
            session.start("c4t").err(),
            Some(ConfigError::TargetNotAlphabetic('4'))
        );
        assert!(!session.is_active(), "failed start must not activate a game");
    }

    #[test]
    fn test_game_runs_to_finish() {
        let mut session = Session::new(
            EngineConfig::default().with_max_generations(30).with_seed(42),
        );
        session.start("word").expect("valid target");

        let mut previous = usize::MAX;
        while !session.is_finished() {
            let report = session.step();
            assert!(report.best_cost <= previous);
            previous = report.best_cost;
        }

        let (guess, cost) = session.best();
        assert_eq!(guess.cost(), cost);
        assert!(cost == 0 || session.engine().unwrap().generation() == 30);
    }

    #[test]
    fn test_step_after_finish_is_no_op() {
        let mut session = Session::new(
            EngineConfig::default().with_max_generations(5).with_seed(42),
        );
        session.start("word").expect("valid target");
        while !session.is_finished() {
            session.step();
        }
        let a = session.step();
        let b = session.step();
        assert_eq!(a, b);
        assert!(!a.improved);
        assert!(session.is_finished());
    }

    #[test]
    fn test_restart_replaces_game() {
        let mut session = seeded();
        session.start("first").expect("valid target");
        for _ in 0..5 {
            session.step();
        }

        let report = session.start("second").expect("valid target");
        assert_eq!(report.generation, 0);
        let engine = session.engine().expect("active engine");
        assert_eq!(engine.target(), "second");
        assert_eq!(engine.generation(), 0);
    }

    #[test]
    fn test_clear_ends_game() {
        let mut session = seeded();
        session.start("cat").expect("valid target");
        session.clear();
        assert!(!session.is_active());
        assert!(session.engine().is_none());
    }

    #[test]
    #[should_panic(expected = "no active game: call start() first")]
    fn test_step_without_start_panics() {
        let mut session = seeded();
        session.step();
    }

    #[test]
    #[should_panic(expected = "no active game: call start() first")]
    fn test_best_without_start_panics() {
        let session = seeded();
        session.best();
    }

    #[test]
    #[should_panic(expected = "no active game: call start() first")]
    fn test_is_finished_without_start_panics() {
        let session = seeded();
        session.is_finished();
    }

    #[test]
    fn test_default_session_uses_default_config() {
        let session = Session::default();
        assert_eq!(session.config(), &EngineConfig::default());
        assert!(!session.is_active());
    }

    #[test]
    fn test_same_seed_same_game() {
        let run = || {
            let mut session = Session::new(
                EngineConfig::default().with_max_generations(20).with_seed(99),
            );
            let mut reports = vec![session.start("replay").expect("valid target")];
            while !session.is_finished() {
                reports.push(session.step());
            }
            reports
        };
        assert_eq!(run(), run());
    }
}
