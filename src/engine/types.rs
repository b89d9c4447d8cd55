//! Core value types for the search engine.

use std::fmt;

use rand::Rng;

/// Rejected configuration or target input.
///
/// Every variant is detectable at construction time; nothing here is
/// discovered mid-run.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("target word must not be empty")]
    EmptyTarget,
    #[error("target word must contain only ASCII letters, found {0:?}")]
    TargetNotAlphabetic(char),
    #[error("population_size must be at least 1")]
    PopulationTooSmall,
    #[error("mutation_rate must be within [0.0, 1.0], got {0}")]
    MutationRateOutOfRange(f64),
    #[error("tournament_size must be at least 2")]
    TournamentTooSmall,
}

/// Number of position-wise mismatches between two equal-length words.
///
/// Cost 0 means the words are identical; the maximum is the word length.
///
/// # Panics
///
/// Panics if the inputs have different lengths. The engine only ever
/// compares words of the target's length.
pub fn hamming_cost(a: &[u8], b: &[u8]) -> usize {
    assert_eq!(a.len(), b.len(), "words must have equal length");
    a.iter().zip(b.iter()).filter(|(x, y)| x != y).count()
}

/// Uniform draw from the lowercase alphabet.
pub(crate) fn random_letter<R: Rng>(rng: &mut R) -> u8 {
    rng.random_range(b'a'..=b'z')
}

/// A candidate word: a fixed-length sequence of lowercase ASCII letters
/// with its cost against the target cached at construction.
///
/// Individuals are plain values. Many individuals in a population may be
/// letter-for-letter equal; none has any identity beyond its letters.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual {
    letters: Vec<u8>,
    cost: usize,
}

impl Individual {
    /// Builds an individual from raw letters, scoring it against `target`.
    pub(crate) fn new(letters: Vec<u8>, target: &[u8]) -> Self {
        let cost = hamming_cost(&letters, target);
        Self { letters, cost }
    }

    /// Uniformly random word of the target's length, scored against it.
    pub(crate) fn random<R: Rng>(target: &[u8], rng: &mut R) -> Self {
        let letters = (0..target.len()).map(|_| random_letter(rng)).collect();
        Self::new(letters, target)
    }

    /// The word as a string slice.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.letters).expect("letters are ASCII")
    }

    /// Cached Hamming cost against the target. 0 is an exact match.
    pub fn cost(&self) -> usize {
        self.cost
    }

    /// Word length in letters.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false in practice: the engine rejects empty targets.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub(crate) fn letters(&self) -> &[u8] {
        &self.letters
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Progress snapshot returned by population initialization and by each
/// generation step.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepReport {
    /// Generation index after the operation (0 right after initialization).
    pub generation: usize,

    /// Lowest-cost individual observed across all generations so far.
    pub best_guess: Individual,

    /// Cost of `best_guess`. Never increases from one report to the next.
    pub best_cost: usize,

    /// Whether this operation strictly lowered the running best cost.
    /// Initialization reports `true`; terminal no-op steps report `false`.
    pub improved: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_hamming_identical() {
        assert_eq!(hamming_cost(b"cat", b"cat"), 0);
    }

    #[test]
    fn test_hamming_counts_mismatches() {
        assert_eq!(hamming_cost(b"cat", b"cut"), 1);
        assert_eq!(hamming_cost(b"cat", b"dog"), 3);
        assert_eq!(hamming_cost(b"abcd", b"abdc"), 2);
    }

    #[test]
    #[should_panic(expected = "words must have equal length")]
    fn test_hamming_length_mismatch_panics() {
        hamming_cost(b"cat", b"cats");
    }

    #[test]
    fn test_random_individual_shape() {
        let mut rng = Pcg32::seed_from_u64(42);
        let target = b"evolve";
        let ind = Individual::random(target, &mut rng);
        assert_eq!(ind.len(), 6);
        assert!(ind.letters().iter().all(u8::is_ascii_lowercase));
        assert!(ind.cost() <= 6);
    }

    #[test]
    fn test_random_letters_cover_alphabet() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut seen = [false; 26];
        for _ in 0..10_000 {
            seen[(random_letter(&mut rng) - b'a') as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "every letter should appear");
    }

    #[test]
    fn test_display_is_the_word() {
        let ind = Individual::new(b"cat".to_vec(), b"cat");
        assert_eq!(ind.to_string(), "cat");
        assert_eq!(ind.as_str(), "cat");
    }

    #[test]
    fn test_config_error_messages() {
        assert_eq!(
            ConfigError::EmptyTarget.to_string(),
            "target word must not be empty"
        );
        assert_eq!(
            ConfigError::TargetNotAlphabetic('7').to_string(),
            "target word must contain only ASCII letters, found '7'"
        );
        assert_eq!(
            ConfigError::MutationRateOutOfRange(1.5).to_string(),
            "mutation_rate must be within [0.0, 1.0], got 1.5"
        );
    }

    proptest! {
        #[test]
        fn prop_cost_within_bounds(pairs in proptest::collection::vec((b'a'..=b'z', b'a'..=b'z'), 1..32)) {
            let (a, b): (Vec<u8>, Vec<u8>) = pairs.into_iter().unzip();
            let cost = hamming_cost(&a, &b);
            prop_assert!(cost <= a.len());
        }

        #[test]
        fn prop_cost_zero_iff_equal(pairs in proptest::collection::vec((b'a'..=b'z', b'a'..=b'z'), 1..32)) {
            let (a, b): (Vec<u8>, Vec<u8>) = pairs.into_iter().unzip();
            prop_assert_eq!(hamming_cost(&a, &b) == 0, a == b);
        }

        #[test]
        fn prop_cost_symmetric(pairs in proptest::collection::vec((b'a'..=b'z', b'a'..=b'z'), 1..32)) {
            let (a, b): (Vec<u8>, Vec<u8>) = pairs.into_iter().unzip();
            prop_assert_eq!(hamming_cost(&a, &b), hamming_cost(&b, &a));
        }
    }
}
