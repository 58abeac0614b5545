//! Random sources for word, hint and move selection.
//!
//! Everything random in the games goes through [`RandomSource`], so a test can
//! hand in a [`ScriptedRng`] and know exactly which word, hint letter or
//! computer move comes out. [`GameRng`] is the seeded production source.
//!
//! ```
//! use terminal_games::rng::{GameRng, RandomSource};
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.choose_index(12), b.choose_index(12));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Uniform choice of an index in `0..len`.
pub trait RandomSource {
    /// `len` must be non-zero; zero yields 0.
    fn choose_index(&mut self, len: usize) -> usize;
}

/// Choose an element of `slice` uniformly, `None` if it is empty.
pub fn choose<'a, T>(rng: &mut dyn RandomSource, slice: &'a [T]) -> Option<&'a T> {
    if slice.is_empty() {
        return None;
    }
    slice.get(rng.choose_index(slice.len()))
}

/// Deterministic RNG backed by ChaCha8.
///
/// The same seed always produces the same games.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed from OS entropy. Use [`GameRng::seed`] to replay the session.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn choose_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.inner.gen_range(0..len)
    }
}

/// Replays a fixed list of indices, wrapping around when exhausted.
///
/// Each scripted value is reduced modulo the requested length, so a script
/// can be written without knowing the exact list sizes.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    script: Vec<usize>,
    position: usize,
}

impl ScriptedRng {
    pub fn new(script: Vec<usize>) -> Self {
        Self {
            script,
            position: 0,
        }
    }

    /// How many values have been drawn so far.
    pub fn draws(&self) -> usize {
        self.position
    }
}

impl RandomSource for ScriptedRng {
    fn choose_index(&mut self, len: usize) -> usize {
        if len == 0 || self.script.is_empty() {
            self.position += 1;
            return 0;
        }
        let value = self.script[self.position % self.script.len()];
        self.position += 1;
        value % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);
        let seq_a: Vec<usize> = (0..20).map(|_| a.choose_index(100)).collect();
        let seq_b: Vec<usize> = (0..20).map(|_| b.choose_index(100)).collect();
        assert_eq!(seq_a, seq_b);
        assert_eq!(a.seed(), 42);
    }

    #[test]
    fn test_game_rng_stays_in_range() {
        let mut rng = GameRng::new(1);
        for len in 1..50 {
            assert!(rng.choose_index(len) < len);
        }
        assert_eq!(rng.choose_index(0), 0);
    }

    #[test]
    fn test_game_rng_covers_all_indices() {
        let mut rng = GameRng::new(3);
        let mut seen = [false; 3];
        for _ in 0..200 {
            seen[rng.choose_index(3)] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_scripted_rng_wraps_and_reduces() {
        let mut rng = ScriptedRng::new(vec![1, 5]);
        assert_eq!(rng.choose_index(3), 1);
        assert_eq!(rng.choose_index(3), 2); // 5 % 3
        assert_eq!(rng.choose_index(10), 1); // wrapped
        assert_eq!(rng.draws(), 3);
    }

    #[test]
    fn test_scripted_rng_empty_script() {
        let mut rng = ScriptedRng::default();
        assert_eq!(rng.choose_index(4), 0);
    }

    #[test]
    fn test_choose_helper() {
        let mut rng = ScriptedRng::new(vec![2]);
        let items = ["rock", "paper", "scissors"];
        assert_eq!(choose(&mut rng, &items), Some(&"scissors"));
        let empty: [&str; 0] = [];
        assert_eq!(choose(&mut rng, &empty), None);
    }
}
