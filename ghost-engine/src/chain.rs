//! First-order Markov chain over integer states
//!
//! Training counts transitions over consecutive pairs; generation walks the
//! counts with a fixed-seed ChaCha8 stream so runs are reproducible.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::BTreeMap;

/// Transition-counting Markov chain
///
/// BTreeMaps keep state iteration ordered, which the cumulative walk in
/// `generate` relies on for reproducibility.
#[derive(Clone, Debug, Default)]
pub struct MarkovChain {
    transitions: BTreeMap<i64, BTreeMap<i64, u64>>,
}

impl MarkovChain {
    /// Create an untrained chain
    pub fn new() -> Self {
        Self::default()
    }

    /// Count transitions over every consecutive pair in the sequence
    pub fn train(&mut self, sequence: &[i64]) {
        for pair in sequence.windows(2) {
            *self
                .transitions
                .entry(pair[0])
                .or_default()
                .entry(pair[1])
                .or_default() += 1;
        }
    }

    /// Transition probability from one state to another
    ///
    /// 0.0 when `from` has no outgoing mass.
    pub fn probability(&self, from: i64, to: i64) -> f64 {
        let outgoing = match self.transitions.get(&from) {
            Some(outgoing) => outgoing,
            None => return 0.0,
        };
        let total: u64 = outgoing.values().sum();
        if total == 0 {
            return 0.0;
        }
        outgoing.get(&to).copied().unwrap_or(0) as f64 / total as f64
    }

    /// Number of states with outgoing transitions
    pub fn states(&self) -> usize {
        self.transitions.len()
    }

    /// Generate a walk of up to `length` states starting from `start`
    ///
    /// The walk always begins with `start` and stops early at a state with
    /// no outgoing transitions. The same seed reproduces the same walk.
    pub fn generate(&self, seed: u64, start: i64, length: usize) -> Vec<i64> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut walk = vec![start];
        let mut current = start;

        while walk.len() < length {
            let options = match self.transitions.get(&current) {
                Some(options) if !options.is_empty() => options,
                _ => break,
            };
            let total: u64 = options.values().sum();
            let pick = rng.gen_range(1..=total);

            let mut cumulative = 0;
            for (&state, &count) in options {
                cumulative += count;
                if cumulative >= pick {
                    current = state;
                    break;
                }
            }
            walk.push(current);
        }
        walk
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRAINING: [i64; 14] = [1, 2, 3, 2, 3, 4, 3, 4, 5, 4, 5, 1, 2, 3];

    #[test]
    fn test_train_counts_pairs() {
        let mut chain = MarkovChain::new();
        chain.train(&TRAINING);

        // state 2 transitions to 3 every time
        assert_eq!(chain.probability(2, 3), 1.0);
        // state 3 goes to 2 once and to 4 twice
        assert!((chain.probability(3, 4) - 2.0 / 3.0).abs() < 1e-12);
        assert!((chain.probability(3, 2) - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(chain.states(), 5);
    }

    #[test]
    fn test_probability_unknown_state() {
        let chain = MarkovChain::new();
        assert_eq!(chain.probability(1, 2), 0.0);
    }

    #[test]
    fn test_generate_reproducible() {
        let mut chain = MarkovChain::new();
        chain.train(&TRAINING);

        let a = chain.generate(44, 1, 20);
        let b = chain.generate(44, 1, 20);
        assert_eq!(a, b);
        assert_eq!(a[0], 1);
        assert!(a.len() <= 20);

        // every generated step is a trained transition
        for pair in a.windows(2) {
            assert!(chain.probability(pair[0], pair[1]) > 0.0);
        }
    }

    #[test]
    fn test_generate_stops_at_dead_end() {
        let mut chain = MarkovChain::new();
        chain.train(&[1, 2]);

        // 2 has no outgoing transitions
        assert_eq!(chain.generate(7, 2, 10), vec![2]);
        assert_eq!(chain.generate(7, 1, 10), vec![1, 2]);
    }
}
