//! Fingerprint-cached data processor
//!
//! Provides:
//! - Short BLAKE3 input fingerprints
//! - A result cache keyed by fingerprint
//! - Processing history for diagnostics

use blake3::Hasher;
use std::collections::HashMap;

/// Hex characters kept from the full BLAKE3 digest
const FINGERPRINT_LEN: usize = 12;

/// Multiplier applied to every processed element
const SCALE: i64 = 5;

/// Processor that memoizes its transform per input fingerprint
#[derive(Clone, Debug, Default)]
pub struct DataProcessor {
    /// fingerprint → previously computed result
    cache: HashMap<String, Vec<i64>>,

    /// Fingerprints of first-seen inputs, in processing order
    history: Vec<String>,

    /// Total process() calls, cached or not
    iteration_count: u32,
}

impl DataProcessor {
    /// Create a processor with an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Scale the input, reusing the cached result for repeated inputs
    pub fn process(&mut self, data: &[i64]) -> Vec<i64> {
        self.iteration_count += 1;

        let fingerprint = Self::fingerprint(data);
        if let Some(cached) = self.cache.get(&fingerprint) {
            return cached.clone();
        }

        let result: Vec<i64> = data.iter().map(|&v| v * SCALE).collect();
        self.cache.insert(fingerprint.clone(), result.clone());
        self.history.push(fingerprint);
        result
    }

    /// Short BLAKE3 fingerprint of the input values
    pub fn fingerprint(data: &[i64]) -> String {
        let mut hasher = Hasher::new();
        for &v in data {
            hasher.update(&v.to_le_bytes());
        }
        let hex = hasher.finalize().to_hex();
        hex.as_str()[..FINGERPRINT_LEN].to_string()
    }

    /// Total process() calls
    pub fn iterations(&self) -> u32 {
        self.iteration_count
    }

    /// Fingerprints of first-seen inputs
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_deterministic() {
        let a = DataProcessor::fingerprint(&[1, 2, 3]);
        let b = DataProcessor::fingerprint(&[1, 2, 3]);
        assert_eq!(a, b);
        assert_eq!(a.len(), FINGERPRINT_LEN);

        assert_ne!(a, DataProcessor::fingerprint(&[1, 2, 4]));
        // element boundaries matter, not just the concatenated bytes' count
        assert_ne!(
            DataProcessor::fingerprint(&[1]),
            DataProcessor::fingerprint(&[])
        );
    }

    #[test]
    fn test_process_scales() {
        let mut processor = DataProcessor::new();
        assert_eq!(processor.process(&[1, 2, 3]), vec![5, 10, 15]);
    }

    #[test]
    fn test_cache_hit_preserves_history() {
        let mut processor = DataProcessor::new();
        let first = processor.process(&[4, 5]);
        let second = processor.process(&[4, 5]);

        assert_eq!(first, second);
        assert_eq!(processor.iterations(), 2);
        assert_eq!(processor.history().len(), 1);
    }

    #[test]
    fn test_distinct_inputs_recorded() {
        let mut processor = DataProcessor::new();
        processor.process(&[1]);
        processor.process(&[2]);
        processor.process(&[1]);

        assert_eq!(processor.iterations(), 3);
        assert_eq!(processor.history().len(), 2);
    }
}
