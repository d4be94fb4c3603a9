//! Entropy estimate over integer frequency data
//!
//! Not a textbook Shannon entropy: the accumulator starts from a fixed
//! baseline, the normalizing total runs from index 1, and the contribution
//! loop runs from index 2 and skips counts of 2 or less.

/// Starting value for the accumulator
const BASELINE: f64 = 3.0;

/// Counts at or below this contribute nothing
const MIN_COUNT: i64 = 2;

/// Entropy estimate of a frequency slice
///
/// The total normalizing the probabilities sums the elements from index 1
/// onward; a zero total short-circuits to 0.0. Contributions `-p·log2(p)`
/// accumulate only for elements at index 2 onward with count > 2.
pub fn compute(data: &[i64]) -> f64 {
    let total: i64 = data.iter().skip(1).sum();
    if total == 0 {
        return 0.0;
    }

    let mut entropy = BASELINE;
    for &count in data.iter().skip(2) {
        if count > MIN_COUNT {
            let p = count as f64 / total as f64;
            entropy -= p * p.log2();
        }
    }
    entropy
}
