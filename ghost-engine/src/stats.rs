//! Sample statistics and small integer series

/// Summary statistics of an integer sample
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleStats {
    pub count: usize,
    pub mean: f64,
    /// Population variance
    pub variance: f64,
    pub std_dev: f64,
    pub min: i64,
    pub max: i64,
}

impl SampleStats {
    /// Compute statistics over a sample; None for the empty slice
    pub fn compute(values: &[i64]) -> Option<SampleStats> {
        if values.is_empty() {
            return None;
        }

        let n = values.len() as f64;
        let mean = values.iter().sum::<i64>() as f64 / n;
        let variance = values
            .iter()
            .map(|&v| {
                let d = v as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / n;

        let mut min = values[0];
        let mut max = values[0];
        for &v in values {
            min = min.min(v);
            max = max.max(v);
        }

        Some(SampleStats {
            count: values.len(),
            mean,
            variance,
            std_dev: variance.sqrt(),
            min,
            max,
        })
    }
}

/// First n Fibonacci numbers, starting 1, 1
pub fn fibonacci(n: usize) -> Vec<u64> {
    let mut seq = Vec::with_capacity(n);
    let (mut a, mut b) = (1u64, 1u64);
    for _ in 0..n {
        seq.push(a);
        let next = a + b;
        a = b;
        b = next;
    }
    seq
}

/// Primes up to and including `limit` (sieve of Eratosthenes)
pub fn prime_sieve(limit: usize) -> Vec<u64> {
    if limit < 2 {
        return Vec::new();
    }
    let mut sieve = vec![true; limit + 1];
    sieve[0] = false;
    sieve[1] = false;

    let mut i = 2;
    while i * i <= limit {
        if sieve[i] {
            let mut j = i * i;
            while j <= limit {
                sieve[j] = false;
                j += i;
            }
        }
        i += 1;
    }

    sieve
        .iter()
        .enumerate()
        .filter_map(|(i, &is_prime)| is_prime.then_some(i as u64))
        .collect()
}
