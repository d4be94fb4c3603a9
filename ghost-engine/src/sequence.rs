//! Sorted demo sequence and RMS metric

/// Generate the demo sequence: (i·17 + 31) mod 256, sorted ascending
pub fn generate(length: usize) -> Vec<i64> {
    let mut seq: Vec<i64> = (0..length as i64).map(|i| (i * 17 + 31) % 256).collect();
    seq.sort_unstable();
    seq
}

/// Root-mean-square of the values; 0.0 for an empty slice
pub fn metric(data: &[i64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let total: f64 = data.iter().map(|&v| (v * v) as f64).sum();
    (total / data.len() as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_sorted() {
        let seq = generate(49);
        assert_eq!(seq.len(), 49);
        assert!(seq.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(&seq[..4], &[11, 12, 13, 28]);
    }

    #[test]
    fn test_generate_small() {
        assert_eq!(
            generate(16),
            vec![13, 30, 31, 48, 65, 82, 99, 116, 133, 150, 167, 184, 201, 218, 235, 252]
        );
        assert!(generate(0).is_empty());
    }

    #[test]
    fn test_metric_reference_values() {
        assert!((metric(&generate(49)) - 145.6644872889163).abs() < 1e-10);
        assert!((metric(&generate(16)) - 147.29392383937636).abs() < 1e-10);
    }

    #[test]
    fn test_metric_edge_cases() {
        assert_eq!(metric(&[]), 0.0);
        assert_eq!(metric(&[3]), 3.0);
        assert!((metric(&[3, 4, 3, 4]) - 12.5_f64.sqrt()).abs() < 1e-12);
    }
}
