//! Dispersion of entropy sequences.

/// Arithmetic mean of `values`, `0.0` when empty.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation of `values`.
///
/// Sequences with fewer than two elements have no observable variance
/// and report `0.0`, as do constant sequences.
pub fn standard_deviation(values: &[f64]) -> f64 {
    if values.len() < 2 || values.iter().all(|&x| x == values[0]) {
        return 0.0;
    }

    let n = values.len() as f64;
    let mean = mean(values);
    let variance: f64 = values.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / n;

    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_singleton() {
        assert_eq!(standard_deviation(&[]), 0.0);
        assert_eq!(standard_deviation(&[7.3]), 0.0);
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_population_not_sample() {
        // Sample SD of this sequence would be sqrt(32/7).
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((standard_deviation(&values) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_constant_sequence() {
        // The mean of these picks up rounding error.
        assert_eq!(standard_deviation(&[7.9; 40]), 0.0);
        assert_eq!(standard_deviation(&[7.987_654_321; 3]), 0.0);
    }

    #[test]
    fn test_two_values() {
        assert!((standard_deviation(&[0.0, 8.0]) - 4.0).abs() < 1e-12);
    }
}
