/// Base-2 entropy of a class distribution. Empty classes contribute nothing.
pub fn entropy(distribution: &[f64]) -> f64 {
    let total: f64 = distribution.iter().sum();
    if total <= 0.0 {
        return 0.0;
    }
    distribution
        .iter()
        .filter(|&&count| count > 0.0)
        .map(|&count| {
            let p = count / total;
            -p * p.log2()
        })
        .sum()
}

/// Hoeffding bound: with probability `1 - confidence`, the mean of `n` observations of a
/// statistic with the given `range` lies within this distance of its true mean.
pub fn hoeffding_bound(range: f64, confidence: f64, n: f64) -> f64 {
    ((range * range * (1.0 / confidence).ln()) / (2.0 * n)).sqrt()
}

/// Maps a probability of class 1 onto `[-1, 1]`.
pub fn to_signed_score(probability: f64) -> f64 {
    probability * 2.0 - 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entropy_edges() {
        assert_eq!(entropy(&[0.0, 0.0]), 0.0);
        assert_eq!(entropy(&[4.0, 0.0]), 0.0);
        assert!((entropy(&[3.0, 3.0]) - 1.0).abs() < 1e-12);
        assert!((entropy(&[1.0, 3.0]) - 0.811_278_124_459_132_8).abs() < 1e-12);
    }

    #[test]
    fn bound_shrinks_with_n() {
        let e1 = hoeffding_bound(1.0, 0.05, 1.0);
        let e100 = hoeffding_bound(1.0, 0.05, 100.0);
        assert!((e1 - ((1.0f64 / 0.05).ln() / 2.0).sqrt()).abs() < 1e-12);
        assert!((e1 / e100 - 10.0).abs() < 1e-9);
    }

    #[test]
    fn signed_score() {
        assert_eq!(to_signed_score(0.5), 0.0);
        assert_eq!(to_signed_score(1.0), 1.0);
        assert_eq!(to_signed_score(0.0), -1.0);
    }
}
