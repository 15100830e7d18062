//! Gene diversity within a single genome.

pub const DIVERSITY_BUCKETS: usize = 10;

/// Histogram of gene values over `DIVERSITY_BUCKETS` equal-width buckets
pub fn gene_histogram(genome: &[f64]) -> [usize; DIVERSITY_BUCKETS] {
    let mut counts = [0usize; DIVERSITY_BUCKETS];
    for &gene in genome {
        let bucket = (gene * DIVERSITY_BUCKETS as f64).floor() as usize;
        counts[bucket.min(DIVERSITY_BUCKETS - 1)] += 1;
    }
    counts
}

/// Calculate normalized Shannon entropy of the gene histogram
/// H = -Σ(p_i * log2(p_i)) / log2(buckets), empty buckets skipped
///
/// Returns 0.0 for an empty genome or when every gene shares one bucket.
pub fn gene_entropy(genome: &[f64]) -> f64 {
    if genome.is_empty() {
        return 0.0;
    }

    let total = genome.len() as f64;
    let entropy: f64 = gene_histogram(genome)
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum();

    (entropy / (DIVERSITY_BUCKETS as f64).log2()).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_bucket_has_no_diversity() {
        assert_eq!(gene_entropy(&[0.42; 16]), 0.0);
    }

    #[test]
    fn test_uniform_spread_is_maximal() {
        let genome: Vec<f64> = (0..10).map(|i| i as f64 / 10.0 + 0.05).collect();
        assert!((gene_entropy(&genome) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_two_buckets() {
        let genome = [0.05, 0.05, 0.95, 0.95];
        let expected = 1.0 / 10f64.log2();
        assert!((gene_entropy(&genome) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_top_gene_lands_in_last_bucket() {
        let histogram = gene_histogram(&[1.0, 0.0]);
        assert_eq!(histogram[9], 1);
        assert_eq!(histogram[0], 1);
    }

    #[test]
    fn test_empty_genome() {
        assert_eq!(gene_entropy(&[]), 0.0);
    }
}
