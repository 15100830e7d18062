/// Deterministically consumes genes from a genome
pub struct GeneConsumer<'a> {
    genome: &'a [f64],
    position: usize,
}

impl<'a> GeneConsumer<'a> {
    pub fn new(genome: &'a [f64]) -> Self {
        Self { genome, position: 0 }
    }

    /// Consume next gene and return value
    pub fn consume(&mut self) -> f64 {
        if self.genome.is_empty() {
            return 0.0;
        }
        if self.position >= self.genome.len() {
            // Wrap around if genome exhausted
            self.position = 0;
        }

        let gene = self.genome[self.position];
        self.position += 1;
        gene
    }

    /// Consume gene and map to choice index
    pub fn choose(&mut self, num_choices: usize) -> usize {
        if num_choices == 0 {
            return 0;
        }
        let bucket = (self.consume() * num_choices as f64).floor() as usize;
        bucket.min(num_choices - 1)
    }

    /// Consume gene and map to `base + gene * range`
    pub fn affine(&mut self, base: f64, range: f64) -> f64 {
        base + self.consume() * range
    }

    /// Consume gene as a unit scalar
    pub fn unit(&mut self) -> f64 {
        self.affine(0.0, 1.0)
    }

    pub fn position(&self) -> usize {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_short_genome() {
        let genome = [0.1, 0.9];
        let mut consumer = GeneConsumer::new(&genome);
        assert_eq!(consumer.consume(), 0.1);
        assert_eq!(consumer.consume(), 0.9);
        assert_eq!(consumer.consume(), 0.1);
        assert_eq!(consumer.position(), 1);
    }

    #[test]
    fn test_choose_keeps_top_gene_in_range() {
        let genome = [1.0, 0.0, 0.499];
        let mut consumer = GeneConsumer::new(&genome);
        assert_eq!(consumer.choose(6), 5);
        assert_eq!(consumer.choose(6), 0);
        assert_eq!(consumer.choose(2), 0);
    }

    #[test]
    fn test_empty_genome_reads_zero() {
        let mut consumer = GeneConsumer::new(&[]);
        assert_eq!(consumer.affine(20.0, 60.0), 20.0);
        assert_eq!(consumer.choose(4), 0);
    }
}
