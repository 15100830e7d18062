use rand::Rng;

/// Genome representation for the optimizer
///
/// A genome is a fixed-length vector of real genes, each kept in `[0, 1]`.
/// The `codec` module decodes it into a [`TraitSet`](super::codec::TraitSet)
/// by reading genes in order:
/// - affine fields: `base + gene * range`
/// - categorical fields: `floor(gene * n)` into a fixed catalog
///
/// Reproduction operators only ever see the flat vector, so crossover and
/// mutation stay simple element-wise operations and any vector decodes to a
/// valid trait set.
///
/// # Example
///
/// ```
/// use traitevo::engines::generation::codec::decode;
///
/// let genome = vec![0.5; 20];
/// let traits = decode(&genome);
/// assert_eq!(traits.geometry.size, 50.0);
/// ```
pub type Genome = Vec<f64>;

/// Generate a random genome, genes uniform in `[0, 1)`
pub fn random_genome<R: Rng>(length: usize, rng: &mut R) -> Genome {
    (0..length).map(|_| rng.gen::<f64>()).collect()
}

