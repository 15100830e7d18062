pub mod diversity;
pub mod fitness;

pub use diversity::gene_entropy;
pub use fitness::{FitnessBreakdown, FitnessEvaluator, FitnessWeights};
