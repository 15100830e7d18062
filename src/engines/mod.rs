pub mod evaluation;
pub mod feedback;
pub mod generation;
