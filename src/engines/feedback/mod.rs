pub mod interaction;

pub use interaction::{apply_interaction, InteractionEvent};
