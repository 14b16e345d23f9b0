pub mod layers;
pub mod synth;

pub use layers::*;
pub use synth::*;
