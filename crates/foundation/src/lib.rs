pub mod angles;
pub mod bounds;

// Foundation crate: small, well-tested primitives only.
pub use angles::*;
pub use bounds::*;
