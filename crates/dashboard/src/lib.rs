pub mod report;
pub mod satellites;
pub mod state;

pub use report::*;
pub use state::*;
