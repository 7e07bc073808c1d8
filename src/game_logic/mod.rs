pub mod errors;
pub mod names;

pub use names::*;
