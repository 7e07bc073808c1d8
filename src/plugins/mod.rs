pub mod galaxy;

pub use galaxy::*;
