pub mod chart;
pub mod config;
pub mod galaxy;
pub mod game_logic;
pub mod plugins;
pub mod resources;

// Selective re-exports for external consumers

// Plugins - games embedding the generator need the galaxy plugin
pub use plugins::*;

// Game logic - callers need errors and the name pool
pub use game_logic::errors::{ForedeckError, ForedeckResult};
pub use game_logic::names::NamePool;

// Galaxy - the generated result and its records
pub use galaxy::{Galaxy, GalaxyGenerator, RandomSource, Star, StarId};

// Configuration - the one record generation is driven by
pub use resources::{GalaxyConfig, GalaxyShape, GrowthSettings};
