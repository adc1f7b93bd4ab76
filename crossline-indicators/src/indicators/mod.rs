//! Built-in indicator implementations provided by the crate.

pub mod crossover;
pub mod presets;
pub mod sma;

pub use crossover::MovingAverageCrossover;
pub use presets::Sma50CrossSma200;
pub use sma::Sma;
