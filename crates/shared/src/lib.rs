pub mod config;
pub mod error;
pub mod path;

pub use config::{DegeneratePolicy, Pacing, SimulationParameters};
pub use error::ConfigError;
pub use path::{AxisBounds, PricePath};
