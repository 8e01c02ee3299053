pub mod engine;
pub mod price_process;
pub mod render;
pub mod runner;
pub mod stats;

pub use engine::{simulate_path, SimError, Simulation};
pub use price_process::{brownian_step, RandomWalk};
pub use render::{Control, Pacer, Renderer, SleepPacer};
pub use runner::{LiveSimulationLoop, LoopState, RunOutcome, RunReport};
pub use stats::PathStats;
