mod engine;
mod engine_config;
mod highlight;

pub use engine::{ChartEngine, PointerOutcome};
pub use engine_config::ChartEngineConfig;
pub use highlight::Highlight;
