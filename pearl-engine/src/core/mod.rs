//! Engine configuration and state wiring

pub mod config;
pub mod state;

pub use config::Config;
pub use state::EngineState;
