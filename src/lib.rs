pub mod backend;
pub mod checkpoint;
pub mod config;
pub mod data;
pub mod engine;
pub mod error;

pub use config::TrainingConfig;
pub use engine::{Network, Topology};
pub use error::{NetworkError, Result};
