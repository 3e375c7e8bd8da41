//! Training configuration loaded from YAML.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::backend::Elm;
use crate::engine::network::Network;
use crate::engine::topology::Topology;
use crate::error::{NetworkError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Width of the input layer
    pub input_nodes: usize,
    /// Hidden layer widths, input side first; empty for a direct connection
    pub hidden_nodes: Vec<usize>,
    /// Width of the output layer
    pub output_nodes: usize,
    pub learning_rate: Elm,
    /// Full passes over the training set
    pub epochs: usize,
    /// Seed for weight initialization and shuffling
    pub seed: Option<u64>,
    /// Shuffle the training set at every epoch
    pub shuffle: bool,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            input_nodes: 784,
            hidden_nodes: vec![200],
            output_nodes: 10,
            learning_rate: 0.1,
            epochs: 5,
            seed: None,
            shuffle: true,
        }
    }
}

impl TrainingConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: TrainingConfig = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    pub fn topology(&self) -> Result<Topology> {
        Topology::new(self.input_nodes, self.hidden_nodes.clone(), self.output_nodes)
    }

    pub fn validate(&self) -> Result<()> {
        self.topology()?;
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(NetworkError::InvalidLearningRate(self.learning_rate));
        }
        if self.epochs == 0 {
            return Err(NetworkError::InvalidInput(
                "epochs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Builds a freshly initialized network described by this config.
    pub fn build_network(&self) -> Result<Network> {
        self.validate()?;
        Network::from_topology(self.topology()?, self.learning_rate, self.seed)
    }
}
