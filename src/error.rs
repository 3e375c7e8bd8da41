//! Error types shared by the network core and its collaborators.

use thiserror::Error;

use crate::backend::Elm;

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, NetworkError>;

#[derive(Error, Debug)]
pub enum NetworkError {
    /// A layer was configured with zero nodes
    #[error("Invalid topology at {layer}: {reason}")]
    InvalidTopology { layer: String, reason: String },

    #[error("Invalid learning rate {0}: must be finite and greater than zero")]
    InvalidLearningRate(Elm),

    /// A vector or matrix does not fit the configured layer width
    #[error("Shape mismatch in {context}: expected {expected:?}, found {found:?}")]
    ShapeMismatch {
        context: String,
        expected: Vec<usize>,
        found: Vec<usize>,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] bincode::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),
}

impl NetworkError {
    pub(crate) fn shape_mismatch(
        context: impl Into<String>,
        expected: &[usize],
        found: &[usize],
    ) -> Self {
        NetworkError::ShapeMismatch {
            context: context.into(),
            expected: expected.to_vec(),
            found: found.to_vec(),
        }
    }
}
