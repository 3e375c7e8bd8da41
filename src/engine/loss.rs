use crate::backend::Elm;
use crate::error::{NetworkError, Result};

/// Sum of squared differences between two equally long vectors.
pub fn squared_error(pred: &[Elm], target: &[Elm]) -> Result<Elm> {
    if pred.len() != target.len() {
        return Err(NetworkError::shape_mismatch(
            "squared error",
            &[target.len()],
            &[pred.len()],
        ));
    }
    Ok(pred
        .iter()
        .zip(target)
        .map(|(p, t)| (t - p) * (t - p))
        .sum())
}

pub struct MSELoss;

impl MSELoss {
    pub fn new() -> Self {
        Self
    }

    /// Mean squared error over the output nodes.
    pub fn forward(&self, pred: &[Elm], target: &[Elm]) -> Result<Elm> {
        let sum = squared_error(pred, target)?;
        if pred.is_empty() {
            return Ok(0.0);
        }
        Ok(sum / pred.len() as Elm)
    }
}

impl Default for MSELoss {
    fn default() -> Self {
        Self::new()
    }
}
