use crate::backend::{Backend, Elm};
use crate::data::dataset::Dataset;
use crate::data::Sample;
use crate::engine::network::Network;
use crate::error::{NetworkError, Result};

pub struct Accuracy;

impl Accuracy {
    /// True when the most activated output node is the target's hottest node.
    ///
    /// Targets are expected one-hot (or scaled one-hot such as 0.01 / 0.99).
    pub fn matches(pred: &[Elm], target: &[Elm]) -> bool {
        match (argmax(pred), argmax(target)) {
            (Some(p), Some(t)) => p == t,
            _ => false,
        }
    }

    /// Fraction of samples in `dataset` the network classifies correctly.
    pub fn score<B, D>(network: &Network<B>, dataset: &D) -> Result<Elm>
    where
        B: Backend,
        D: Dataset<Item = Sample>,
    {
        if dataset.is_empty() {
            return Err(NetworkError::InvalidInput(
                "cannot score an empty dataset".to_string(),
            ));
        }

        let mut correct = 0usize;
        for index in 0..dataset.len() {
            let sample = dataset.get(index);
            let output = network.query(&sample.input)?;
            if Self::matches(&output, &sample.target) {
                correct += 1;
            }
        }
        Ok(correct as Elm / dataset.len() as Elm)
    }
}

/// Index of the largest element; the first one wins ties.
pub fn argmax(values: &[Elm]) -> Option<usize> {
    values
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, Elm)>, (i, &v)| match best {
            Some((_, b)) if b >= v => best,
            _ => Some((i, v)),
        })
        .map(|(i, _)| i)
}
