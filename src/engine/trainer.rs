use std::time::{Duration, Instant};

use crate::backend::{Backend, Elm};
use crate::config::TrainingConfig;
use crate::data::dataset::Dataset;
use crate::data::loader::DataLoader;
use crate::data::Sample;
use crate::engine::metric::Accuracy;
use crate::engine::network::Network;
use crate::error::{NetworkError, Result};

/// Summary of one pass over the training set.
#[derive(Debug, Clone, PartialEq)]
pub struct EpochReport {
    pub epoch: usize,
    /// Mean squared output error, measured before each update
    pub mean_loss: Elm,
    pub elapsed: Duration,
}

/// Drives a network through several epochs of online training.
pub struct Trainer<B: Backend> {
    network: Network<B>,
    config: TrainingConfig,
}

impl<B: Backend> Trainer<B> {
    pub fn new(network: Network<B>, config: TrainingConfig) -> Self {
        Self { network, config }
    }

    pub fn network(&self) -> &Network<B> {
        &self.network
    }

    pub fn into_network(self) -> Network<B> {
        self.network
    }

    /// Trains once per sample per epoch and returns one report per epoch.
    pub fn fit<D: Dataset<Item = Sample>>(&mut self, dataset: &D) -> Result<Vec<EpochReport>> {
        if dataset.is_empty() {
            return Err(NetworkError::InvalidInput(
                "cannot train on an empty dataset".to_string(),
            ));
        }

        let mut loader = match self.config.seed {
            Some(seed) => DataLoader::with_seed(dataset, self.config.shuffle, seed),
            None => DataLoader::new(dataset, self.config.shuffle),
        };

        let mut reports = Vec::with_capacity(self.config.epochs);
        for epoch in 0..self.config.epochs {
            let start = Instant::now();
            let mut total_loss = 0.0;
            for sample in loader.iter() {
                total_loss += self.network.train(&sample.input, &sample.target)?;
            }

            let report = EpochReport {
                epoch,
                mean_loss: total_loss / loader.len() as Elm,
                elapsed: start.elapsed(),
            };
            log::info!(
                "Epoch: {}, Loss: {:.6}, Time: {:.2?}",
                report.epoch,
                report.mean_loss,
                report.elapsed
            );
            if !self.network.is_valid() {
                log::warn!("Weights became non-finite after epoch {}", epoch);
            }
            reports.push(report);
        }

        Ok(reports)
    }

    /// Fraction of `dataset` classified correctly by the current weights.
    pub fn evaluate<D: Dataset<Item = Sample>>(&self, dataset: &D) -> Result<Elm> {
        let accuracy = Accuracy::score(&self.network, dataset)?;
        log::info!("Accuracy: {:.4} over {} samples", accuracy, dataset.len());
        Ok(accuracy)
    }
}
