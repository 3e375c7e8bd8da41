use serde::{Deserialize, Serialize};

use crate::backend::{Backend, Elm};
use crate::error::{NetworkError, Result};

/// Layer widths of a fully connected network.
///
/// `hidden_nodes` may be empty, in which case the input layer is wired
/// straight to the output layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    input_nodes: usize,
    hidden_nodes: Vec<usize>,
    output_nodes: usize,
}

impl Topology {
    pub fn new(input_nodes: usize, hidden_nodes: Vec<usize>, output_nodes: usize) -> Result<Self> {
        if input_nodes == 0 {
            return Err(invalid("input layer"));
        }
        if let Some(i) = hidden_nodes.iter().position(|&n| n == 0) {
            return Err(invalid(&format!("hidden layer {}", i)));
        }
        if output_nodes == 0 {
            return Err(invalid("output layer"));
        }

        Ok(Self {
            input_nodes,
            hidden_nodes,
            output_nodes,
        })
    }

    pub fn input_nodes(&self) -> usize {
        self.input_nodes
    }

    pub fn hidden_nodes(&self) -> &[usize] {
        &self.hidden_nodes
    }

    pub fn output_nodes(&self) -> usize {
        self.output_nodes
    }

    /// `[input, hidden..., output]`
    pub fn layer_sizes(&self) -> Vec<usize> {
        let mut sizes = Vec::with_capacity(self.hidden_nodes.len() + 2);
        sizes.push(self.input_nodes);
        sizes.extend_from_slice(&self.hidden_nodes);
        sizes.push(self.output_nodes);
        sizes
    }

    /// Number of weight matrices, one per pair of adjacent layers.
    pub fn transitions(&self) -> usize {
        self.hidden_nodes.len() + 1
    }

    /// `(rows, cols)` of every weight matrix, from the input side.
    ///
    /// Matrix `i` maps layer `i` (cols) into layer `i + 1` (rows).
    pub fn weight_shapes(&self) -> Vec<(usize, usize)> {
        self.layer_sizes()
            .windows(2)
            .map(|pair| (pair[1], pair[0]))
            .collect()
    }

    /// Samples a fresh weight list.
    ///
    /// Entries of each matrix are drawn from `N(0, rows^-0.5)`. With a seed,
    /// matrix `i` uses `seed + i` so the whole list is reproducible.
    pub fn build_weights<B: Backend>(&self, seed: Option<u64>) -> Result<Vec<B::Tensor>> {
        self.weight_shapes()
            .into_iter()
            .enumerate()
            .map(|(i, (rows, cols))| {
                let std = (rows as Elm).powf(-0.5);
                let layer_seed = seed.map(|s| s.wrapping_add(i as u64));
                B::random_normal((rows, cols), 0.0, std, layer_seed)
            })
            .collect()
    }

    /// Checks that `weights` has exactly the shapes this topology prescribes.
    pub fn check_weights<B: Backend>(&self, weights: &[B::Tensor]) -> Result<()> {
        let expected = self.weight_shapes();
        if weights.len() != expected.len() {
            return Err(NetworkError::shape_mismatch(
                "weight list length",
                &[expected.len()],
                &[weights.len()],
            ));
        }
        for (i, (w, &(rows, cols))) in weights.iter().zip(expected.iter()).enumerate() {
            let (r, c) = B::shape(w);
            if (r, c) != (rows, cols) {
                return Err(NetworkError::shape_mismatch(
                    format!("weight matrix {}", i),
                    &[rows, cols],
                    &[r, c],
                ));
            }
        }
        Ok(())
    }
}

fn invalid(layer: &str) -> NetworkError {
    NetworkError::InvalidTopology {
        layer: layer.to_string(),
        reason: "layer size must be greater than zero".to_string(),
    }
}
