use crate::backend::{ndarray::NdArray, Backend, Elm};
use crate::engine::activation::Activation;
use crate::engine::topology::Topology;
use crate::error::{NetworkError, Result};

/// Fully connected feed-forward network trained by online backpropagation.
///
/// The network owns one weight matrix per layer transition. `W[i]` maps the
/// activation of layer `i` (a column vector) to the pre-activation of layer
/// `i + 1`. There are no bias terms.
#[derive(Debug, Clone)]
pub struct Network<B: Backend = NdArray> {
    topology: Topology,
    weights: Vec<B::Tensor>,
    learning_rate: Elm,
    activation: Activation,
}

impl<B: Backend> Network<B> {
    /// Builds a network with weights sampled from process entropy.
    pub fn new(
        input_nodes: usize,
        hidden_nodes: Vec<usize>,
        output_nodes: usize,
        learning_rate: Elm,
    ) -> Result<Self> {
        let topology = Topology::new(input_nodes, hidden_nodes, output_nodes)?;
        Self::from_topology(topology, learning_rate, None)
    }

    /// Same as [`Network::new`] but with reproducible weights.
    pub fn with_seed(
        input_nodes: usize,
        hidden_nodes: Vec<usize>,
        output_nodes: usize,
        learning_rate: Elm,
        seed: u64,
    ) -> Result<Self> {
        let topology = Topology::new(input_nodes, hidden_nodes, output_nodes)?;
        Self::from_topology(topology, learning_rate, Some(seed))
    }

    pub fn from_topology(
        topology: Topology,
        learning_rate: Elm,
        seed: Option<u64>,
    ) -> Result<Self> {
        check_learning_rate(learning_rate)?;
        let weights = topology.build_weights::<B>(seed)?;
        log::debug!(
            "Built network {:?} (lr={}, seed={:?})",
            topology.layer_sizes(),
            learning_rate,
            seed
        );

        Ok(Self {
            topology,
            weights,
            learning_rate,
            activation: Activation::SIGMOID,
        })
    }

    /// Adopts an explicit weight list, e.g. one restored from a checkpoint.
    pub fn from_weights(
        topology: Topology,
        weights: Vec<B::Tensor>,
        learning_rate: Elm,
    ) -> Result<Self> {
        check_learning_rate(learning_rate)?;
        topology.check_weights::<B>(&weights)?;

        Ok(Self {
            topology,
            weights,
            learning_rate,
            activation: Activation::SIGMOID,
        })
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn learning_rate(&self) -> Elm {
        self.learning_rate
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Weight matrices from the input side to the output side.
    pub fn weights(&self) -> &[B::Tensor] {
        &self.weights
    }

    pub fn parameter_count(&self) -> usize {
        self.weights
            .iter()
            .map(|w| {
                let (rows, cols) = B::shape(w);
                rows * cols
            })
            .sum()
    }

    /// Check if network is valid (no NaN/Inf)
    pub fn is_valid(&self) -> bool {
        self.weights
            .iter()
            .all(|w| B::to_vec(w).iter().all(|v| v.is_finite()))
    }

    /// Runs a forward pass and returns the output layer.
    pub fn query(&self, input: &[Elm]) -> Result<Vec<Elm>> {
        let x = self.input_column(input)?;
        let activate = self.activation.activate;
        let output = self
            .weights
            .iter()
            .fold(x, |x, w| B::map(&B::matmul(w, &x), activate));
        Ok(B::to_vec(&output))
    }

    /// Performs one gradient step on a single `(input, target)` pair.
    ///
    /// Returns the squared output error `Σ (target - output)²` measured
    /// before the update. Both vectors are validated before any weight is
    /// touched, so a rejected call leaves the network unchanged.
    pub fn train(&mut self, input: &[Elm], target: &[Elm]) -> Result<Elm> {
        let x = self.input_column(input)?;
        let target = self.target_column(target)?;

        // activations[i] は i 層目の出力 (activations[0] は入力そのもの)
        let activations = self.forward(x);
        let output = &activations[self.weights.len()];

        let mut error = B::sub(&target, output);
        let loss: Elm = B::to_vec(&error).iter().map(|e| e * e).sum();

        // 出力側から入力側へ誤差を伝播させる
        for i in (0..self.weights.len()).rev() {
            let slope = B::map(&activations[i + 1], self.activation.derivative);
            let gradient = B::mul(&error, &slope);

            // 前の層への誤差は更新前の重みで計算する
            if i > 0 {
                error = B::matmul(&B::transpose(&self.weights[i]), &gradient);
            }

            let delta = B::matmul(&gradient, &B::transpose(&activations[i]));
            B::add_assign(&mut self.weights[i], &B::scale(&delta, self.learning_rate));
        }

        Ok(loss)
    }

    /// Forward pass that keeps every layer's activation, input included.
    fn forward(&self, x: B::Tensor) -> Vec<B::Tensor> {
        let mut activations = Vec::with_capacity(self.weights.len() + 1);
        let mut current = x;
        for w in &self.weights {
            let next = B::map(&B::matmul(w, &current), self.activation.activate);
            activations.push(std::mem::replace(&mut current, next));
        }
        activations.push(current);
        activations
    }

    fn input_column(&self, input: &[Elm]) -> Result<B::Tensor> {
        let expected = self.topology.input_nodes();
        if input.len() != expected {
            return Err(NetworkError::shape_mismatch(
                "input vector",
                &[expected],
                &[input.len()],
            ));
        }
        B::column(input.to_vec())
    }

    fn target_column(&self, target: &[Elm]) -> Result<B::Tensor> {
        let expected = self.topology.output_nodes();
        if target.len() != expected {
            return Err(NetworkError::shape_mismatch(
                "target vector",
                &[expected],
                &[target.len()],
            ));
        }
        B::column(target.to_vec())
    }
}

fn check_learning_rate(learning_rate: Elm) -> Result<()> {
    if learning_rate.is_finite() && learning_rate > 0.0 {
        Ok(())
    } else {
        Err(NetworkError::InvalidLearningRate(learning_rate))
    }
}
