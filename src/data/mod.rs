use crate::backend::Elm;

pub mod dataset;
pub mod encoding;
pub mod loader;
pub mod mnist;

/// One training example: an input vector and the output the network should
/// produce for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub input: Vec<Elm>,
    pub target: Vec<Elm>,
}

impl Sample {
    pub fn new(input: Vec<Elm>, target: Vec<Elm>) -> Self {
        Self { input, target }
    }
}
