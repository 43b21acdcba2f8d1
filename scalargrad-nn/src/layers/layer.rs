// scalargrad-nn/src/layers/layer.rs

use crate::error::NnError;
use crate::init::Init;
use crate::layers::{Activation, Neuron};
use crate::module::Module;
use rand::Rng;
use scalargrad_core::{Graph, Value};

/// A fully connected layer of `n_out` independent neurons sharing the same
/// inputs and activation.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
    n_in: usize,
}

impl Layer {
    pub fn new<R: Rng + ?Sized>(
        graph: &Graph,
        n_in: usize,
        n_out: usize,
        activation: Activation,
        init: &Init,
        rng: &mut R,
    ) -> Result<Self, NnError> {
        let neurons = (0..n_out)
            .map(|_| Neuron::new(graph, n_in, activation, init, &mut *rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Layer { neurons, n_in })
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn n_in(&self) -> usize {
        self.n_in
    }

    pub fn n_out(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Layer {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, NnError> {
        if inputs.len() != self.n_in {
            return Err(NnError::InputSizeMismatch {
                module: "Layer".to_string(),
                expected: self.n_in,
                actual: inputs.len(),
            });
        }
        self.neurons.iter().map(|n| n.activate(inputs)).collect()
    }

    fn parameters(&self) -> Vec<Value> {
        self.neurons.iter().flat_map(Module::parameters).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.neurons
            .iter()
            .enumerate()
            .flat_map(|(i, neuron)| {
                neuron
                    .named_parameters()
                    .into_iter()
                    .map(move |(name, p)| (format!("neurons.{}.{}", i, name), p))
            })
            .collect()
    }
}
