// scalargrad-nn/src/layers/neuron.rs

use crate::error::NnError;
use crate::init::Init;
use crate::layers::Activation;
use crate::module::Module;
use rand::Rng;
use scalargrad_core::{Graph, Value};

/// A single neuron: `activation(sum_i w_i * x_i + b)`.
///
/// Weights and bias are leaves created on the graph passed to [`Neuron::new`].
/// Create them before taking a [`Checkpoint`](scalargrad_core::Checkpoint)
/// so rewinding the graph between training steps keeps them alive.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Value>,
    bias: Value,
    activation: Activation,
}

impl Neuron {
    /// Creates a neuron with `n_in` weights and a bias, all drawn from
    /// `init` (weights first).
    pub fn new<R: Rng + ?Sized>(
        graph: &Graph,
        n_in: usize,
        activation: Activation,
        init: &Init,
        rng: &mut R,
    ) -> Result<Self, NnError> {
        let weights = graph.values(&init.sample(n_in, rng)?);
        let bias = graph.value(init.sample(1, rng)?[0]);
        Ok(Neuron {
            weights,
            bias,
            activation,
        })
    }

    pub fn weights(&self) -> &[Value] {
        &self.weights
    }

    pub fn bias(&self) -> &Value {
        &self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn n_in(&self) -> usize {
        self.weights.len()
    }

    /// Computes the neuron's output for one input vector.
    pub fn activate(&self, inputs: &[Value]) -> Result<Value, NnError> {
        if inputs.len() != self.weights.len() {
            return Err(NnError::InputSizeMismatch {
                module: "Neuron".to_string(),
                expected: self.weights.len(),
                actual: inputs.len(),
            });
        }
        let mut pre_activation = self.bias.clone();
        for (w, x) in self.weights.iter().zip(inputs) {
            pre_activation = pre_activation.try_add(w.try_mul(x)?)?;
        }
        Ok(self.activation.apply(pre_activation))
    }
}

impl Module for Neuron {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, NnError> {
        Ok(vec![self.activate(inputs)?])
    }

    fn parameters(&self) -> Vec<Value> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        let mut named: Vec<(String, Value)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("w.{}", i), w.clone()))
            .collect();
        named.push(("b".to_string(), self.bias.clone()));
        named
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
