// scalargrad-nn/src/layers/mlp.rs

use crate::error::NnError;
use crate::init::Init;
use crate::layers::{Activation, Layer};
use crate::module::Module;
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::{Graph, Value};

/// Shape and initialization of an [`Mlp`].
#[derive(Debug, Clone, PartialEq)]
pub struct MlpConfig {
    pub n_in: usize,
    /// Width of each hidden layer, input side first.
    pub hidden: Vec<usize>,
    pub n_out: usize,
    /// Activation of the hidden layers.
    pub activation: Activation,
    pub output_activation: Activation,
    pub init: Init,
    /// Seed of the generator parameters are drawn from. The same config
    /// always builds the same network.
    pub seed: u64,
}

impl MlpConfig {
    pub fn new(n_in: usize, hidden: Vec<usize>, n_out: usize) -> Self {
        MlpConfig {
            n_in,
            hidden,
            n_out,
            ..Default::default()
        }
    }

    pub fn with_activation(mut self, activation: Activation) -> Self {
        self.activation = activation;
        self
    }

    pub fn with_output_activation(mut self, activation: Activation) -> Self {
        self.output_activation = activation;
        self
    }

    pub fn with_init(mut self, init: Init) -> Self {
        self.init = init;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// `[n_in, hidden..., n_out]`
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes = Vec::with_capacity(self.hidden.len() + 2);
        sizes.push(self.n_in);
        sizes.extend_from_slice(&self.hidden);
        sizes.push(self.n_out);
        sizes
    }
}

impl Default for MlpConfig {
    fn default() -> Self {
        MlpConfig {
            n_in: 1,
            hidden: Vec::new(),
            n_out: 1,
            activation: Activation::Tanh,
            output_activation: Activation::Tanh,
            init: Init::default(),
            seed: 0,
        }
    }
}

/// Multi-layer perceptron: a stack of [`Layer`]s applied in order.
#[derive(Debug, Clone)]
pub struct Mlp {
    graph: Graph,
    layers: Vec<Layer>,
}

impl Mlp {
    /// Builds the network on `graph` from `config`.
    pub fn new(graph: &Graph, config: &MlpConfig) -> Result<Self, NnError> {
        let sizes = config.sizes();
        if sizes.iter().any(|&s| s == 0) {
            return Err(NnError::EmptyNetwork { sizes });
        }
        config.init.validate()?;

        let mut rng = StdRng::seed_from_u64(config.seed);
        let n_layers = sizes.len() - 1;
        let layers = sizes
            .windows(2)
            .enumerate()
            .map(|(i, pair)| {
                let activation = if i + 1 == n_layers {
                    config.output_activation
                } else {
                    config.activation
                };
                Layer::new(graph, pair[0], pair[1], activation, &config.init, &mut rng)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mlp = Mlp {
            graph: graph.clone(),
            layers,
        };
        debug!(
            "Mlp::new: sizes {:?}, {} parameters, seed {}",
            sizes,
            mlp.num_parameters(),
            config.seed
        );
        Ok(mlp)
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Promotes raw inputs to leaves on the network's graph and runs
    /// [`Module::forward`].
    pub fn forward_f64(&self, inputs: &[f64]) -> Result<Vec<Value>, NnError> {
        let leaves = self.graph.values(inputs);
        self.forward(&leaves)
    }
}

impl Module for Mlp {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, NnError> {
        let mut activations = inputs.to_vec();
        for layer in &self.layers {
            activations = layer.forward(&activations)?;
        }
        Ok(activations)
    }

    fn parameters(&self) -> Vec<Value> {
        self.layers.iter().flat_map(Module::parameters).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(i, layer)| {
                layer
                    .named_parameters()
                    .into_iter()
                    .map(move |(name, p)| (format!("layers.{}.{}", i, name), p))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
