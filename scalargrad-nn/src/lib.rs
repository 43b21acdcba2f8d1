//! # scalargrad-nn
//!
//! Neurons, layers and multi-layer perceptrons built from `scalargrad-core`
//! values, with an MSE loss and an SGD optimizer.
//!
//! Parameters are leaves of a caller-supplied [`Graph`]. A training step
//! usually looks like:
//!
//! ```
//! use scalargrad_core::Graph;
//! use scalargrad_nn::{mse_loss, Mlp, MlpConfig, Module, Optimizer, Reduction, SgdOptimizer};
//!
//! let graph = Graph::new();
//! let mlp = Mlp::new(&graph, &MlpConfig::new(2, vec![4], 1).with_seed(7)).unwrap();
//! let mut sgd = SgdOptimizer::simple(mlp.parameters(), 0.05);
//! let checkpoint = graph.checkpoint();
//!
//! let pred = mlp.forward_f64(&[0.5, -1.0]).unwrap();
//! let loss = mse_loss(&pred, &[1.0], Reduction::Sum).unwrap();
//! sgd.zero_grad();
//! loss.backward().unwrap();
//! sgd.step().unwrap();
//! graph.rewind(checkpoint).unwrap();
//! ```
//!
//! [`Graph`]: scalargrad_core::Graph

pub mod error;
pub mod init;
pub mod layers;
pub mod losses;
pub mod module;
pub mod optim;

pub use error::NnError;
pub use init::Init;
pub use layers::{Activation, Layer, Mlp, MlpConfig, Neuron};
pub use losses::{mse_loss, MseLoss, Reduction};
pub use module::Module;
pub use optim::{Optimizer, SgdOptimizer};
