pub mod activation;
pub mod layer;
pub mod mlp;
pub mod neuron;

pub use activation::Activation;
pub use layer::Layer;
pub use mlp::{Mlp, MlpConfig};
pub use neuron::Neuron;
