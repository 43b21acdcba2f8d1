// scalargrad-nn/src/module.rs

use crate::error::NnError;
use scalargrad_core::Value;

/// The base trait for everything that owns trainable parameters.
///
/// A module maps a slice of input values to output values, recording the
/// forward pass on the inputs' graph, and exposes its parameters so an
/// optimizer can update them.
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass of the module.
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, NnError>;

    /// Returns handles to all learnable parameters of the module, including
    /// those of sub-modules, in a stable order.
    fn parameters(&self) -> Vec<Value>;

    /// Returns the parameters along with hierarchical names
    /// (e.g. `"layers.0.neurons.1.w.2"`).
    fn named_parameters(&self) -> Vec<(String, Value)>;

    /// Resets the gradient of every parameter to `0.0`.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }

    /// Total number of scalar parameters.
    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}
