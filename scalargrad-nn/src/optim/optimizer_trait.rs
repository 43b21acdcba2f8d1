use crate::error::NnError;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers are responsible for updating model parameters based on their gradients.
pub trait Optimizer {
    /// Performs a single optimization step.
    ///
    /// Reads the gradient accumulated on each managed parameter and writes
    /// the updated value back in place.
    ///
    /// # Errors
    /// `NnError::Graph(StaleValue)` if a parameter was discarded from its graph.
    fn step(&mut self) -> Result<(), NnError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// Call this before each backward pass: gradients accumulate otherwise.
    fn zero_grad(&mut self);

    fn lr(&self) -> f64;

    fn set_lr(&mut self, lr: f64);
}
