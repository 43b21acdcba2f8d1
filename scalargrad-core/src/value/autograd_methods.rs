use crate::autograd::run_backward;
use crate::error::ScalarGradError;
use crate::value::Value;
use log::debug;

impl Value {
    /// Computes the gradient of this value with respect to every node it
    /// depends on.
    ///
    /// Seeds `self.grad = 1.0`, then walks the reachable subgraph in reverse
    /// topological order and runs each node's backward rule once. Gradients
    /// are accumulated, so call [`zero_grad`](Value::zero_grad) (or
    /// `Graph::zero_grad`) on reused nodes before a new pass.
    ///
    /// # Errors
    /// Returns `StaleValue` if this node was discarded by `Graph::rewind`.
    pub fn backward(&self) -> Result<(), ScalarGradError> {
        self.ensure_live()?;
        if self.is_leaf() {
            debug!("backward() called on leaf {}. Only the seed is set.", self.id);
        }
        run_backward(&mut self.graph.arena_mut(), self.id);
        Ok(())
    }
}
