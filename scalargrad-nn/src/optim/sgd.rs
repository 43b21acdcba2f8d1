use crate::error::NnError;
use crate::optim::Optimizer;
use log::debug;
use scalargrad_core::Value;
use std::collections::HashMap;

/// Implements the Stochastic Gradient Descent (SGD) optimizer.
///
/// Supports momentum, weight decay, and Nesterov momentum.
#[derive(Debug)]
pub struct SgdOptimizer {
    params: Vec<Value>,
    lr: f64,
    momentum: f64,
    weight_decay: f64,
    nesterov: bool,
    // Keyed by handle identity: graph, node id and slot generation.
    momentum_buffers: HashMap<Value, f64>,
    steps: u64,
}

impl SgdOptimizer {
    /// Creates a new `SgdOptimizer`.
    ///
    /// # Arguments
    ///
    /// * `params`: The parameters to optimize, usually `module.parameters()`.
    /// * `lr`: The learning rate.
    /// * `momentum`: Momentum factor (`0.0` disables it).
    /// * `weight_decay`: Weight decay (L2 penalty) factor.
    /// * `nesterov`: Enables Nesterov momentum. Ignored without momentum.
    pub fn new(
        params: impl IntoIterator<Item = Value>,
        lr: f64,
        momentum: f64,
        weight_decay: f64,
        nesterov: bool,
    ) -> Self {
        SgdOptimizer {
            params: params.into_iter().collect(),
            lr,
            momentum,
            weight_decay,
            nesterov,
            momentum_buffers: HashMap::new(),
            steps: 0,
        }
    }

    /// Plain SGD: `p.value -= lr * p.grad`.
    pub fn simple(params: impl IntoIterator<Item = Value>, lr: f64) -> Self {
        Self::new(params, lr, 0.0, 0.0, false)
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }

    /// Momentum buffer of `param`, if a momentum step has touched it.
    pub fn momentum_buffer(&self, param: &Value) -> Option<f64> {
        self.momentum_buffers.get(param).copied()
    }
}

impl Optimizer for SgdOptimizer {
    fn step(&mut self) -> Result<(), NnError> {
        // Read everything first so a stale parameter leaves the others untouched.
        let snapshot = self
            .params
            .iter()
            .map(|param| Ok((param.try_value()?, param.try_grad()?)))
            .collect::<Result<Vec<(f64, f64)>, NnError>>()?;

        self.steps += 1;
        debug!(
            "SgdOptimizer::step #{}: {} params, lr={}, momentum={}",
            self.steps,
            self.params.len(),
            self.lr,
            self.momentum
        );

        for (param, (value, grad)) in self.params.iter().zip(snapshot) {
            let mut d_p = grad;

            if self.weight_decay != 0.0 {
                d_p += self.weight_decay * value;
            }

            if self.momentum != 0.0 {
                let buffer = self.momentum_buffers.entry(param.clone()).or_insert(0.0);
                *buffer = self.momentum * *buffer + d_p;
                d_p = if self.nesterov {
                    d_p + self.momentum * *buffer
                } else {
                    *buffer
                };
            }

            param.set_value(value - self.lr * d_p);
        }
        Ok(())
    }

    fn zero_grad(&mut self) {
        for param in &self.params {
            if param.is_live() {
                param.zero_grad();
            }
        }
    }

    fn lr(&self) -> f64 {
        self.lr
    }

    fn set_lr(&mut self, lr: f64) {
        self.lr = lr;
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
