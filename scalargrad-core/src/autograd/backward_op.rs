// src/autograd/backward_op.rs

use crate::arena::NodeId;

/// The operation that produced a node, together with everything its backward
/// rule needs.
///
/// Every derived node stores one `Op`. Operand values (and the node's own
/// output where the derivative is expressed through it) are captured at
/// forward time, so the backward rule of a node is a pure function of its tag:
/// an optimizer overwriting a leaf between forward and backward does not
/// change the gradients of the pass already recorded.
///
/// Subtraction, negation and division have no variant of their own. They are
/// built from `Add`, `Mul` and `Pow` when the graph is constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    /// A leaf created from a raw number. Has no operands.
    Leaf,
    Add {
        lhs: NodeId,
        rhs: NodeId,
    },
    Mul {
        lhs: NodeId,
        rhs: NodeId,
        lhs_value: f64,
        rhs_value: f64,
    },
    /// `base ^ exponent` for a constant exponent.
    Pow {
        base: NodeId,
        base_value: f64,
        exponent: f64,
    },
    Exp {
        input: NodeId,
        output: f64,
    },
    Tanh {
        input: NodeId,
        output: f64,
    },
    Relu {
        input: NodeId,
        output: f64,
    },
}

impl Op {
    /// Iterates over the operand ids of this operation, in construction order.
    ///
    /// A node built as `x * x` yields the same id twice; callers that
    /// traverse the graph must tolerate duplicates.
    pub fn operands(&self) -> impl Iterator<Item = NodeId> {
        let pair = match *self {
            Op::Leaf => [None, None],
            Op::Add { lhs, rhs } | Op::Mul { lhs, rhs, .. } => [Some(lhs), Some(rhs)],
            Op::Pow { base, .. } => [Some(base), None],
            Op::Exp { input, .. } | Op::Tanh { input, .. } | Op::Relu { input, .. } => {
                [Some(input), None]
            }
        };
        pair.into_iter().flatten()
    }

    /// Returns `(operand, ∂output/∂operand)` for each operand of this op.
    ///
    /// | op    | local derivative                  |
    /// |-------|-----------------------------------|
    /// | add   | 1, 1                              |
    /// | mul   | rhs value, lhs value              |
    /// | pow   | `n * x^(n-1)`                     |
    /// | exp   | the output itself                 |
    /// | tanh  | `1 - output^2`                    |
    /// | relu  | 1 if output > 0, else 0           |
    ///
    /// The relu indicator is taken on the output, so an input of exactly 0
    /// contributes nothing.
    pub fn local_derivatives(&self) -> impl Iterator<Item = (NodeId, f64)> {
        let pair = match *self {
            Op::Leaf => [None, None],
            Op::Add { lhs, rhs } => [Some((lhs, 1.0)), Some((rhs, 1.0))],
            Op::Mul {
                lhs,
                rhs,
                lhs_value,
                rhs_value,
            } => [Some((lhs, rhs_value)), Some((rhs, lhs_value))],
            Op::Pow {
                base,
                base_value,
                exponent,
            } => {
                // x^0 is constant; 0 * 0^-1 would be NaN at x = 0
                let local = if exponent == 0.0 {
                    0.0
                } else {
                    exponent * base_value.powf(exponent - 1.0)
                };
                [Some((base, local)), None]
            }
            Op::Exp { input, output } => [Some((input, output)), None],
            Op::Tanh { input, output } => [Some((input, 1.0 - output * output)), None],
            Op::Relu { input, output } => {
                let indicator = if output > 0.0 { 1.0 } else { 0.0 };
                [Some((input, indicator)), None]
            }
        };
        pair.into_iter().flatten()
    }

    /// Runs the backward rule of the node `out`: adds
    /// `local_derivative * grads[out]` into each operand's gradient.
    ///
    /// Gradients are only ever accumulated here, never assigned. A node with
    /// several consumers receives one contribution per consuming edge.
    pub(crate) fn propagate(&self, out: NodeId, grads: &mut [f64]) {
        let upstream = grads[out.index()];
        for (operand, local) in self.local_derivatives() {
            grads[operand.index()] += local * upstream;
        }
    }

    /// Short label used by `Debug` output, following the usual micrograd
    /// notation (`+`, `*`, `**n`, ...).
    pub fn symbol(&self) -> String {
        match self {
            Op::Leaf => String::new(),
            Op::Add { .. } => "+".to_string(),
            Op::Mul { .. } => "*".to_string(),
            Op::Pow { exponent, .. } => format!("**{}", exponent),
            Op::Exp { .. } => "exp".to_string(),
            Op::Tanh { .. } => "tanh".to_string(),
            Op::Relu { .. } => "relu".to_string(),
        }
    }
}

#[cfg(test)]
#[path = "backward_op_test.rs"]
mod tests;
