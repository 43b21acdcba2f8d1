//! # Scalar Operations Module (`ops`)
//!
//! Forward computation and graph construction for every supported operation.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** Each operation has a core function (named `xxx_op`) that
//!   computes the forward value eagerly and records a new node whose
//!   [`Op`](crate::autograd::Op) tag carries what the backward rule needs.
//!   [`Value`] methods and the `std::ops` overloads are thin wrappers over them.
//! - **Primitive rules:** Only `add`, `mul`, `pow`, `exp`, `tanh` and `relu` record
//!   their own tag. `neg`, `sub` and `div` are compositions of the primitives.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, mul, neg, sub, div, pow.
//! - [`activation`]: exp, tanh, relu.

use crate::error::ScalarGradError;
use crate::value::Value;

pub mod activation;
pub mod arithmetic;

pub use activation::{exp_op, relu_op, tanh_op};
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, powf_op, sub_op};

/// Right-hand side of an operation: either an existing node or a raw number
/// that will be promoted to a leaf on the other operand's graph.
#[derive(Debug, Clone)]
pub enum Operand {
    Constant(f64),
    Node(Value),
}

impl Operand {
    /// Resolves the operand to a node on `like`'s graph, creating a leaf for
    /// constants.
    pub fn into_value(self, like: &Value) -> Value {
        match self {
            Operand::Constant(c) => like.constant_like(c),
            Operand::Node(v) => v,
        }
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Constant(value)
    }
}

impl From<f32> for Operand {
    fn from(value: f32) -> Self {
        Operand::Constant(value as f64)
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Constant(value as f64)
    }
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        Operand::Node(value)
    }
}

impl From<&Value> for Operand {
    fn from(value: &Value) -> Self {
        Operand::Node(value.clone())
    }
}

/// Fails with `GraphMismatch` unless both values live in the same graph.
pub(crate) fn check_same_graph(
    a: &Value,
    b: &Value,
    operation: &str,
) -> Result<(), ScalarGradError> {
    if a.graph().ptr_eq(b.graph()) {
        Ok(())
    } else {
        Err(ScalarGradError::GraphMismatch {
            operation: operation.to_string(),
        })
    }
}
