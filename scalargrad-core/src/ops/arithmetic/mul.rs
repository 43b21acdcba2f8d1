// scalargrad-core/src/ops/arithmetic/mul.rs

use crate::autograd::Op;
use crate::error::ScalarGradError;
use crate::ops::check_same_graph;
use crate::value::Value;

/// Multiplies two values: `o = a * b`.
///
/// Backward: `a` receives `b * o.grad`, `b` receives `a * o.grad`. Both
/// operand values are captured now.
///
/// # Errors
/// * `GraphMismatch` if `a` and `b` belong to different graphs.
/// * `StaleValue` if either operand was discarded from its graph.
pub fn mul_op(a: &Value, b: &Value) -> Result<Value, ScalarGradError> {
    check_same_graph(a, b, "mul")?;
    let lhs_value = a.try_value()?;
    let rhs_value = b.try_value()?;
    Ok(a.graph().push(
        lhs_value * rhs_value,
        Op::Mul {
            lhs: a.id(),
            rhs: b.id(),
            lhs_value,
            rhs_value,
        },
    ))
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
