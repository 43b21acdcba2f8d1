// scalargrad-core/src/ops/arithmetic/add.rs

use crate::autograd::Op;
use crate::error::ScalarGradError;
use crate::ops::check_same_graph;
use crate::value::Value;

/// Adds two values: `o = a + b`.
///
/// Backward: both operands receive `1 * o.grad`.
///
/// # Errors
/// * `GraphMismatch` if `a` and `b` belong to different graphs.
/// * `StaleValue` if either operand was discarded from its graph.
pub fn add_op(a: &Value, b: &Value) -> Result<Value, ScalarGradError> {
    check_same_graph(a, b, "add")?;
    let out = a.try_value()? + b.try_value()?;
    Ok(a.graph().push(
        out,
        Op::Add {
            lhs: a.id(),
            rhs: b.id(),
        },
    ))
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
