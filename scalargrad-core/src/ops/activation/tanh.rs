// scalargrad-core/src/ops/activation/tanh.rs

use crate::autograd::Op;
use crate::error::ScalarGradError;
use crate::value::Value;

/// Applies the hyperbolic tangent: `o = (e^2x - 1) / (e^2x + 1)`.
///
/// The forward value uses `f64::tanh`, which saturates to ±1 for large
/// inputs instead of producing `inf / inf`.
///
/// Backward: the operand receives `(1 - o^2) * o.grad`, accumulated like
/// every other rule, so a tanh node feeding several consumers sums all of
/// their contributions.
pub fn tanh_op(input: &Value) -> Result<Value, ScalarGradError> {
    let output = input.try_value()?.tanh();
    Ok(input.graph().push(
        output,
        Op::Tanh {
            input: input.id(),
            output,
        },
    ))
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
