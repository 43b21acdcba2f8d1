// scalargrad-core/src/ops/arithmetic/pow.rs

use crate::autograd::Op;
use crate::error::ScalarGradError;
use crate::ops::Operand;
use crate::value::Value;

/// Raises `base` to a constant power: `o = base ^ exponent`.
///
/// Backward: `base` receives `exponent * base^(exponent - 1) * o.grad`.
pub fn powf_op(base: &Value, exponent: f64) -> Result<Value, ScalarGradError> {
    let base_value = base.try_value()?;
    Ok(base.graph().push(
        base_value.powf(exponent),
        Op::Pow {
            base: base.id(),
            base_value,
            exponent,
        },
    ))
}

/// Raises `base` to `exponent`, which must be a constant.
///
/// # Errors
/// Returns `NonConstantExponent` when `exponent` is a graph node. The check
/// happens before anything is added to the graph.
pub fn pow_op(base: &Value, exponent: impl Into<Operand>) -> Result<Value, ScalarGradError> {
    match exponent.into() {
        Operand::Constant(n) => powf_op(base, n),
        Operand::Node(_) => Err(ScalarGradError::NonConstantExponent),
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
