use crate::autograd::Op;
use crate::error::ScalarGradError;
use crate::value::Value;

/// Applies the Rectified Linear Unit: `o = max(x, 0)`.
///
/// Backward: the operand receives `o.grad` when `o > 0` and nothing otherwise.
/// At `x == 0` the output is 0, so the indicator is false.
pub fn relu_op(input: &Value) -> Result<Value, ScalarGradError> {
    let x = input.try_value()?;
    let output = if x > 0.0 { x } else { 0.0 };
    Ok(input.graph().push(
        output,
        Op::Relu {
            input: input.id(),
            output,
        },
    ))
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
