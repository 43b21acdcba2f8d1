use crate::autograd::Op;
use crate::error::ScalarGradError;
use crate::value::Value;

/// Applies the exponential: `o = e^x`.
///
/// Backward: the local derivative is the output itself. Overflow is not
/// intercepted and yields `inf`.
pub fn exp_op(input: &Value) -> Result<Value, ScalarGradError> {
    let output = input.try_value()?.exp();
    Ok(input.graph().push(
        output,
        Op::Exp {
            input: input.id(),
            output,
        },
    ))
}
