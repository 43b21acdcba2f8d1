use crate::error::ScalarGradError;
use crate::ops::arithmetic::{mul_op, powf_op};
use crate::ops::check_same_graph;
use crate::value::Value;

/// Divides `a` by `b`, recorded as `a * b^(-1)`.
///
/// Division by zero is not intercepted: the forward value and the gradients
/// become infinite or NaN as IEEE arithmetic dictates.
pub fn div_op(a: &Value, b: &Value) -> Result<Value, ScalarGradError> {
    check_same_graph(a, b, "div")?;
    mul_op(a, &powf_op(b, -1.0)?)
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
