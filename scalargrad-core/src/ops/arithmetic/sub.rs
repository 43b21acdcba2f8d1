use crate::error::ScalarGradError;
use crate::ops::arithmetic::{add_op, neg_op};
use crate::ops::check_same_graph;
use crate::value::Value;

/// Subtracts `b` from `a`, recorded as `a + (-b)`.
///
/// The graph check runs first so a mismatch leaves no stray nodes behind.
pub fn sub_op(a: &Value, b: &Value) -> Result<Value, ScalarGradError> {
    check_same_graph(a, b, "sub")?;
    add_op(a, &neg_op(b)?)
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
