use crate::error::ScalarGradError;
use crate::ops::arithmetic::mul_op;
use crate::value::Value;

/// Negates a value, recorded as `a * (-1)` with `-1` promoted to a leaf.
pub fn neg_op(a: &Value) -> Result<Value, ScalarGradError> {
    a.ensure_live()?;
    mul_op(a, &a.constant_like(-1.0))
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
