use crate::error::ScalarGradError;
use crate::ops::{
    add_op, div_op, exp_op, mul_op, pow_op, powf_op, relu_op, sub_op, tanh_op, Operand,
};
use crate::value::accessors::live_or_panic;
use crate::value::Value;

// Fallible forms of the binary operators. Raw numbers are promoted to leaves
// on `self`'s graph.
impl Value {
    pub fn try_add(&self, rhs: impl Into<Operand>) -> Result<Value, ScalarGradError> {
        add_op(self, &rhs.into().into_value(self))
    }

    pub fn try_sub(&self, rhs: impl Into<Operand>) -> Result<Value, ScalarGradError> {
        sub_op(self, &rhs.into().into_value(self))
    }

    pub fn try_mul(&self, rhs: impl Into<Operand>) -> Result<Value, ScalarGradError> {
        mul_op(self, &rhs.into().into_value(self))
    }

    pub fn try_div(&self, rhs: impl Into<Operand>) -> Result<Value, ScalarGradError> {
        div_op(self, &rhs.into().into_value(self))
    }

    /// Raises `self` to `exponent`.
    ///
    /// # Errors
    /// `NonConstantExponent` if `exponent` is a `Value`: only constant powers
    /// are differentiable here. Use [`powf`](Value::powf) or
    /// [`powi`](Value::powi) to rule that out at compile time.
    pub fn pow(&self, exponent: impl Into<Operand>) -> Result<Value, ScalarGradError> {
        pow_op(self, exponent)
    }

    pub fn powf(&self, exponent: f64) -> Value {
        live_or_panic(powf_op(self, exponent))
    }

    pub fn powi(&self, exponent: i32) -> Value {
        live_or_panic(powf_op(self, exponent as f64))
    }

    pub fn exp(&self) -> Value {
        live_or_panic(exp_op(self))
    }

    pub fn tanh(&self) -> Value {
        live_or_panic(tanh_op(self))
    }

    pub fn relu(&self) -> Value {
        live_or_panic(relu_op(self))
    }
}
