use super::*;
use crate::arena::Graph;
use crate::autograd::grad_check::{check_grad, GradCheckConfig, GradCheckError};
use crate::autograd::Op;
use crate::error::ScalarGradError;
use approx::assert_relative_eq;

#[test]
fn test_mul_forward() -> Result<(), ScalarGradError> {
    let graph = Graph::new();
    let a = graph.value(1.5);
    let b = graph.value(-2.0);
    let out = mul_op(&a, &b)?;
    assert_relative_eq!(out.value(), -3.0);
    assert_eq!(
        out.op(),
        Op::Mul {
            lhs: a.id(),
            rhs: b.id(),
            lhs_value: 1.5,
            rhs_value: -2.0,
        }
    );
    Ok(())
}

#[test]
fn test_mul_backward_swaps_operand_values() -> Result<(), ScalarGradError> {
    let graph = Graph::new();
    let a = graph.value(1.5);
    let b = graph.value(-2.0);
    let out = mul_op(&a, &b)?;
    out.backward()?;
    assert_relative_eq!(a.grad(), -2.0);
    assert_relative_eq!(b.grad(), 1.5);
    Ok(())
}

#[test]
fn test_mul_square() -> Result<(), ScalarGradError> {
    // x * x must give 2x through the two edges to the same node
    let graph = Graph::new();
    let x = graph.value(3.0);
    let out = mul_op(&x, &x)?;
    out.backward()?;
    assert_relative_eq!(out.value(), 9.0);
    assert_relative_eq!(x.grad(), 6.0);
    Ok(())
}

#[test]
fn test_mul_uses_values_captured_at_forward() -> Result<(), ScalarGradError> {
    let graph = Graph::new();
    let a = graph.value(2.0);
    let b = graph.value(5.0);
    let out = mul_op(&a, &b)?;
    b.set_value(100.0);
    out.backward()?;
    assert_relative_eq!(a.grad(), 5.0);
    Ok(())
}

#[test]
fn test_mul_grad_check() -> Result<(), GradCheckError> {
    let func = |inputs: &[crate::Value]| mul_op(&inputs[0], &inputs[1]);
    check_grad(func, &[0.7, -2.3], &GradCheckConfig::default())
}
