use super::*;
use crate::arena::Graph;
use crate::autograd::grad_check::{check_grad, GradCheckConfig, GradCheckError};
use crate::error::ScalarGradError;
use approx::assert_relative_eq;

#[test]
fn test_div_forward_backward() -> Result<(), ScalarGradError> {
    let graph = Graph::new();
    let a = graph.value(3.0);
    let b = graph.value(4.0);
    let out = div_op(&a, &b)?;
    assert_relative_eq!(out.value(), 0.75);
    out.backward()?;
    // d(a/b)/da = 1/b, d(a/b)/db = -a/b^2
    assert_relative_eq!(a.grad(), 0.25);
    assert_relative_eq!(b.grad(), -3.0 / 16.0);
    Ok(())
}

#[test]
fn test_div_by_zero_is_not_intercepted() -> Result<(), ScalarGradError> {
    let graph = Graph::new();
    let a = graph.value(1.0);
    let b = graph.value(0.0);
    let out = div_op(&a, &b)?;
    assert!(out.value().is_infinite());
    out.backward()?;
    assert!(a.grad().is_infinite());
    assert!(!b.grad().is_finite());
    Ok(())
}

#[test]
fn test_div_grad_check() -> Result<(), GradCheckError> {
    let func = |inputs: &[crate::Value]| div_op(&inputs[0], &inputs[1]);
    check_grad(func, &[1.3, -0.8], &GradCheckConfig::default())
}
