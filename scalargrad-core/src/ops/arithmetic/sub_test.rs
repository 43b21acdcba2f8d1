use super::*;
use crate::arena::Graph;
use crate::autograd::grad_check::{check_grad, GradCheckConfig, GradCheckError};
use crate::error::ScalarGradError;
use approx::assert_relative_eq;

#[test]
fn test_sub_forward_backward() -> Result<(), ScalarGradError> {
    let graph = Graph::new();
    let a = graph.value(5.0);
    let b = graph.value(3.5);
    let out = sub_op(&a, &b)?;
    assert_relative_eq!(out.value(), 1.5);
    out.backward()?;
    assert_relative_eq!(a.grad(), 1.0);
    assert_relative_eq!(b.grad(), -1.0);
    Ok(())
}

#[test]
fn test_sub_mismatch_creates_nothing() {
    let g1 = Graph::new();
    let g2 = Graph::new();
    let a = g1.value(1.0);
    let b = g2.value(1.0);
    assert!(sub_op(&a, &b).is_err());
    assert_eq!(g1.len(), 1);
    assert_eq!(g2.len(), 1);
}

#[test]
fn test_sub_grad_check() -> Result<(), GradCheckError> {
    let func = |inputs: &[crate::Value]| sub_op(&inputs[0], &inputs[1]);
    check_grad(func, &[-0.4, 1.1], &GradCheckConfig::default())
}
