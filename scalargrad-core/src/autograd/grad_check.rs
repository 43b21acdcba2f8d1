use crate::arena::Graph;
use crate::error::ScalarGradError;
use crate::value::Value;
use approx::{abs_diff_eq, relative_eq};
use log::debug;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarGradError),
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(ScalarGradError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
}

// Map ScalarGradError to GradCheckError::ForwardPassError
impl From<ScalarGradError> for GradCheckError {
    fn from(err: ScalarGradError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Step size and tolerances for [`check_grad`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckConfig {
    /// Perturbation applied to one input at a time.
    pub epsilon: f64,
    pub abs_tolerance: f64,
    pub rel_tolerance: f64,
}

impl Default for GradCheckConfig {
    fn default() -> Self {
        GradCheckConfig {
            epsilon: 1e-6,
            abs_tolerance: 1e-4,
            rel_tolerance: 1e-4,
        }
    }
}

/// Checks analytical gradients against numerical gradients using centered
/// finite differences.
///
/// `func` builds a scalar expression from leaves holding `inputs`. It is run
/// once on a fresh graph to get the analytical gradients through
/// `backward()`, then twice more per input on fresh graphs with that input
/// perturbed by `±epsilon`:
///
/// `numerical_i = (f(x + eps·e_i) - f(x - eps·e_i)) / (2·eps)`
///
/// A gradient passes when it is within `abs_tolerance` or within
/// `rel_tolerance` (relative) of the numerical estimate.
pub fn check_grad<F>(func: F, inputs: &[f64], config: &GradCheckConfig) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, ScalarGradError>,
{
    // --- 1. Analytical gradients ---
    let graph = Graph::new();
    let leaves = graph.values(inputs);
    let output = func(&leaves).map_err(GradCheckError::ForwardPassError)?;
    output
        .backward()
        .map_err(GradCheckError::BackwardPassError)?;
    let analytical: Vec<f64> = leaves.iter().map(Value::grad).collect();

    // --- 2. Numerical gradients, one input at a time ---
    let evaluate = |perturbed: &[f64]| -> Result<f64, GradCheckError> {
        let graph = Graph::new();
        let leaves = graph.values(perturbed);
        let out = func(&leaves).map_err(GradCheckError::ForwardPassError)?;
        Ok(out.try_value()?)
    };

    for (i, &analytical_grad) in analytical.iter().enumerate() {
        let mut plus = inputs.to_vec();
        plus[i] += config.epsilon;
        let mut minus = inputs.to_vec();
        minus[i] -= config.epsilon;

        let loss_plus = evaluate(&plus)?;
        let loss_minus = evaluate(&minus)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * config.epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        let close = abs_diff_eq!(analytical_grad, numerical_grad, epsilon = config.abs_tolerance)
            || relative_eq!(
                analytical_grad,
                numerical_grad,
                max_relative = config.rel_tolerance
            );
        debug!(
            "check_grad: input {} analytical={} numerical={}",
            i, analytical_grad, numerical_grad
        );
        if !close {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_grad_accepts_correct_expression() {
        // ((a*b)+c).tanh()
        let func = |v: &[Value]| Ok((&(&v[0] * &v[1]) + &v[2]).tanh());
        let result = check_grad(func, &[0.4, -0.9, 0.2], &GradCheckConfig::default());
        assert!(result.is_ok(), "{:?}", result.err());
    }

    #[test]
    fn test_check_grad_reports_forward_error() {
        let func = |v: &[Value]| v[0].pow(&v[1]);
        let result = check_grad(func, &[2.0, 3.0], &GradCheckConfig::default());
        assert_eq!(
            result,
            Err(GradCheckError::ForwardPassError(
                ScalarGradError::NonConstantExponent
            ))
        );
    }

    #[test]
    fn test_check_grad_detects_non_differentiable_point() {
        // sqrt is undefined left of 0, so the centered estimate is NaN
        let func = |v: &[Value]| Ok(v[0].powf(0.5));
        let config = GradCheckConfig {
            epsilon: 1e-6,
            ..GradCheckConfig::default()
        };
        let result = check_grad(func, &[0.0], &config);
        assert!(result.is_err());
    }
}
