use crate::value::Value;

/// Checks that a value's forward result is within `tolerance` of `expected`.
/// Panics with both numbers otherwise.
pub fn check_value_near(actual: &Value, expected: f64, tolerance: f64) {
    let diff = (actual.value() - expected).abs();
    if diff > tolerance {
        panic!(
            "Value mismatch for {:?}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual,
            actual.value(),
            expected,
            diff,
            tolerance
        );
    }
}

/// Checks that a value's accumulated gradient is within `tolerance` of
/// `expected`. Panics with both numbers otherwise.
pub fn check_grad_near(actual: &Value, expected: f64, tolerance: f64) {
    let diff = (actual.grad() - expected).abs();
    if diff > tolerance {
        panic!(
            "Gradient mismatch for {:?}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual,
            actual.grad(),
            expected,
            diff,
            tolerance
        );
    }
}
